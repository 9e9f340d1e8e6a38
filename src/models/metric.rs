//! Selectable metrics for the trend chart

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A numeric column the user can pick to drive the trend chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Danceability,
    Energy,
    Valence,
    Tempo,
    Acousticness,
    Speechiness,
    Instrumentalness,
    Liveness,
    Loudness,
    Popularity,
}

impl Metric {
    /// All known metrics, in display order
    pub const ALL: [Metric; 10] = [
        Metric::Danceability,
        Metric::Energy,
        Metric::Valence,
        Metric::Tempo,
        Metric::Acousticness,
        Metric::Speechiness,
        Metric::Instrumentalness,
        Metric::Liveness,
        Metric::Loudness,
        Metric::Popularity,
    ];

    /// Column name as it appears in the CSV header
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Danceability => "danceability",
            Metric::Energy => "energy",
            Metric::Valence => "valence",
            Metric::Tempo => "tempo",
            Metric::Acousticness => "acousticness",
            Metric::Speechiness => "speechiness",
            Metric::Instrumentalness => "instrumentalness",
            Metric::Liveness => "liveness",
            Metric::Loudness => "loudness",
            Metric::Popularity => "popularity",
        }
    }

    /// Human-readable label for the UI
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Danceability => "Danceability",
            Metric::Energy => "Energy",
            Metric::Valence => "Valence",
            Metric::Tempo => "Tempo (BPM)",
            Metric::Acousticness => "Acousticness",
            Metric::Speechiness => "Speechiness",
            Metric::Instrumentalness => "Instrumentalness",
            Metric::Liveness => "Liveness",
            Metric::Loudness => "Loudness (dB)",
            Metric::Popularity => "Popularity",
        }
    }

    /// Whether the metric ranges over [0, 1]; those charts pin the y-axis
    pub fn is_unit_interval(&self) -> bool {
        matches!(
            self,
            Metric::Danceability
                | Metric::Energy
                | Metric::Valence
                | Metric::Acousticness
                | Metric::Speechiness
                | Metric::Instrumentalness
                | Metric::Liveness
        )
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(metric.as_str().parse::<Metric>(), Ok(metric));
        }
        assert!("loudnes".parse::<Metric>().is_err());
        assert!("".parse::<Metric>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Metric::Tempo.label(), "Tempo (BPM)");
        assert_eq!(Metric::Loudness.label(), "Loudness (dB)");
        assert_eq!(Metric::Danceability.label(), "Danceability");
    }

    #[test]
    fn test_unit_interval() {
        assert!(Metric::Energy.is_unit_interval());
        assert!(Metric::Valence.is_unit_interval());
        assert!(!Metric::Tempo.is_unit_interval());
        assert!(!Metric::Loudness.is_unit_interval());
        assert!(!Metric::Popularity.is_unit_interval());
    }
}
