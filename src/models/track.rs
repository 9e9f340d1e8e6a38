//! Track record model

use serde::{Deserialize, Serialize};

use super::Metric;

/// One row of the dataset: a single song observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Artist name
    pub artist_name: String,
    /// Track title
    pub track_name: String,
    /// Release year
    pub year: i32,
    /// Popularity score (column is optional in the CSV)
    #[serde(default)]
    pub popularity: Option<f64>,
    /// Danceability, 0 to 1
    pub danceability: f64,
    /// Energy, 0 to 1
    pub energy: f64,
    /// Valence, 0 to 1
    pub valence: f64,
    /// Tempo in BPM
    pub tempo: f64,
    /// Acousticness, 0 to 1
    #[serde(default)]
    pub acousticness: Option<f64>,
    /// Speechiness, 0 to 1
    #[serde(default)]
    pub speechiness: Option<f64>,
    /// Instrumentalness, 0 to 1
    #[serde(default)]
    pub instrumentalness: Option<f64>,
    /// Liveness, 0 to 1
    #[serde(default)]
    pub liveness: Option<f64>,
    /// Loudness in dB
    #[serde(default)]
    pub loudness: Option<f64>,
    /// Genre label
    #[serde(default)]
    pub genre: Option<String>,
}

impl TrackRecord {
    /// Get the value of a metric for this track, if present
    pub fn metric_value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Danceability => Some(self.danceability),
            Metric::Energy => Some(self.energy),
            Metric::Valence => Some(self.valence),
            Metric::Tempo => Some(self.tempo),
            Metric::Acousticness => self.acousticness,
            Metric::Speechiness => self.speechiness,
            Metric::Instrumentalness => self.instrumentalness,
            Metric::Liveness => self.liveness,
            Metric::Loudness => self.loudness,
            Metric::Popularity => self.popularity,
        }
    }

    /// Hover label shown on scatter points
    pub fn hover_label(&self) -> String {
        format!("{} - {} ({})", self.track_name, self.artist_name, self.year)
    }
}
