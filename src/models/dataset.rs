//! The in-memory dataset loaded at startup

use serde::{Deserialize, Serialize};

use super::{Metric, TrackRecord};

/// An ordered, read-only collection of track records plus the schema facts
/// fixed at load time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// All records, in file order
    pub tracks: Vec<TrackRecord>,
    /// Whether the popularity column was present in the CSV
    pub has_popularity: bool,
    /// Metrics whose columns exist in the CSV, in display order
    pub metrics: Vec<Metric>,
    /// Smallest year in the data
    pub year_min: i32,
    /// Largest year in the data
    pub year_max: i32,
}

impl Dataset {
    /// Build a dataset from cleaned records and the set of available metrics
    pub fn new(tracks: Vec<TrackRecord>, metrics: Vec<Metric>, has_popularity: bool) -> Self {
        let year_min = tracks.iter().map(|t| t.year).min().unwrap_or(0);
        let year_max = tracks.iter().map(|t| t.year).max().unwrap_or(0);

        Self {
            tracks,
            has_popularity,
            metrics,
            year_min,
            year_max,
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Metric the trend chart starts on: danceability when available,
    /// otherwise the first available metric
    pub fn default_metric(&self) -> Metric {
        if self.metrics.contains(&Metric::Danceability) {
            Metric::Danceability
        } else {
            self.metrics.first().copied().unwrap_or(Metric::Danceability)
        }
    }

    /// Whether the given metric's column exists in this dataset
    pub fn has_metric(&self, metric: Metric) -> bool {
        self.metrics.contains(&metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32) -> TrackRecord {
        TrackRecord {
            artist_name: "A".to_string(),
            track_name: "T".to_string(),
            year,
            popularity: None,
            danceability: 0.5,
            energy: 0.5,
            valence: 0.5,
            tempo: 120.0,
            acousticness: None,
            speechiness: None,
            instrumentalness: None,
            liveness: None,
            loudness: None,
            genre: None,
        }
    }

    #[test]
    fn test_year_bounds() {
        let dataset = Dataset::new(
            vec![record(1999), record(2010), record(2003)],
            vec![Metric::Danceability],
            false,
        );
        assert_eq!(dataset.year_min, 1999);
        assert_eq!(dataset.year_max, 2010);
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_default_metric_prefers_danceability() {
        let dataset = Dataset::new(
            vec![record(2000)],
            vec![Metric::Danceability, Metric::Energy],
            false,
        );
        assert_eq!(dataset.default_metric(), Metric::Danceability);

        let dataset = Dataset::new(vec![record(2000)], vec![Metric::Energy, Metric::Tempo], false);
        assert_eq!(dataset.default_metric(), Metric::Energy);
    }
}
