//! Dataset store - process-wide holder for the loaded dataset

use std::sync::{Arc, OnceLock, RwLock};

use crate::models::Dataset;

/// Global dataset store instance
static DATASET_STORE: OnceLock<Arc<DatasetStore>> = OnceLock::new();

/// Read-only holder for the dataset. Written once at startup, read by every
/// request handler afterwards.
pub struct DatasetStore {
    dataset: RwLock<Arc<Dataset>>,
}

impl DatasetStore {
    /// Get or initialize the global store
    pub fn get() -> Arc<DatasetStore> {
        DATASET_STORE
            .get_or_init(|| {
                Arc::new(DatasetStore {
                    dataset: RwLock::new(Arc::new(Dataset::default())),
                })
            })
            .clone()
    }

    /// Install the loaded dataset
    pub fn load(&self, dataset: Dataset) {
        *self.dataset.write().unwrap() = Arc::new(dataset);
    }

    /// Snapshot handle to the current dataset
    pub fn dataset(&self) -> Arc<Dataset> {
        self.dataset.read().unwrap().clone()
    }

    /// Number of loaded records
    pub fn count(&self) -> usize {
        self.dataset.read().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Metric, TrackRecord};

    #[test]
    fn test_load_and_read_back() {
        let record = TrackRecord {
            artist_name: "A".to_string(),
            track_name: "T".to_string(),
            year: 2000,
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
        };

        let store = DatasetStore::get();
        store.load(Dataset::new(vec![record], vec![Metric::Danceability], false));

        assert_eq!(store.count(), 1);
        assert_eq!(store.dataset().tracks[0].artist_name, "A");
    }
}
