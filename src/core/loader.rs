//! Dataset loading
//!
//! Finds a Spotify CSV in the data directory (plain or gzipped), reads it,
//! cleans the rows, and verifies the required columns are present.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Dataset, Metric, TrackRecord};

/// Years outside this range are treated as data errors and dropped
pub const YEAR_LOWER_BOUND: i32 = 1950;
pub const YEAR_UPPER_BOUND: i32 = 2030;

/// Columns the app cannot work without
const REQUIRED_COLUMNS: [&str; 7] = [
    "artist_name",
    "track_name",
    "year",
    "danceability",
    "energy",
    "valence",
    "tempo",
];

/// Errors raised while locating or reading the dataset. All of these are
/// fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no dataset found in {0:?}; put your Kaggle CSV there (e.g. spotify_data.csv)")]
    NoDatasetFound(PathBuf),

    #[error("missing columns: {0:?}; check your CSV")]
    MissingColumns(Vec<String>),

    #[error("no usable rows after cleaning")]
    EmptyDataset,

    #[error("bad glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Find the most likely dataset file in the data directory.
///
/// Prefers `spotify*.csv` / `spotify*.csv.gz`, then falls back to any CSV.
/// Candidates within each pattern are tried in lexicographic order.
pub fn find_dataset_file(data_dir: &Path) -> Result<PathBuf, LoadError> {
    let patterns = ["spotify*.csv", "spotify*.csv.gz", "*.csv", "*.csv.gz"];

    for pattern in patterns {
        let full = data_dir.join(pattern);
        let mut matches: Vec<PathBuf> = glob::glob(&full.to_string_lossy())?
            .filter_map(Result::ok)
            .collect();
        matches.sort();

        if let Some(first) = matches.into_iter().next() {
            return Ok(first);
        }
    }

    Err(LoadError::NoDatasetFound(data_dir.to_path_buf()))
}

/// Load the dataset from the data directory
pub fn load_dataset(data_dir: &Path) -> Result<Dataset, LoadError> {
    let path = find_dataset_file(data_dir)?;
    info!("Loading dataset: {:?}", path);
    load_from_path(&path)
}

/// Load and clean a single CSV file, gzipped or plain
pub fn load_from_path(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path)?;

    let is_gzipped = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("gz"))
        .unwrap_or(false);

    let reader: Box<dyn Read> = if is_gzipped {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    read_records(reader)
}

/// Parse CSV content into a cleaned dataset
fn read_records(reader: impl Read) -> Result<Dataset, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns: HashMap<&str, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| (name.trim(), i))
        .collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !columns.contains_key(**c))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let fields = FieldIndexes::from_columns(&columns);
    let has_popularity = fields.popularity.is_some();

    let metrics: Vec<Metric> = Metric::ALL
        .into_iter()
        .filter(|m| columns.contains_key(m.as_str()))
        .collect();

    let mut tracks = Vec::new();
    let mut dropped = 0usize;

    for record in csv_reader.records() {
        let record = record?;
        match fields.parse_row(&record) {
            Some(track) => tracks.push(track),
            None => dropped += 1,
        }
    }

    if tracks.is_empty() {
        return Err(LoadError::EmptyDataset);
    }

    if dropped > 0 {
        debug!("Dropped {} rows during cleaning", dropped);
    }
    info!(
        "Loaded {} tracks ({} metrics available, popularity: {})",
        tracks.len(),
        metrics.len(),
        has_popularity
    );

    Ok(Dataset::new(tracks, metrics, has_popularity))
}

/// Resolved column positions for one CSV file
struct FieldIndexes {
    artist_name: usize,
    track_name: usize,
    year: usize,
    danceability: usize,
    energy: usize,
    valence: usize,
    tempo: usize,
    popularity: Option<usize>,
    acousticness: Option<usize>,
    speechiness: Option<usize>,
    instrumentalness: Option<usize>,
    liveness: Option<usize>,
    loudness: Option<usize>,
    genre: Option<usize>,
}

impl FieldIndexes {
    fn from_columns(columns: &HashMap<&str, usize>) -> Self {
        // required columns are verified present before this is constructed
        Self {
            artist_name: columns["artist_name"],
            track_name: columns["track_name"],
            year: columns["year"],
            danceability: columns["danceability"],
            energy: columns["energy"],
            valence: columns["valence"],
            tempo: columns["tempo"],
            popularity: columns.get("popularity").copied(),
            acousticness: columns.get("acousticness").copied(),
            speechiness: columns.get("speechiness").copied(),
            instrumentalness: columns.get("instrumentalness").copied(),
            liveness: columns.get("liveness").copied(),
            loudness: columns.get("loudness").copied(),
            genre: columns.get("genre").copied(),
        }
    }

    /// Clean one row. Returns None when a required value is missing,
    /// unparsable, or the year is implausible.
    fn parse_row(&self, record: &csv::StringRecord) -> Option<TrackRecord> {
        let artist_name = record.get(self.artist_name)?.trim();
        let track_name = record.get(self.track_name)?.trim();
        if artist_name.is_empty() || track_name.is_empty() {
            return None;
        }

        let year = parse_year(record.get(self.year)?)?;
        if !(YEAR_LOWER_BOUND..=YEAR_UPPER_BOUND).contains(&year) {
            return None;
        }

        Some(TrackRecord {
            artist_name: artist_name.to_string(),
            track_name: track_name.to_string(),
            year,
            popularity: self.optional_numeric(record, self.popularity),
            danceability: parse_numeric(record.get(self.danceability)?)?,
            energy: parse_numeric(record.get(self.energy)?)?,
            valence: parse_numeric(record.get(self.valence)?)?,
            tempo: parse_numeric(record.get(self.tempo)?)?,
            acousticness: self.optional_numeric(record, self.acousticness),
            speechiness: self.optional_numeric(record, self.speechiness),
            instrumentalness: self.optional_numeric(record, self.instrumentalness),
            liveness: self.optional_numeric(record, self.liveness),
            loudness: self.optional_numeric(record, self.loudness),
            genre: self
                .genre
                .and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(str::to_string),
        })
    }

    /// Optional columns coerce garbage to None instead of dropping the row
    fn optional_numeric(&self, record: &csv::StringRecord, index: Option<usize>) -> Option<f64> {
        index
            .and_then(|i| record.get(i))
            .and_then(parse_numeric)
    }
}

/// Parse a numeric cell, rejecting NaN and infinities
fn parse_numeric(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Years sometimes arrive as floats ("2000.0" style exports)
fn parse_year(value: &str) -> Option<i32> {
    parse_numeric(value).map(|v| v as i32)
}
