//! Chart data shaping
//!
//! Derives the three presentation-ready series from a filtered subset:
//! metric trend by year, energy vs tempo scatter, and top tracks by
//! popularity. Everything here is recomputed per request from the subset.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

use crate::core::filter::ALL_ARTISTS;
use crate::models::{Metric, TrackRecord};

/// Number of entries in the ranked top-tracks chart
pub const TOP_TRACKS_COUNT: usize = 15;

/// Scatter point cap; larger subsets are subsampled to keep the figure
/// responsive in the browser
pub const SCATTER_SAMPLE_CAP: usize = 5000;

/// Fixed seed so repeated renders of the same subset pick the same sample
const SCATTER_SAMPLE_SEED: u64 = 7;

/// Cap on the artist dropdown, not counting the "All" sentinel
pub const ARTIST_OPTIONS_CAP: usize = 300;

/// Mean of a metric for one year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub year: i32,
    pub mean: f64,
}

/// One scatter point, x=tempo and y=energy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub tempo: f64,
    pub energy: f64,
    pub label: String,
    /// Drives bubble sizing; None renders at uniform size
    pub popularity: Option<f64>,
}

/// One bar in the top-tracks chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTrack {
    pub track_name: String,
    pub artist_name: String,
    pub popularity: f64,
}

/// Mean of the selected metric per year, ascending by year. Years with no
/// rows (or no values for an optional metric) are simply absent.
pub fn trend_series(subset: &[&TrackRecord], metric: Metric) -> Vec<TrendPoint> {
    let mut by_year: BTreeMap<i32, (f64, u32)> = BTreeMap::new();

    for track in subset {
        if let Some(value) = track.metric_value(metric) {
            let entry = by_year.entry(track.year).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }

    by_year
        .into_iter()
        .map(|(year, (sum, count))| TrendPoint {
            year,
            mean: sum / count as f64,
        })
        .collect()
}

/// One point per subset row, subsampled deterministically past the cap
pub fn scatter_points(subset: &[&TrackRecord]) -> Vec<ScatterPoint> {
    let sampled: Vec<&TrackRecord> = if subset.len() > SCATTER_SAMPLE_CAP {
        let mut rng = StdRng::seed_from_u64(SCATTER_SAMPLE_SEED);
        subset
            .choose_multiple(&mut rng, SCATTER_SAMPLE_CAP)
            .copied()
            .collect()
    } else {
        subset.to_vec()
    };

    sampled
        .into_iter()
        .map(|track| ScatterPoint {
            tempo: track.tempo,
            energy: track.energy,
            label: track.hover_label(),
            popularity: track.popularity,
        })
        .collect()
}

/// Top tracks by popularity, descending. The sort is stable, so ties keep
/// their original row order. Rows without a popularity value never rank,
/// which leaves the list empty when the column is absent.
pub fn top_tracks(subset: &[&TrackRecord], limit: usize) -> Vec<RankedTrack> {
    let mut ranked: Vec<(&TrackRecord, f64)> = subset
        .iter()
        .filter_map(|t| t.popularity.map(|p| (*t, p)))
        .collect();

    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(track, popularity)| RankedTrack {
            track_name: track.track_name.clone(),
            artist_name: track.artist_name.clone(),
            popularity,
        })
        .collect()
}

/// Distinct artist names in the subset, sorted, prefixed with the "All"
/// sentinel. Capped to keep the dropdown responsive on broad filters.
pub fn artist_options(subset: &[&TrackRecord]) -> Vec<String> {
    let distinct: BTreeSet<&str> = subset.iter().map(|t| t.artist_name.as_str()).collect();

    let mut options = Vec::with_capacity(distinct.len().min(ARTIST_OPTIONS_CAP) + 1);
    options.push(ALL_ARTISTS.to_string());
    options.extend(
        distinct
            .into_iter()
            .take(ARTIST_OPTIONS_CAP)
            .map(str::to_string),
    );

    options
}
