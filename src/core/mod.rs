//! Core library functions for the explorer

pub mod charts;
pub mod filter;
pub mod loader;

pub use filter::{filter_tracks, TrackFilter, ALL_ARTISTS};
pub use loader::{load_dataset, LoadError};
