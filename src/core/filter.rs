//! Track filtering
//!
//! Pure predicate application over the in-memory dataset. Every chart and
//! the artist dropdown derive from the subset this produces.

use crate::models::TrackRecord;

/// Artist selection meaning "no artist predicate"
pub const ALL_ARTISTS: &str = "All";

/// The user's current filter selections
#[derive(Debug, Clone, Default)]
pub struct TrackFilter {
    /// Inclusive lower year bound
    pub year_min: i32,
    /// Inclusive upper year bound
    pub year_max: i32,
    /// Case-insensitive substring matched against track names
    pub song_query: Option<String>,
    /// Exact artist name, or None/"All" for no artist predicate
    pub artist: Option<String>,
}

impl TrackFilter {
    /// Normalized search needle, None when the query is empty or whitespace
    fn song_needle(&self) -> Option<String> {
        self.song_query
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty())
    }

    /// Active artist predicate, None for the "All" sentinel
    fn artist_name(&self) -> Option<&str> {
        self.artist
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty() && *a != ALL_ARTISTS)
    }

    /// Whether a single record passes all active predicates
    pub fn matches(&self, track: &TrackRecord) -> bool {
        self.matches_with(track, self.song_needle().as_deref(), self.artist_name())
    }

    fn matches_with(
        &self,
        track: &TrackRecord,
        needle: Option<&str>,
        artist: Option<&str>,
    ) -> bool {
        if track.year < self.year_min || track.year > self.year_max {
            return false;
        }

        if let Some(needle) = needle {
            if !track.track_name.to_lowercase().contains(needle) {
                return false;
            }
        }

        if let Some(artist) = artist {
            if track.artist_name != artist {
                return false;
            }
        }

        true
    }
}

/// Apply all active predicates, preserving row order. An empty result is
/// valid and produces empty charts downstream.
pub fn filter_tracks<'a>(tracks: &'a [TrackRecord], filter: &TrackFilter) -> Vec<&'a TrackRecord> {
    // normalize the needle once, not per row
    let needle = filter.song_needle();
    let artist = filter.artist_name();

    tracks
        .iter()
        .filter(|t| filter.matches_with(t, needle.as_deref(), artist))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(artist: &str, title: &str, year: i32) -> TrackRecord {
        TrackRecord {
            artist_name: artist.to_string(),
            track_name: title.to_string(),
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

    fn sample_tracks() -> Vec<TrackRecord> {
        vec![
            track("A", "In Love", 2000),
            track("A", "Hate", 2001),
            track("B", "Love Song", 2005),
            track("C", "Something Else", 2010),
        ]
    }

    #[test]
    fn test_year_bounds_hold() {
        let tracks = sample_tracks();
        let filter = TrackFilter {
            year_min: 2001,
            year_max: 2005,
            ..Default::default()
        };

        let subset = filter_tracks(&tracks, &filter);
        assert!(subset.iter().all(|t| t.year >= 2001 && t.year <= 2005));
        assert_eq!(subset.len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let tracks = sample_tracks();
        let filter = TrackFilter {
            year_min: 2000,
            year_max: 2005,
            song_query: Some("love".to_string()),
            artist: None,
        };

        let once = filter_tracks(&tracks, &filter);
        let twice: Vec<&TrackRecord> = once
            .iter()
            .copied()
            .filter(|t| filter.matches(t))
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_query_is_identity_on_text_axis() {
        let tracks = sample_tracks();
        let base = TrackFilter {
            year_min: 1950,
            year_max: 2030,
            ..Default::default()
        };
        let with_blank_query = TrackFilter {
            song_query: Some("   ".to_string()),
            ..base.clone()
        };

        assert_eq!(
            filter_tracks(&tracks, &base),
            filter_tracks(&tracks, &with_blank_query)
        );
        assert_eq!(filter_tracks(&tracks, &base).len(), 4);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let tracks = sample_tracks();
        let filter = TrackFilter {
            year_min: 1950,
            year_max: 2030,
            song_query: Some("love".to_string()),
            artist: None,
        };

        let subset = filter_tracks(&tracks, &filter);
        let titles: Vec<&str> = subset.iter().map(|t| t.track_name.as_str()).collect();
        assert_eq!(titles, vec!["In Love", "Love Song"]);
        assert!(!titles.contains(&"Hate"));
    }

    #[test]
    fn test_artist_exact_match_and_sentinel() {
        let tracks = sample_tracks();
        let mut filter = TrackFilter {
            year_min: 1950,
            year_max: 2030,
            song_query: None,
            artist: Some("A".to_string()),
        };
        assert_eq!(filter_tracks(&tracks, &filter).len(), 2);

        filter.artist = Some(ALL_ARTISTS.to_string());
        assert_eq!(filter_tracks(&tracks, &filter).len(), 4);
    }

    #[test]
    fn test_order_preserved() {
        let tracks = sample_tracks();
        let filter = TrackFilter {
            year_min: 1950,
            year_max: 2030,
            ..Default::default()
        };

        let subset = filter_tracks(&tracks, &filter);
        let years: Vec<i32> = subset.iter().map(|t| t.year).collect();
        assert_eq!(years, vec![2000, 2001, 2005, 2010]);
    }

    #[test]
    fn test_single_year_scenario() {
        // two rows, years 2000 and 2001, same artist; [2000, 2000] keeps one
        let tracks = vec![track("A", "First", 2000), track("A", "Second", 2001)];
        let filter = TrackFilter {
            year_min: 2000,
            year_max: 2000,
            ..Default::default()
        };

        let subset = filter_tracks(&tracks, &filter);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].year, 2000);
    }

    #[test]
    fn test_inverted_range_is_empty_not_error() {
        let tracks = sample_tracks();
        let filter = TrackFilter {
            year_min: 2010,
            year_max: 2000,
            ..Default::default()
        };
        assert!(filter_tracks(&tracks, &filter).is_empty());
    }
}
