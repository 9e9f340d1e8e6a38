//! Serializers for converting derived chart data into Plotly figure specs
//!
//! Each function produces a `{data, layout}` JSON object the web client
//! hands to Plotly unchanged. The client owns all rendering; nothing here
//! is interpreted server-side.

use serde_json::{json, Value};

use crate::core::charts::{RankedTrack, ScatterPoint, TrendPoint};
use crate::models::Metric;

/// Marker size used when popularity is unavailable for bubble sizing
const UNIFORM_MARKER_SIZE: f64 = 6.0;

/// Largest bubble diameter in pixels when sizing by popularity
const MAX_BUBBLE_SIZE: f64 = 18.0;

/// Shared layout polish applied to every figure
fn base_layout(title: String) -> Value {
    json!({
        "title": { "text": title },
        "height": 420,
        "margin": { "l": 40, "r": 16, "t": 60, "b": 40 },
        "hoverlabel": { "namelength": -1 },
    })
}

/// Title suffix for the currently selected artist, empty for "All"
fn artist_suffix(artist: Option<&str>) -> String {
    match artist {
        Some(a) => format!(" - {}", a),
        None => String::new(),
    }
}

/// Placeholder figure rendered when a filter produces no rows
pub fn empty_figure(title: &str) -> Value {
    json!({
        "data": [],
        "layout": base_layout(title.to_string()),
    })
}

/// Line chart of the metric's mean by year
pub fn trend_figure(
    trend: &[TrendPoint],
    metric: Metric,
    year_range: (i32, i32),
    artist: Option<&str>,
) -> Value {
    if trend.is_empty() {
        return empty_figure("No data for current filters");
    }

    let years: Vec<i32> = trend.iter().map(|p| p.year).collect();
    let means: Vec<f64> = trend.iter().map(|p| p.mean).collect();

    let mut layout = base_layout(format!(
        "{} Trend {}-{}{}",
        metric.label(),
        year_range.0,
        year_range.1,
        artist_suffix(artist)
    ));
    layout["xaxis"] = json!({ "title": { "text": "Year" } });
    layout["yaxis"] = json!({ "title": { "text": metric.label() } });
    if metric.is_unit_interval() {
        layout["yaxis"]["range"] = json!([0, 1]);
    }

    json!({
        "data": [{
            "type": "scatter",
            "mode": "lines+markers",
            "x": years,
            "y": means,
        }],
        "layout": layout,
    })
}

/// Energy vs tempo scatter; bubbles sized by popularity when available
pub fn scatter_figure(
    points: &[ScatterPoint],
    sized_by_popularity: bool,
    year_range: (i32, i32),
    artist: Option<&str>,
) -> Value {
    if points.is_empty() {
        return empty_figure("No data for current filters");
    }

    let tempos: Vec<f64> = points.iter().map(|p| p.tempo).collect();
    let energies: Vec<f64> = points.iter().map(|p| p.energy).collect();
    let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();

    let marker = if sized_by_popularity {
        let sizes: Vec<f64> = points
            .iter()
            .map(|p| p.popularity.unwrap_or(0.0).max(0.0))
            .collect();
        // plotly's recommended area scaling for bubble charts
        let max_pop = sizes.iter().cloned().fold(0.0f64, f64::max).max(1.0);
        let sizeref = 2.0 * max_pop / (MAX_BUBBLE_SIZE * MAX_BUBBLE_SIZE);
        json!({
            "size": sizes,
            "sizemode": "area",
            "sizeref": sizeref,
            "sizemin": 2,
        })
    } else {
        json!({ "size": UNIFORM_MARKER_SIZE })
    };

    let mut layout = base_layout(format!(
        "Energy vs Tempo{} ({}-{})",
        artist_suffix(artist),
        year_range.0,
        year_range.1
    ));
    layout["xaxis"] = json!({ "title": { "text": "Tempo (BPM)" } });
    // energy is a 0-1 feature
    layout["yaxis"] = json!({ "title": { "text": "Energy" }, "range": [0, 1] });
    layout["hovermode"] = json!("closest");

    json!({
        "data": [{
            "type": "scatter",
            "mode": "markers",
            "x": tempos,
            "y": energies,
            "text": labels,
            "hoverinfo": "text",
            "marker": marker,
        }],
        "layout": layout,
    })
}

/// Horizontal bar chart of the top tracks, highest bar on top
pub fn top_tracks_figure(top: &[RankedTrack], artist: Option<&str>) -> Value {
    if top.is_empty() {
        return empty_figure("No top tracks for current filters");
    }

    // reversed so the highest-ranked bar renders at the top
    let names: Vec<String> = top
        .iter()
        .rev()
        .map(|t| format!("{} - {}", t.track_name, t.artist_name))
        .collect();
    let popularity: Vec<f64> = top.iter().rev().map(|t| t.popularity).collect();

    let mut layout = base_layout(format!("Top Tracks by Popularity{}", artist_suffix(artist)));
    layout["xaxis"] = json!({ "title": { "text": "Popularity" } });
    layout["yaxis"] = json!({ "title": { "text": "Track" } });

    json!({
        "data": [{
            "type": "bar",
            "orientation": "h",
            "x": popularity,
            "y": names,
            "text": popularity,
            "textposition": "outside",
            "cliponaxis": false,
        }],
        "layout": layout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend_points() -> Vec<TrendPoint> {
        vec![
            TrendPoint { year: 2000, mean: 0.4 },
            TrendPoint { year: 2001, mean: 0.6 },
        ]
    }

    #[test]
    fn test_empty_figure_has_title_and_no_traces() {
        let fig = empty_figure("No data for current filters");
        assert_eq!(fig["data"].as_array().unwrap().len(), 0);
        assert_eq!(fig["layout"]["title"]["text"], "No data for current filters");
    }

    #[test]
    fn test_trend_figure_pins_unit_interval_axis() {
        let fig = trend_figure(&trend_points(), Metric::Energy, (2000, 2001), None);
        assert_eq!(fig["layout"]["yaxis"]["range"], json!([0, 1]));
        assert_eq!(fig["data"][0]["x"], json!([2000, 2001]));

        let fig = trend_figure(&trend_points(), Metric::Tempo, (2000, 2001), None);
        assert!(fig["layout"]["yaxis"].get("range").is_none());
    }

    #[test]
    fn test_trend_figure_title_mentions_artist() {
        let fig = trend_figure(&trend_points(), Metric::Energy, (2000, 2001), Some("Adele"));
        let title = fig["layout"]["title"]["text"].as_str().unwrap();
        assert!(title.contains("Energy Trend 2000-2001"));
        assert!(title.contains("Adele"));
    }

    #[test]
    fn test_scatter_uniform_size_without_popularity() {
        let points = vec![ScatterPoint {
            tempo: 120.0,
            energy: 0.5,
            label: "T - A (2000)".to_string(),
            popularity: None,
        }];

        let fig = scatter_figure(&points, false, (2000, 2000), None);
        assert_eq!(fig["data"][0]["marker"]["size"], json!(UNIFORM_MARKER_SIZE));

        let fig = scatter_figure(&points, true, (2000, 2000), None);
        assert_eq!(fig["data"][0]["marker"]["sizemode"], json!("area"));
    }

    #[test]
    fn test_top_tracks_figure_reverses_for_display() {
        let top = vec![
            RankedTrack {
                track_name: "High".to_string(),
                artist_name: "A".to_string(),
                popularity: 90.0,
            },
            RankedTrack {
                track_name: "Low".to_string(),
                artist_name: "B".to_string(),
                popularity: 10.0,
            },
        ];

        let fig = top_tracks_figure(&top, None);
        // last entry in the trace renders topmost in a horizontal bar chart
        assert_eq!(fig["data"][0]["x"], json!([10.0, 90.0]));
        assert_eq!(fig["data"][0]["y"][1], json!("High - A"));
    }

    #[test]
    fn test_empty_inputs_degrade_to_placeholders() {
        assert_eq!(
            trend_figure(&[], Metric::Energy, (2000, 2001), None)["layout"]["title"]["text"],
            "No data for current filters"
        );
        assert_eq!(
            top_tracks_figure(&[], None)["layout"]["title"]["text"],
            "No top tracks for current filters"
        );
    }
}
