//! Chart data API routes
//!
//! The main figures handler: recomputes all three charts from the current
//! filter selections on every call. Stateless; nothing is cached between
//! requests.

use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::charts::{self, TOP_TRACKS_COUNT};
use crate::core::{filter_tracks, TrackFilter, ALL_ARTISTS};
use crate::models::Metric;
use crate::serializers;
use crate::stores::DatasetStore;

/// Query parameters for the charts endpoint; omitted values fall back to
/// the full dataset and the default metric
#[derive(Debug, Deserialize)]
pub struct ChartsQuery {
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    #[serde(default)]
    pub q: String,
    pub artist: Option<String>,
    pub metric: Option<String>,
}

/// The three figure specs rendered by the client
#[derive(Debug, Serialize)]
pub struct ChartsResponse {
    pub trend: Value,
    pub scatter: Value,
    pub top_tracks: Value,
}

/// GET /api/charts
#[get("")]
pub async fn get_charts(query: web::Query<ChartsQuery>) -> impl Responder {
    let dataset = DatasetStore::get().dataset();

    let metric = match &query.metric {
        None => dataset.default_metric(),
        Some(name) => match name.parse::<Metric>() {
            Ok(metric) if dataset.has_metric(metric) => metric,
            Ok(_) => {
                return HttpResponse::BadRequest().json(json!({
                    "error": format!("Metric '{}' is not present in this dataset", name),
                }));
            }
            Err(_) => {
                return HttpResponse::BadRequest().json(json!({
                    "error": format!("Unknown metric '{}'", name),
                }));
            }
        },
    };

    let year_min = query.year_min.unwrap_or(dataset.year_min);
    let year_max = query.year_max.unwrap_or(dataset.year_max);

    let filter = TrackFilter {
        year_min,
        year_max,
        song_query: Some(query.q.clone()),
        artist: query.artist.clone(),
    };
    let subset = filter_tracks(&dataset.tracks, &filter);

    // title suffix only; the filter treats the sentinel itself
    let artist_label = query
        .artist
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty() && *a != ALL_ARTISTS);

    let trend = charts::trend_series(&subset, metric);
    let points = charts::scatter_points(&subset);
    let top = charts::top_tracks(&subset, TOP_TRACKS_COUNT);

    HttpResponse::Ok().json(ChartsResponse {
        trend: serializers::trend_figure(&trend, metric, (year_min, year_max), artist_label),
        scatter: serializers::scatter_figure(
            &points,
            dataset.has_popularity,
            (year_min, year_max),
            artist_label,
        ),
        top_tracks: serializers::top_tracks_figure(&top, artist_label),
    })
}

/// Configure chart routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_charts);
}
