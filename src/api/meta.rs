//! Dataset metadata API routes
//!
//! One-shot endpoint the page calls on load to initialize its controls:
//! year slider bounds, the metric picker, and whether popularity features
//! are available.

use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::stores::DatasetStore;

/// Dataset facts needed to build the control row
#[derive(Debug, Serialize)]
pub struct MetaResponse {
    pub year_min: i32,
    pub year_max: i32,
    pub track_count: usize,
    pub metrics: Vec<MetricOption>,
    pub default_metric: String,
    pub has_popularity: bool,
}

/// One entry in the metric picker
#[derive(Debug, Serialize)]
pub struct MetricOption {
    pub value: String,
    pub label: String,
}

/// GET /api/meta
#[get("")]
pub async fn get_meta() -> impl Responder {
    let dataset = DatasetStore::get().dataset();

    let metrics = dataset
        .metrics
        .iter()
        .map(|m| MetricOption {
            value: m.as_str().to_string(),
            label: m.label().to_string(),
        })
        .collect();

    HttpResponse::Ok().json(MetaResponse {
        year_min: dataset.year_min,
        year_max: dataset.year_max,
        track_count: dataset.len(),
        metrics,
        default_metric: dataset.default_metric().as_str().to_string(),
        has_popularity: dataset.has_popularity,
    })
}

/// Configure meta routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_meta);
}
