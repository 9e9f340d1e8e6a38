//! Artist options API routes

use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::core::charts::artist_options;
use crate::core::{filter_tracks, TrackFilter};
use crate::stores::DatasetStore;

/// Query parameters for the artist list. The current artist selection is
/// deliberately absent: the list must not narrow itself.
#[derive(Debug, Deserialize)]
pub struct ArtistsQuery {
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    #[serde(default)]
    pub q: String,
}

/// Selectable artist names, "All" sentinel first
#[derive(Debug, Serialize)]
pub struct ArtistOptionsResponse {
    pub artists: Vec<String>,
}

/// GET /api/artists
#[get("")]
pub async fn get_artist_options(query: web::Query<ArtistsQuery>) -> impl Responder {
    let dataset = DatasetStore::get().dataset();

    let filter = TrackFilter {
        year_min: query.year_min.unwrap_or(dataset.year_min),
        year_max: query.year_max.unwrap_or(dataset.year_max),
        song_query: Some(query.q.clone()),
        artist: None,
    };
    let subset = filter_tracks(&dataset.tracks, &filter);

    HttpResponse::Ok().json(ArtistOptionsResponse {
        artists: artist_options(&subset),
    })
}

/// Configure artist routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_artist_options);
}
