//! Dashboard page route
//!
//! Serves the single-page client. A client directory override (for people
//! iterating on the page without rebuilding) takes precedence over the
//! embedded copy.

use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use tracing::debug;

use crate::config::Settings;

/// The embedded dashboard page
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET /
#[get("/")]
pub async fn index(req: HttpRequest) -> impl Responder {
    if let Ok(settings) = Settings::get() {
        if let Some(dir) = &settings.client_dir {
            let page = dir.join("index.html");
            if page.is_file() {
                match actix_files::NamedFile::open(&page) {
                    Ok(file) => return file.into_response(&req),
                    Err(e) => debug!("Falling back to embedded page: {}", e),
                }
            }
        }
    }

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

/// Configure page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
}
