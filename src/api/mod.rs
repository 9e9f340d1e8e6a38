//! HTTP routes for the explorer

pub mod artists;
pub mod charts;
pub mod meta;
pub mod pages;

use actix_web::web;

/// Configure all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Chart data routes
        .service(web::scope("/api/charts").configure(charts::configure))
        // Artist options routes
        .service(web::scope("/api/artists").configure(artists::configure))
        // Dataset metadata routes
        .service(web::scope("/api/meta").configure(meta::configure))
        // Dashboard page
        .configure(pages::configure);
}
