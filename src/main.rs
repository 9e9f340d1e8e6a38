//! Spotify Explorer - a self-hosted dashboard for exploring a Spotify
//! tracks dataset through filters and charts.

#![allow(dead_code)]

mod api;
mod config;
mod core;
mod models;
mod serializers;
mod stores;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::config::Settings;
use crate::stores::DatasetStore;

/// Spotify Explorer - dataset dashboard
#[derive(Parser, Debug)]
#[command(name = "spotify-explorer")]
#[command(version = "0.1.0")]
#[command(about = "A self-hosted dashboard for exploring a Spotify tracks dataset")]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = config::DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Directory containing the dataset CSV
    #[arg(long, default_value = config::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Path to a replacement web client directory
    #[arg(long)]
    client: Option<PathBuf>,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // initialize logging; --debug raises the default level
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::new(log_level);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    info!("Spotify Explorer v0.1.0 starting...");

    let settings = Settings::new(args.host, args.port, args.data_dir, args.client).init();
    info!("Data directory: {:?}", settings.data_dir);

    start_explorer(settings).await
}

async fn start_explorer(settings: std::sync::Arc<Settings>) -> Result<()> {
    // Load the dataset into memory; any load error is fatal before the
    // server binds
    info!("Loading dataset into memory...");
    let dataset = core::load_dataset(&settings.data_dir)?;
    info!(
        "Dataset ready: {} tracks, years {}-{}",
        dataset.len(),
        dataset.year_min,
        dataset.year_max
    );
    DatasetStore::get().load(dataset);

    // Start the server
    let addr = settings.bind_addr();
    info!("Server listening on http://{}", addr);

    use actix_cors::Cors;
    use actix_web::{middleware, App, HttpServer};

    HttpServer::new(|| {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(api::configure)
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}
