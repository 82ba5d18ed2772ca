//! Notes Service — in-memory named notes over HTTP.
//!
//! Notes live only in process memory and are lost on restart.
//!
//! Usage: notes-service -h <host> -p <port> -c <cache>

mod config;
mod routes;
mod store;

use clap::Parser;
use config::Config;
use routes::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::parse();

    if let Err(e) = config.ensure_cache_dir() {
        log::error!(
            "Failed to prepare cache directory {}: {}",
            config.cache.display(),
            e
        );
        std::process::exit(1);
    }
    log::info!("Using cache directory {}", config.cache.display());

    let state = Arc::new(AppState::new());
    let app = routes::router(state);

    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    log::info!("Notes Service listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
