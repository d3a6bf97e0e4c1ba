use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod errors;
mod middleware;
mod models;
mod notes;

use config::Config;
use notes::NoteStore;

pub struct AppState {
    /// Every note lives here; shared by all HTTP workers
    pub store: Arc<NoteStore>,
    /// Server start time for uptime calculation
    pub started_at: std::time::Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(NoteStore::new()),
            started_at: std::time::Instant::now(),
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Notes service v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    // One state for all workers; the store is process-local and starts empty
    let state = web::Data::new(AppState::new());
    log::info!("[NOTES] In-memory note store initialized");

    let cors_config = config.clone();
    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(middleware::cors(&cors_config))
            .configure(controllers::health::config_routes)
            .configure(controllers::docs::config)
            .configure(controllers::notes::config)
            .default_service(web::to(controllers::route_not_found))
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    log::info!("Listening on http://{}:{}", bind_addr.0, bind_addr.1);
    let server = server.bind(bind_addr)?.run();

    let server_handle = server.handle();

    // Spawn Ctrl+C handler
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}
