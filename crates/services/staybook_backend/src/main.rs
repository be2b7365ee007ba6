// File: services/staybook_backend/src/main.rs
use staybook_backend::{app, app_state::AppState};
use staybook_common::{config_error, logging, StaybookError};
use staybook_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}

async fn run() -> Result<(), StaybookError> {
    let config =
        Arc::new(load_config().map_err(|e| config_error(format!("Failed to load config: {}", e)))?);

    let state = AppState::new(config.clone()).await?;
    let app = app(&state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(e) = run().await {
        error!("Staybook backend stopped: {}", e);
        std::process::exit(1);
    }
}
