// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;

use crate::application::dataset_service::DatasetService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::logging::init_tracing;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_app_config()?;

    // Initialize tracing
    init_tracing(&config.logging.filter)?;

    // Create services (application layer)
    let dataset_service = DatasetService::new();

    // Create application state
    let state = Arc::new(AppState { dataset_service });

    // Build router (presentation layer)
    let max_upload_bytes = usize::try_from(config.server.max_upload_bytes)
        .context("server.max_upload_bytes does not fit in usize")?;
    let router = build_router(state, max_upload_bytes);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("invalid server.bind_addr {:?}", config.server.bind_addr))?;
    tracing::info!("Starting wifi-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
