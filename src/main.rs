//! # World Time Service Main Entry Point
//!
//! Initializes logging, loads configuration, builds the dual-timezone
//! resolver, and serves the template-context and health endpoints.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod services;
mod utils;

use crate::config::Config;
use crate::services::context::ContextService;
use crate::services::world_time::WorldTimeService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "world_time_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting World Time Service v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Time API: {}, fetch timeout: {}s, HTTP Port: {}",
        config.time_api_base_url, config.fetch_timeout_secs, config.http_port
    );

    let world_time = Arc::new(WorldTimeService::new(&config)?);
    let context_service = ContextService::new(world_time);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Context server starting on port {}", config.http_port);
    axum::serve(listener, context_service.router).await?;

    info!("Application stopped");
    Ok(())
}
