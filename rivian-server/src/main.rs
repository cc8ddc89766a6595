//! Rivian Telemetry Server
//!
//! Serves resolved vehicle entity state over a REST API

use anyhow::Result;
use rivian_server::{api, config::ServerConfig, state};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();

    info!(
        "Starting {} server for {}",
        rivian_entities::NAME,
        config.vehicle.trim
    );

    let registry = rivian_entities::build_registry()?;
    info!(
        "Polling {} fields (tire pressure {})",
        registry.api_fields(&config.vehicle).len(),
        if config.vehicle.exclude_tire_pressure { "excluded" } else { "included" }
    );

    // Create application state
    let state = state::AppState::demo(registry, config.vehicle);

    // Build the router
    let app = api::create_router(state);

    // Start server
    info!("Server listening on http://{}", config.bind);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
