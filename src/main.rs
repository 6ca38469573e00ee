// SPDX-License-Identifier: MIT

//! Blue Carbon Registry API Server
//!
//! Serves the registry dashboard: restoration projects, carbon credits,
//! the activity feed and the simulated credit marketplace.

use bluecarbon_registry::{config::Config, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        port = config.port,
        policy = config.auth_policy.name(),
        "Starting Blue Carbon Registry API"
    );

    let state = Arc::new(AppState::from_config(config));
    tracing::info!(
        projects = state.store.projects().len(),
        credits = state.store.credits().len(),
        "Registry store initialized"
    );

    // Build router
    let app = bluecarbon_registry::routes::create_router(state.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bluecarbon_registry=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
