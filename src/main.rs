// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! EcoTrail Tracker server
//!
//! Serves the landing, login, dashboard and eco-map pages as JSON for the
//! web frontend.

use ecotrail_tracker::{
    config::Config,
    services::{Catalog, SessionRegistry},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting EcoTrail Tracker");

    // Load the catalog (built in unless a GeoJSON file is configured)
    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading eco-locations");
            Catalog::load_from_file(path)?
        }
        None => Catalog::builtin(),
    };
    tracing::info!(
        locations = catalog.locations().len(),
        businesses = catalog.businesses().len(),
        "Catalog ready"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        catalog,
        sessions: SessionRegistry::with_ttl_hours(config.session_ttl_hours),
    });

    // Build router
    let app = ecotrail_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ecotrail_tracker=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
