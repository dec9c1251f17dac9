//! isodecay-server: HTTP API and web page for the decay simulator.
//!
//! Serves a web page at `/`, the isotope catalog at `/api/isotopes`, and runs
//! simulations at `POST /api/simulate`.

use std::sync::Arc;

use anyhow::{Context, Result};
use isodecay_core::catalog::Catalog;
use tracing::info;

mod config;
mod routes;

use config::Config;

/// Shared application state passed to every Axum handler.
#[derive(Clone)]
pub struct AppState {
    /// Read-only isotope catalog.
    pub catalog: Arc<Catalog>,
    /// Server configuration.
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("Failed to load server configuration")?;
    let catalog = Catalog::resolve(config.catalog_path.as_deref())
        .context("Failed to load isotope catalog")?;

    info!(
        bind = %config.bind_addr,
        isotopes = catalog.len(),
        seeded = config.seed.is_some(),
        "Starting isodecay-server"
    );

    let state = AppState {
        catalog: Arc::new(catalog),
        config: Arc::new(config.clone()),
    };
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .context("HTTP server error")?;

    Ok(())
}
