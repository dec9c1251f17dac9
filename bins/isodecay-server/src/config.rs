//! Server configuration loaded from environment variables.

use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Clone, Debug)]
pub struct Config {
    /// Address to bind the HTTP server.
    pub bind_addr: String,
    /// JSON isotope dataset; `None` falls back to the default dataset or the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    /// Fixed seed for reproducible responses; `None` seeds each request from entropy.
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = var("ISODECAY_BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());

        let catalog_path = var("ISODECAY_CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let seed = var("ISODECAY_SEED")
            .map(|s| s.trim().parse::<u64>())
            .transpose()
            .context("ISODECAY_SEED must be a non-negative integer")?;

        Ok(Config {
            bind_addr,
            catalog_path,
            seed,
        })
    }
}
