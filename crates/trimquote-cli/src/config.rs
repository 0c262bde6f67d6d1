//! Trimquote configuration
//!
//! Sources, lowest priority first: built-in defaults, an optional TOML file,
//! then `TRIMQUOTE__*` environment variables (a `.env` file is read first).
//!
//! ```toml
//! [rates.baseboard]
//! heavy = 3.50
//! caulk_policy = "auto_on_heavy"
//!
//! [letterhead]
//! business_name = "Acme Painting"
//! ```
//!
//! The same key from the environment: `TRIMQUOTE__RATES__BASEBOARD__HEAVY=3.50`.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use trimquote_common::Letterhead;
use trimquote_pricing::RateTable;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TRIMQUOTE";

/// Trimquote configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimquoteConfig {
    /// Prices for every product
    pub rates: RateTable,
    /// Business header printed on quotes
    pub letterhead: Letterhead,
}

impl TrimquoteConfig {
    /// Load configuration from environment and an optional file
    pub fn load(path: Option<&Path>) -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        );

        let cfg: Self = builder
            .build()
            .and_then(|settings| settings.try_deserialize())
            .context("Failed to read configuration")?;

        cfg.rates
            .validate()
            .context("Configured rate table is invalid")?;
        Ok(cfg)
    }
}
