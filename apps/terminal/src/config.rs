//! # Terminal Configuration
//!
//! Settings resolved once at start-up.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--catalog`, `--export-dir`, ...)
//! 2. Environment variables (`TILLROLL_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only once the session starts.

use std::path::PathBuf;

use clap::Parser;
use tillroll_core::ReceiptLayout;
use tillroll_store::StoreConfig;

pub const ENV_CATALOG_PATH: &str = "TILLROLL_CATALOG_PATH";
pub const ENV_EXPORT_DIR: &str = "TILLROLL_EXPORT_DIR";
pub const ENV_STORE_NAME: &str = "TILLROLL_STORE_NAME";
pub const ENV_CURRENCY_SYMBOL: &str = "TILLROLL_CURRENCY_SYMBOL";

/// Command-line flags.
#[derive(Debug, Default, Parser)]
#[command(
    name = "tillroll",
    version,
    about = "Checkout billing for a single customer session"
)]
pub struct Cli {
    /// Catalog file with one `name,price` record per line
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Directory that receives exported bills
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Title printed at the top of every receipt
    #[arg(long, value_name = "NAME")]
    pub store_name: Option<String>,

    /// Prefix printed before every amount
    #[arg(long, value_name = "SYMBOL")]
    pub currency_symbol: Option<String>,
}

/// Resolved terminal configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalConfig {
    /// Catalog and export locations.
    pub store: StoreConfig,

    /// Store title and currency prefix for receipts.
    pub layout: ReceiptLayout,
}

impl TerminalConfig {
    /// Builds configuration from `TILLROLL_*` environment variables over
    /// the defaults.
    ///
    /// ## Environment Variables
    /// - `TILLROLL_CATALOG_PATH`: catalog file (default `product.txt`)
    /// - `TILLROLL_EXPORT_DIR`: export directory (default `.`)
    /// - `TILLROLL_STORE_NAME`: receipt title
    /// - `TILLROLL_CURRENCY_SYMBOL`: amount prefix (default `Rs.`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`TerminalConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = TerminalConfig::default();
        let non_empty = |key: &str| -> Result<Option<String>, ConfigError> {
            match lookup(key) {
                Some(value) if value.trim().is_empty() => {
                    Err(ConfigError::InvalidValue(key.to_string()))
                }
                other => Ok(other),
            }
        };

        if let Some(path) = non_empty(ENV_CATALOG_PATH)? {
            config.store.catalog_path = PathBuf::from(path);
        }

        if let Some(dir) = non_empty(ENV_EXPORT_DIR)? {
            config.store.export_dir = PathBuf::from(dir);
        }

        if let Some(name) = non_empty(ENV_STORE_NAME)? {
            config.layout.store_name = name;
        }

        if let Some(symbol) = non_empty(ENV_CURRENCY_SYMBOL)? {
            config.layout.currency_symbol = symbol;
        }

        Ok(config)
    }

    /// Applies command-line flags on top of this configuration.
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if let Some(path) = cli.catalog {
            self.store.catalog_path = path;
        }
        if let Some(dir) = cli.export_dir {
            self.store.export_dir = dir;
        }
        if let Some(name) = cli.store_name {
            self.layout.store_name = name;
        }
        if let Some(symbol) = cli.currency_symbol {
            self.layout.currency_symbol = symbol;
        }
        self
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
