//! # tillroll-store: Flat-File Layer for Tillroll
//!
//! All file system access for Tillroll lives here. The core crate never
//! touches a file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tillroll Data Flow                               │
//! │                                                                         │
//! │  Session start                      Menu "4 Final Bill"                 │
//! │       │                                   │                             │
//! │       ▼                                   ▼                             │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 tillroll-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────────┐        ┌──────────────────────────┐  │   │
//! │  │   │   catalog.rs         │        │   export.rs              │  │   │
//! │  │   │   load_catalog()     │        │   export_receipt()       │  │   │
//! │  │   │   product.txt → Map  │        │   lines → bill_*.txt     │  │   │
//! │  │   └──────────────────────┘        └──────────────────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                   │                             │
//! │       ▼                                   ▼                             │
//! │   product.txt                  bill_<customer>_<YYYYMMDD_HHMMSS>.txt    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Reading the catalog file
//! - [`export`] - Writing receipt files
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tillroll_store::{export_receipt, load_catalog, StoreConfig};
//!
//! let config = StoreConfig::new("product.txt", ".");
//! let catalog = load_catalog(&config.catalog_path)?;
//! let path = export_receipt(&config.export_dir, "Asha", generated_at, &receipt.lines)?;
//! ```

pub mod catalog;
pub mod error;
pub mod export;

use std::path::PathBuf;

pub use catalog::load_catalog;
pub use error::{StoreError, StoreResult};
pub use export::{export_receipt, receipt_file_name};

/// Where the store reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Catalog text file.
    pub catalog_path: PathBuf,

    /// Directory that receives exported bills.
    pub export_dir: PathBuf,
}

impl StoreConfig {
    /// Creates a store configuration.
    ///
    /// ## Example
    /// ```rust
    /// use tillroll_store::StoreConfig;
    ///
    /// let config = StoreConfig::new("product.txt", "bills");
    /// assert_eq!(config.export_dir.to_str(), Some("bills"));
    /// ```
    pub fn new(catalog_path: impl Into<PathBuf>, export_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            catalog_path: catalog_path.into(),
            export_dir: export_dir.into(),
        }
    }
}

impl Default for StoreConfig {
    /// `product.txt` and exports in the working directory.
    fn default() -> Self {
        StoreConfig::new("product.txt", ".")
    }
}
