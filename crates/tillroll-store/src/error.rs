//! # Store Error Types
//!
//! Error types for catalog reads and receipt exports.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the path and what was being done       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Session prints a notice and carries on                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// File operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The catalog file does not exist.
    ///
    /// ## When This Occurs
    /// - First run without a `product.txt`
    /// - Wrong `--catalog` path
    ///
    /// The session continues with an empty catalog.
    #[error("Product file not found: {}", path.display())]
    CatalogNotFound { path: PathBuf },

    /// The catalog file exists but could not be read.
    ///
    /// ## When This Occurs
    /// - Permission denied
    /// - File is not valid UTF-8
    #[error("Failed to read product file {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A receipt could not be written.
    ///
    /// ## When This Occurs
    /// - Export directory missing or read-only
    /// - Disk full
    #[error("Failed to write {}: {source}", path.display())]
    ExportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Whether this is the recoverable "no catalog file" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::CatalogNotFound { .. })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::CatalogNotFound {
            path: PathBuf::from("product.txt"),
        };
        assert_eq!(err.to_string(), "Product file not found: product.txt");
        assert!(err.is_not_found());

        let err = StoreError::ExportWrite {
            path: PathBuf::from("out/bill.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert_eq!(err.to_string(), "Failed to write out/bill.txt: read-only");
        assert!(!err.is_not_found());
    }
}
