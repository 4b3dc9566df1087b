//! # Terminal Error Type
//!
//! Errors that can end a session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tillroll                               │
//! │                                                                         │
//! │  ValidationError ──► re-prompt (prompt.rs), never reaches here          │
//! │  CoreError       ──► "Invalid choice." / "Invalid number." notice       │
//! │  StoreError      ──► "Failed to save bill: ..." notice                  │
//! │                                                                         │
//! │  AppError (this file) ──► only what the session cannot recover from:    │
//! │    • bad configuration at start-up                                      │
//! │    • stdin closed / stdout broken                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Session-ending errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading the operator's input or writing to the console failed.
    #[error("Console error: {0}")]
    Console(#[from] io::Error),

    /// The operator's input stream ended.
    ///
    /// Not a failure: the menu loop treats it like choosing Exit.
    #[error("Input closed")]
    InputClosed,
}

impl AppError {
    /// Whether this error is the clean end-of-input case.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, AppError::InputClosed)
    }
}

/// Result type for terminal operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::Config(ConfigError::InvalidValue("TILLROLL_EXPORT_DIR".to_string()));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for TILLROLL_EXPORT_DIR"
        );
        assert!(!err.is_input_closed());
        assert!(AppError::InputClosed.is_input_closed());
    }
}
