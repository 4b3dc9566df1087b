//! # Error Types
//!
//! Domain-specific error types for tillroll-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tillroll-core errors (this file)                                      │
//! │  ├── CoreError        - Cart and catalog rule violations               │
//! │  └── ValidationError  - Operator input that failed to parse            │
//! │                                                                         │
//! │  tillroll-store errors (separate crate)                                │
//! │  └── StoreError       - Catalog read / receipt write failures          │
//! │                                                                         │
//! │  terminal errors (in app)                                              │
//! │  └── AppError         - Configuration and console failures             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → operator notice                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal to a session: the menu loop prints the message
//! and carries on with the cart unchanged.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Catalog selection is outside `1..=max`.
    ///
    /// ## When This Occurs
    /// ```text
    /// Available Products:        Select product number: 7
    /// 1. Shirt - Rs.20.00             │
    /// 2. Jeans - Rs.40.00             ▼
    ///                            InvalidSelection { selection: 7, max: 2 }
    /// ```
    #[error("Invalid selection {selection}: choose between 1 and {max}")]
    InvalidSelection { selection: usize, max: usize },

    /// Cart position is outside `1..=max`.
    #[error("Invalid item number {index}: cart has {max} items")]
    InvalidIndex { index: usize, max: usize },

    /// Line total, or the cart subtotal with the line added, does not fit
    /// in the money representation.
    #[error("Adding {quantity} x {product} would make the bill too large")]
    AmountOverflow { product: String, quantity: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Returned by the pure parsers in [`crate::validation`]; the terminal
/// re-prompts on every one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (not a number, not a whole number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidSelection {
            selection: 7,
            max: 2,
        };
        assert_eq!(err.to_string(), "Invalid selection 7: choose between 1 and 2");

        let err = CoreError::InvalidIndex { index: 4, max: 3 };
        assert_eq!(err.to_string(), "Invalid item number 4: cart has 3 items");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::TooLong {
            field: "customer name".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "customer name must be at most 100 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
