//! # Validation Module
//!
//! Pure parsers for everything the operator types at a prompt.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal prompt (apps/terminal)                               │
//! │  ├── Reads a line                                                       │
//! │  └── Loops until the parser below returns Ok                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── "abc" → InvalidFormat                                              │
//! │  ├── "-2"  → MustBePositive / MustNotBeNegative                         │
//! │  └── "3"   → Ok(3)                                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart / Catalog                                                │
//! │  └── Range checks against current sizes (InvalidSelection, ...)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these functions loop or print; retry policy belongs to the caller.
//!
//! ## Usage
//! ```rust
//! use tillroll_core::validation::{parse_discount, parse_quantity};
//!
//! assert_eq!(parse_quantity("3").unwrap(), 3);
//! assert!(parse_quantity("-3").is_err());
//! assert_eq!(parse_discount("12.5").unwrap().to_string(), "12.5");
//! ```

use crate::error::ValidationError;
use crate::types::DiscountRate;
use crate::MAX_CUSTOMER_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer display name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty
/// - At most `MAX_CUSTOMER_NAME_LEN` characters
pub fn validate_customer_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "customer name".to_string(),
        });
    }

    if name.chars().count() > MAX_CUSTOMER_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "customer name".to_string(),
            max: MAX_CUSTOMER_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a 1-based menu position (catalog selection or cart index).
///
/// ## Rules
/// - Whole number, zero or more
/// - Zero is accepted here; it fails the range check in the cart/catalog
///   with the same notice as any other out-of-range number
pub fn parse_selection(input: &str) -> ValidationResult<usize> {
    let value = parse_whole_number("selection", input)?;
    usize::try_from(value).map_err(|_| too_large("selection"))
}

/// Parses a line quantity.
///
/// ## Rules
/// - Whole number
/// - Must be positive (> 0)
///
/// ## Example
/// ```rust
/// use tillroll_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity(" 2 ").unwrap(), 2);
/// assert!(parse_quantity("0").is_err());
/// assert!(parse_quantity("1.5").is_err());
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<u32> {
    let value = parse_whole_number("quantity", input)?;
    if value == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    u32::try_from(value).map_err(|_| too_large("quantity"))
}

/// Parses a discount percentage such as `10`, `12.5` or `0.125`.
///
/// ## Rules
/// - Plain decimal number, zero or more
/// - Up to six decimal places, kept exactly; more is rejected
/// - No upper clamp
pub fn parse_discount(input: &str) -> ValidationResult<DiscountRate> {
    input.parse()
}

fn parse_whole_number(field: &str, input: &str) -> ValidationResult<u64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if let Some(rest) = input.strip_prefix('-') {
        if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::MustBePositive {
                field: field.to_string(),
            });
        }
    }

    let digits = input.strip_prefix('+').unwrap_or(input);
    if !digits.bytes().all(|b| b.is_ascii_digit()) || digits.is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a whole number".to_string(),
        });
    }

    digits.parse::<u64>().map_err(|_| too_large(field))
}

fn too_large(field: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "is too large".to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert_eq!(validate_customer_name("  Asha Rao ").unwrap(), "Asha Rao");
        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(MAX_CUSTOMER_NAME_LEN)).is_ok());
        assert!(validate_customer_name(&"A".repeat(MAX_CUSTOMER_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1").unwrap(), 1);
        assert_eq!(parse_selection(" 12\n").unwrap(), 12);
        assert_eq!(parse_selection("0").unwrap(), 0);

        assert!(matches!(
            parse_selection("-1"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            parse_selection("two"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_selection(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(parse_selection("99999999999999999999999").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("1").unwrap(), 1);
        assert_eq!(parse_quantity("+4").unwrap(), 4);

        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-2").is_err());
        assert!(parse_quantity("2.5").is_err());
        assert!(parse_quantity("+").is_err());
        assert!(parse_quantity("-").is_err());
        assert!(parse_quantity("5000000000").is_err());
    }

    #[test]
    fn test_parse_discount() {
        assert_eq!(parse_discount("0").unwrap(), DiscountRate::default());
        assert_eq!(parse_discount("10").unwrap().units(), 10_000_000);
        assert_eq!(parse_discount("12.5").unwrap().units(), 12_500_000);
        // Three decimals are kept, not rounded to 0.13
        assert_eq!(parse_discount("0.125").unwrap().units(), 125_000);
        // Current behaviour: no upper clamp.
        assert_eq!(parse_discount("250").unwrap().units(), 250_000_000);
        assert_eq!(parse_discount("99999999999").unwrap().to_string(), "99999999999");

        assert!(matches!(
            parse_discount("-5"),
            Err(ValidationError::MustNotBeNegative { .. })
        ));
        assert!(matches!(
            parse_discount("ten"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_discount(" "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_discount("0.1234567"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(parse_discount("99999999999999").is_err());
    }
}
