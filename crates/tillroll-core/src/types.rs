//! # Domain Types
//!
//! Core domain types used throughout Tillroll.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    LineItem     │   │  DiscountRate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (key)     │   │  product_name   │   │  millionths of  │       │
//! │  │  unit_price     │──►│  quantity       │   │  a percent      │       │
//! │  └─────────────────┘   │  unit_price     │   └─────────────────┘       │
//! │                        │  line_total     │                              │
//! │                        └─────────────────┘  (cart.rs)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount percentage, held exactly in millionths of a percent.
///
/// `12.5` is `12_500_000` and `0.125` is `125_000`, so whatever the operator
/// typed (up to six decimal places) reaches the total unrounded. Only the
/// final discount amount is rounded, to the cent.
///
/// There is no upper clamp: a rate above 100% is accepted and produces a
/// negative grand total. The representable ceiling is `u64::MAX` millionths
/// (about 18 trillion percent).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiscountRate(u64);

impl DiscountRate {
    /// Fraction digits accepted when parsing a percentage.
    pub const MAX_FRACTION_DIGITS: usize = 6;

    /// Units per whole percent.
    pub const UNITS_PER_PERCENT: u64 = 1_000_000;

    /// Returns the rate in millionths of a percent.
    #[inline]
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Checks if the discount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Parses a plain decimal percentage such as `10`, `12.5` or `0.125`.
///
/// ## Rules
/// - Optional leading `+`; a leading `-` is `MustNotBeNegative`
/// - At most [`DiscountRate::MAX_FRACTION_DIGITS`] fraction digits; more is
///   rejected rather than rounded
///
/// ## Example
/// ```rust
/// use tillroll_core::types::DiscountRate;
///
/// let rate: DiscountRate = "0.125".parse().unwrap();
/// assert_eq!(rate.units(), 125_000);
/// assert!("1.2345678".parse::<DiscountRate>().is_err());
/// ```
impl FromStr for DiscountRate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "discount".to_string(),
            reason: reason.to_string(),
        };

        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "discount".to_string(),
            });
        }
        if s.starts_with('-') {
            return Err(ValidationError::MustNotBeNegative {
                field: "discount".to_string(),
            });
        }

        let digits = s.strip_prefix('+').unwrap_or(s);
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("must contain at least one digit"));
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid("must be a plain decimal number"));
        }
        if fraction.len() > Self::MAX_FRACTION_DIGITS {
            return Err(invalid("has more than 6 decimal places"));
        }

        let whole_units = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<u64>()
                .ok()
                .and_then(|w| w.checked_mul(Self::UNITS_PER_PERCENT))
                .ok_or_else(|| invalid("is too large"))?
        };
        let fraction_units = fraction
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(Self::MAX_FRACTION_DIGITS)
            .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));

        whole_units
            .checked_add(fraction_units)
            .map(DiscountRate)
            .ok_or_else(|| invalid("is too large"))
    }
}

/// Shows the percentage without trailing zeros and without a `%` sign.
impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::UNITS_PER_PERCENT;
        let fraction = self.0 % Self::UNITS_PER_PERCENT;
        if fraction == 0 {
            return write!(f, "{}", whole);
        }
        let digits = format!("{:06}", fraction);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Created when the catalog is loaded and never changed afterwards; a cart
/// line copies the price, so the catalog can be dropped or reloaded without
/// touching existing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, unique within a catalog.
    pub name: String,

    /// Price per unit.
    pub unit_price: Money,
}

impl Product {
    /// Creates a product.
    pub fn new(name: impl Into<String>, unit_price: Money) -> Self {
        Product {
            name: name.into(),
            unit_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(input: &str) -> DiscountRate {
        input.parse().unwrap()
    }

    #[test]
    fn test_discount_rate_parses_exactly() {
        assert_eq!(rate("0").units(), 0);
        assert_eq!(rate("10").units(), 10_000_000);
        assert_eq!(rate("12.5").units(), 12_500_000);
        assert_eq!(rate("0.125").units(), 125_000);
        assert_eq!(rate("33.333333").units(), 33_333_333);
        assert_eq!(rate(" +150 ").units(), 150_000_000);
        assert_eq!(rate(".5").units(), 500_000);
        assert!(rate("0.000").is_zero());
    }

    #[test]
    fn test_discount_rate_rejects_bad_input() {
        for input in [".", "abc", "1e3", "10%", "1.2.3", "1.2345678"] {
            assert!(
                matches!(input.parse::<DiscountRate>(), Err(ValidationError::InvalidFormat { .. })),
                "{input:?} should be rejected"
            );
        }
        assert!(matches!(
            "-5".parse::<DiscountRate>(),
            Err(ValidationError::MustNotBeNegative { .. })
        ));
        assert!(matches!(
            "".parse::<DiscountRate>(),
            Err(ValidationError::Required { .. })
        ));
        assert!("18446744073710".parse::<DiscountRate>().is_err());
    }

    #[test]
    fn test_discount_rate_display() {
        assert_eq!(rate("15").to_string(), "15");
        assert_eq!(rate("12.50").to_string(), "12.5");
        assert_eq!(rate("0.125").to_string(), "0.125");
        assert_eq!(DiscountRate::default().to_string(), "0");
    }
}
