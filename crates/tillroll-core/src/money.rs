//! # Money Module
//!
//! Amounts in integer cents. Catalog prices are parsed from text straight
//! into cents and every total is integer arithmetic, so `3 × 19.99` is
//! always `59.97` on the receipt.
//!
//! ## Usage
//! ```rust
//! use tillroll_core::money::Money;
//!
//! // Parse from catalog text (exact, no float round-trip)
//! let price: Money = "10.99".parse().unwrap();
//! assert_eq!(price.cents(), 1099);
//!
//! // Arithmetic operations
//! let doubled = price * 2;                    // 21.98
//! let total = price + Money::from_cents(500); // 15.99
//! assert_eq!(doubled.to_string(), "21.98");
//! assert_eq!(total.to_string(), "15.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// An amount in cents. Signed: a discount above 100% drives the grand total
/// negative.
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  product.txt "20.00" ──► Product.unit_price ──► LineItem.unit_price     │
/// │                                                     │                   │
/// │                                                     ▼                   │
/// │                                            LineItem.line_total          │
/// │                                                     │                   │
/// │  Cart.subtotal ──► Discount amount ──► Receipt.grand_total              │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tillroll_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use tillroll_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.checked_mul_quantity(3), Some(Money::from_cents(897)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_mul_quantity(2), None);
    /// ```
    #[inline]
    pub fn checked_mul_quantity(&self, qty: u32) -> Option<Self> {
        self.0.checked_mul(i64::from(qty)).map(Money)
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Calculates the discount amount for a rate, rounded half away from zero
    /// to the nearest cent. The rate itself is never rounded.
    ///
    /// ## Implementation
    /// `amount × units / (100 × 1_000_000)` in i128. `|i64| × u64` stays
    /// below 2^127, so the product cannot overflow for any rate.
    ///
    /// ## Example
    /// ```rust
    /// use tillroll_core::money::Money;
    /// use tillroll_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_cents(8000);
    /// let rate: DiscountRate = "10".parse().unwrap();
    /// assert_eq!(subtotal.discount_amount(rate).cents(), 800);
    ///
    /// // 10000.00 × 0.125% = 12.50
    /// let rate: DiscountRate = "0.125".parse().unwrap();
    /// assert_eq!(Money::from_cents(1_000_000).discount_amount(rate).cents(), 1250);
    /// ```
    pub fn discount_amount(&self, rate: DiscountRate) -> Money {
        let divisor = 100 * i128::from(DiscountRate::UNITS_PER_PERCENT);
        let scaled = i128::from(self.0) * i128::from(rate.units());
        let rounded = if scaled < 0 {
            (scaled - divisor / 2) / divisor
        } else {
            (scaled + divisor / 2) / divisor
        };
        Money::from_cents(rounded.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a plain decimal string such as `20`, `20.5` or `19.999`.
///
/// Fraction digits beyond the second are rounded half-up into the cents.
/// Exponents, thousands separators and currency symbols are rejected.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("must contain at least one digit"));
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid("must be a plain decimal number"));
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|w| w.checked_mul(100))
                .ok_or_else(|| invalid("is too large"))?
        };

        let mut fraction_digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tens = fraction_digits.next().unwrap_or(0);
        let units = fraction_digits.next().unwrap_or(0);
        let round_up = fraction_digits.next().is_some_and(|d| d >= 5);

        let cents = whole_cents
            .checked_add(tens * 10 + units + i64::from(round_up))
            .ok_or_else(|| invalid("is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with exactly two decimals and no currency symbol.
///
/// Width and alignment flags are honoured, so receipt columns can be written
/// as `format!("{:>7}", total)`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let text = format!("{}{}.{:02}", sign, abs / 100, abs % 100);
        f.pad(&text)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * i64::from(qty))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
