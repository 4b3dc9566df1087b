//! # Catalog Module
//!
//! The product catalog and the parser for its flat `name,price` text format.
//!
//! ## Parsing Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  product.txt                        Result                              │
//! │  ───────────                        ──────                              │
//! │  Shirt,20.00           ──────────►  Shirt = 20.00                       │
//! │  BadLine               ──────────►  skipped (1 field)                   │
//! │  Jeans,abc             ──────────►  skipped (price not a number)        │
//! │  Jeans,40.00           ──────────►  Jeans = 40.00                       │
//! │  <blank>               ──────────►  ignored                             │
//! │  Shirt,25.00           ──────────►  Shirt = 25.00 (keeps position 1)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed records never fail the parse. They are reported back in
//! [`CatalogParse::skipped`] so the caller can log them.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Catalog
// =============================================================================

/// Ordered name → product mapping.
///
/// ## Ordering
/// Enumeration order is the order in which names were first inserted. The
/// operator picks products by their 1-based position in that order, so a
/// later duplicate only replaces the price and keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    positions: HashMap<String, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Parses catalog text, silently dropping malformed records.
    ///
    /// ## Example
    /// ```rust
    /// use tillroll_core::{Catalog, Money};
    ///
    /// let catalog = Catalog::parse("Shirt,20.00\nBadLine\nJeans,abc\nJeans,40.00");
    /// assert_eq!(catalog.len(), 2);
    /// assert_eq!(catalog.price_of("Jeans"), Some(Money::from_cents(4000)));
    /// ```
    pub fn parse(text: &str) -> Self {
        parse_catalog(text).catalog
    }

    /// Inserts or replaces a product, returning the previous price if the
    /// name was already present.
    pub fn insert(&mut self, product: Product) -> Option<Money> {
        match self.positions.get(&product.name) {
            Some(&position) => {
                let previous = self.products[position].unit_price;
                self.products[position] = product;
                Some(previous)
            }
            None => {
                self.positions
                    .insert(product.name.clone(), self.products.len());
                self.products.push(product);
                None
            }
        }
    }

    /// Returns the unit price for a product name.
    pub fn price_of(&self, name: &str) -> Option<Money> {
        self.positions.get(name).map(|&i| self.products[i].unit_price)
    }

    /// Resolves a 1-based menu selection to a product.
    ///
    /// ## Errors
    /// `CoreError::InvalidSelection` when `selection` is outside `1..=len`.
    pub fn select(&self, selection: usize) -> CoreResult<&Product> {
        selection
            .checked_sub(1)
            .and_then(|i| self.products.get(i))
            .ok_or(CoreError::InvalidSelection {
                selection,
                max: self.products.len(),
            })
    }

    /// Iterates products in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Parser
// =============================================================================

/// Why a catalog line was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The line did not split into exactly two comma-separated fields.
    FieldCount(usize),
    /// The name field was empty after trimming.
    EmptyName,
    /// The price field is not a plain decimal number.
    InvalidPrice(String),
    /// The price parsed but is below zero.
    NegativePrice(String),
}

/// A dropped catalog line, 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub line_number: usize,
    pub reason: SkipReason,
}

/// Parsed catalog plus the records that were dropped along the way.
#[derive(Debug, Clone, Default)]
pub struct CatalogParse {
    pub catalog: Catalog,
    pub skipped: Vec<SkippedRecord>,
}

/// Parses catalog text and reports every dropped record.
///
/// Blank lines are not records and are not reported.
pub fn parse_catalog(text: &str) -> CatalogParse {
    let mut result = CatalogParse::default();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_record(line) {
            Ok(product) => {
                result.catalog.insert(product);
            }
            Err(reason) => result.skipped.push(SkippedRecord {
                line_number: i + 1,
                reason,
            }),
        }
    }

    result
}

fn parse_record(line: &str) -> Result<Product, SkipReason> {
    let fields: Vec<&str> = line.split(',').collect();
    let [name, price] = fields.as_slice() else {
        return Err(SkipReason::FieldCount(fields.len()));
    };

    let name = name.trim();
    let price = price.trim();
    if name.is_empty() {
        return Err(SkipReason::EmptyName);
    }

    let unit_price: Money = price
        .parse()
        .map_err(|_| SkipReason::InvalidPrice(price.to_string()))?;
    if unit_price.is_negative() {
        return Err(SkipReason::NegativePrice(price.to_string()));
    }

    Ok(Product::new(name, unit_price))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_bad_lines() {
        let parsed = parse_catalog("Shirt,20.00\nBadLine\nJeans,abc\nJeans,40.00");

        assert_eq!(parsed.catalog.len(), 2);
        assert_eq!(parsed.catalog.price_of("Shirt"), Some(Money::from_cents(2000)));
        assert_eq!(parsed.catalog.price_of("Jeans"), Some(Money::from_cents(4000)));
        assert_eq!(
            parsed.skipped,
            vec![
                SkippedRecord {
                    line_number: 2,
                    reason: SkipReason::FieldCount(1),
                },
                SkippedRecord {
                    line_number: 3,
                    reason: SkipReason::InvalidPrice("abc".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_parse_requires_exactly_two_fields() {
        let catalog = Catalog::parse("Shirt\nShirt,20.00,extra\nShirt,20.00,\n,\nHat,5");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.price_of("Hat"), Some(Money::from_cents(500)));
    }

    #[test]
    fn test_parse_trims_whitespace_and_ignores_blank_lines() {
        let parsed = parse_catalog("\n   \n  Socks ,  3.50  \r\n\t\n");
        assert!(parsed.skipped.is_empty());
        assert_eq!(parsed.catalog.price_of("Socks"), Some(Money::from_cents(350)));
    }

    #[test]
    fn test_parse_last_duplicate_wins_and_keeps_position() {
        let catalog = Catalog::parse("Shirt,20.00\nJeans,40.00\nShirt,25.00");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.select(1).unwrap().name, "Shirt");
        assert_eq!(catalog.select(1).unwrap().unit_price, Money::from_cents(2500));
        assert_eq!(catalog.select(2).unwrap().name, "Jeans");
    }

    #[test]
    fn test_parse_rejects_empty_name_and_negative_price() {
        let parsed = parse_catalog(" ,5.00\nRefund,-1.00\nFree Sample,0");
        assert_eq!(parsed.catalog.len(), 1);
        assert_eq!(parsed.catalog.price_of("Free Sample"), Some(Money::zero()));
        assert_eq!(parsed.skipped[0].reason, SkipReason::EmptyName);
        assert_eq!(
            parsed.skipped[1].reason,
            SkipReason::NegativePrice("-1.00".to_string())
        );
    }

    #[test]
    fn test_parsed_prices_equal_source_literals() {
        let catalog = Catalog::parse("A,0.01\nB,19.99\nC,100\nD,7.5");
        let cents: Vec<i64> = catalog.iter().map(|p| p.unit_price.cents()).collect();
        assert_eq!(cents, vec![1, 1999, 10000, 750]);
    }

    #[test]
    fn test_select_bounds() {
        let catalog = Catalog::parse("Shirt,20.00\nJeans,40.00");

        assert!(catalog.select(1).is_ok());
        assert!(catalog.select(2).is_ok());
        assert_eq!(
            catalog.select(0),
            Err(CoreError::InvalidSelection {
                selection: 0,
                max: 2
            })
        );
        assert_eq!(
            catalog.select(3),
            Err(CoreError::InvalidSelection {
                selection: 3,
                max: 2
            })
        );
    }

    #[test]
    fn test_insert_reports_previous_price() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.insert(Product::new("Cap", Money::from_cents(900))), None);
        assert_eq!(
            catalog.insert(Product::new("Cap", Money::from_cents(1000))),
            Some(Money::from_cents(900))
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_empty_text_gives_empty_catalog() {
        assert!(Catalog::parse("").is_empty());
    }
}
