//! # Cart Module
//!
//! The ordered list of line items for the active customer.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Menu Action              Cart Method             Cart Change           │
//! │  ───────────              ───────────             ───────────           │
//! │                                                                         │
//! │  1 Add Item ─────────────► add_item() ──────────► items.push(line)      │
//! │                                                                         │
//! │  3 Remove Item ──────────► remove_item() ───────► items.remove(i - 1)   │
//! │                                                                         │
//! │  2 View / 4 Final Bill ──► items(), subtotal() ─► (read only)           │
//! │                                                                         │
//! │  NOTE: there is no in-place update. Changing a quantity means removing  │
//! │        the line and adding it again.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;

/// One catalog selection with its quantity.
///
/// ## Price Freezing
/// `unit_price` is copied from the product when the line is created. Later
/// catalog changes never reach existing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name at time of adding (frozen)
    pub product_name: String,

    /// Quantity, always > 0
    pub quantity: u32,

    /// Price per unit at time of adding (frozen)
    pub unit_price: Money,

    /// quantity × unit_price
    pub line_total: Money,
}

impl LineItem {
    /// Creates a line for `quantity` units of `product`.
    ///
    /// ## Errors
    /// - `CoreError::Validation` if quantity is zero
    /// - `CoreError::AmountOverflow` if the line total does not fit
    pub fn from_product(product: &Product, quantity: u32) -> CoreResult<Self> {
        if quantity == 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }

        let line_total = product.unit_price.checked_mul_quantity(quantity).ok_or_else(|| {
            CoreError::AmountOverflow {
                product: product.name.clone(),
                quantity,
            }
        })?;

        Ok(LineItem {
            product_name: product.name.clone(),
            quantity,
            unit_price: product.unit_price,
            line_total,
        })
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Insertion order = display order = receipt numbering
/// - Row numbers are positional; removing a line renumbers everything after it
/// - Adding the same product twice gives two separate lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds `quantity` units of the product at 1-based `selection` in the
    /// catalog and returns the new line.
    ///
    /// ## Errors
    /// - `CoreError::InvalidSelection` if `selection` is outside `1..=catalog.len()`
    /// - `CoreError::Validation` if `quantity` is zero
    ///
    /// The cart is unchanged on error.
    ///
    /// ## Example
    /// ```rust
    /// use tillroll_core::{Cart, Catalog, Money};
    ///
    /// let catalog = Catalog::parse("Shirt,20.00");
    /// let mut cart = Cart::new();
    ///
    /// let line = cart.add_item(&catalog, 1, 2).unwrap();
    /// assert_eq!(line.line_total, Money::from_cents(4000));
    /// assert!(cart.add_item(&catalog, 2, 1).is_err());
    /// assert_eq!(cart.len(), 1);
    /// ```
    pub fn add_item(
        &mut self,
        catalog: &Catalog,
        selection: usize,
        quantity: u32,
    ) -> CoreResult<&LineItem> {
        let product = catalog.select(selection)?;
        self.add_product(product, quantity)
    }

    /// Appends a line for a product that is already resolved.
    ///
    /// ## Errors
    /// - `CoreError::Validation` if `quantity` is zero
    /// - `CoreError::AmountOverflow` if the line total, or the cart subtotal
    ///   with this line added, does not fit in `Money`
    pub fn add_product(&mut self, product: &Product, quantity: u32) -> CoreResult<&LineItem> {
        let line = LineItem::from_product(product, quantity)?;
        // Lines are never negative, so a subtotal that fits here keeps
        // fitting after any removal.
        if self.subtotal().checked_add(line.line_total).is_none() {
            return Err(CoreError::AmountOverflow {
                product: line.product_name,
                quantity,
            });
        }
        self.items.push(line);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Removes and returns the line at 1-based `index`.
    ///
    /// ## Errors
    /// `CoreError::InvalidIndex` if `index` is outside `1..=len`; the cart is
    /// unchanged.
    pub fn remove_item(&mut self, index: usize) -> CoreResult<LineItem> {
        if index == 0 || index > self.items.len() {
            return Err(CoreError::InvalidIndex {
                index,
                max: self.items.len(),
            });
        }
        Ok(self.items.remove(index - 1))
    }

    /// Lines in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of lines (not units).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|i| i.line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_catalog() -> Catalog {
        Catalog::parse("Shirt,20.00\nJeans,40.00\nSocks,3.50")
    }

    fn names(cart: &Cart) -> Vec<&str> {
        cart.items().iter().map(|i| i.product_name.as_str()).collect()
    }

    #[test]
    fn test_cart_add_item() {
        let catalog = scenario_catalog();
        let mut cart = Cart::new();

        let line = cart.add_item(&catalog, 1, 2).unwrap();
        assert_eq!(line.product_name, "Shirt");
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price, Money::from_cents(2000));
        assert_eq!(line.line_total, Money::from_cents(4000));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.subtotal(), Money::from_cents(4000));
    }

    #[test]
    fn test_cart_same_product_twice_gives_two_lines() {
        let catalog = scenario_catalog();
        let mut cart = Cart::new();

        cart.add_item(&catalog, 1, 2).unwrap();
        cart.add_item(&catalog, 1, 3).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_cart_length_and_line_totals_after_many_adds() {
        let catalog = scenario_catalog();
        let mut cart = Cart::new();
        let adds = [(1, 1), (2, 4), (3, 7), (1, 10), (3, 1)];

        for &(selection, qty) in &adds {
            cart.add_item(&catalog, selection, qty).unwrap();
        }

        assert_eq!(cart.len(), adds.len());
        for (line, &(selection, qty)) in cart.items().iter().zip(&adds) {
            let price = catalog.select(selection).unwrap().unit_price;
            assert_eq!(line.line_total, price * qty);
        }
    }

    #[test]
    fn test_cart_invalid_selection_leaves_cart_unchanged() {
        let catalog = scenario_catalog();
        let mut cart = Cart::new();
        cart.add_item(&catalog, 2, 1).unwrap();

        let err = cart.add_item(&catalog, 4, 1).unwrap_err();
        assert_eq!(err, CoreError::InvalidSelection { selection: 4, max: 3 });
        assert!(cart.add_item(&catalog, 0, 1).is_err());
        assert_eq!(names(&cart), vec!["Jeans"]);
    }

    #[test]
    fn test_cart_rejects_zero_quantity() {
        let catalog = scenario_catalog();
        let mut cart = Cart::new();

        let err = cart.add_item(&catalog, 1, 0).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_rejects_overflowing_line_total() {
        let mut cart = Cart::new();
        let product = Product::new("Yacht", Money::from_cents(i64::MAX / 2));

        let err = cart.add_product(&product, 3).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_price_frozen_at_add_time() {
        let mut catalog = scenario_catalog();
        let mut cart = Cart::new();
        cart.add_item(&catalog, 1, 1).unwrap();

        catalog.insert(Product::new("Shirt", Money::from_cents(9900)));

        assert_eq!(cart.items()[0].unit_price, Money::from_cents(2000));
        assert_eq!(cart.subtotal(), Money::from_cents(2000));
    }

    #[test]
    fn test_cart_remove_middle_item() {
        let catalog = Catalog::parse("A,1.00\nB,2.00\nC,3.00");
        let mut cart = Cart::new();
        for selection in 1..=3 {
            cart.add_item(&catalog, selection, 1).unwrap();
        }

        let removed = cart.remove_item(2).unwrap();

        assert_eq!(removed.product_name, "B");
        assert_eq!(names(&cart), vec!["A", "C"]);
    }

    #[test]
    fn test_cart_remove_each_position_preserves_order() {
        let catalog = Catalog::parse("A,1.00\nB,2.00\nC,3.00\nD,4.00");
        let mut original = Cart::new();
        for selection in 1..=4 {
            original.add_item(&catalog, selection, 1).unwrap();
        }

        for index in 1..=4 {
            let mut cart = original.clone();
            cart.remove_item(index).unwrap();

            let mut expected = names(&original);
            expected.remove(index - 1);
            assert_eq!(names(&cart), expected);
        }
    }

    #[test]
    fn test_cart_remove_out_of_range() {
        let catalog = scenario_catalog();
        let mut cart = Cart::new();
        cart.add_item(&catalog, 1, 1).unwrap();
        cart.add_item(&catalog, 2, 1).unwrap();
        let before = cart.clone();

        assert_eq!(
            cart.remove_item(0),
            Err(CoreError::InvalidIndex { index: 0, max: 2 })
        );
        assert_eq!(
            cart.remove_item(3),
            Err(CoreError::InvalidIndex { index: 3, max: 2 })
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_cart_rejects_line_that_overflows_subtotal() {
        // Each line fits on its own; the second would push the sum past i64.
        let catalog = Catalog::parse("Big,50000000000000000");
        let mut cart = Cart::new();
        cart.add_item(&catalog, 1, 1).unwrap();

        let err = cart.add_item(&catalog, 1, 1).unwrap_err();
        assert_eq!(
            err,
            CoreError::AmountOverflow {
                product: "Big".to_string(),
                quantity: 1,
            }
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.subtotal(), Money::from_cents(5_000_000_000_000_000_000));
    }

    #[test]
    fn test_cart_empty_subtotal_is_zero() {
        assert!(Cart::new().subtotal().is_zero());
    }
}
