//! # tillroll-core: Pure Business Logic for Tillroll
//!
//! This crate holds the checkout billing rules as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tillroll Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/terminal (menu loop)                       │   │
//! │  │    Add Item ──► View Bill ──► Remove Item ──► Final Bill        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ tillroll-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ │   │
//! │  │   │  money  │ │ catalog │ │  cart   │ │ receipt │ │validation│ │   │
//! │  │   │  Money  │ │ Catalog │ │  Cart   │ │ Receipt │ │  parse_* │ │   │
//! │  │   │Discount │ │ parser  │ │LineItem │ │ Layout  │ │          │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO STDIN • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 tillroll-store (flat files)                     │   │
//! │  │            product.txt in, bill_<name>_<ts>.txt out             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, DiscountRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Ordered product catalog and its text parser
//! - [`cart`] - Cart and line items
//! - [`receipt`] - Receipt renderer
//! - [`error`] - Domain error types
//! - [`validation`] - Operator input parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use tillroll_core::{Cart, Catalog, DiscountRate, Money};
//!
//! let catalog = Catalog::parse("Shirt,20.00\nJeans,40.00\n");
//! let mut cart = Cart::new();
//! cart.add_item(&catalog, 1, 2).unwrap();
//! cart.add_item(&catalog, 2, 1).unwrap();
//!
//! let subtotal = cart.subtotal();
//! assert_eq!(subtotal, Money::from_cents(8000));
//! let discount: DiscountRate = "10".parse().unwrap();
//! assert_eq!((subtotal - subtotal.discount_amount(discount)).cents(), 7200);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, LineItem};
pub use catalog::{parse_catalog, Catalog, CatalogParse, SkipReason, SkippedRecord};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use receipt::{render_receipt, render_receipt_now, Receipt, ReceiptLayout};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Store title printed at the top of every receipt unless configured otherwise.
pub const DEFAULT_STORE_NAME: &str = "CLOTHING STORE BILLING SYSTEM";

/// Currency prefix printed before every amount on a receipt.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "Rs.";

/// Maximum length of a customer display name.
///
/// The name is printed on the receipt and embedded in the export file name,
/// so it has to stay well under common file name limits.
pub const MAX_CUSTOMER_NAME_LEN: usize = 100;
