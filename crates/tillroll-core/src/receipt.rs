//! # Receipt Module
//!
//! Renders a cart into the fixed-width text receipt used both on screen and
//! in the exported bill file.
//!
//! ## Layout
//! ```text
//! ======================================================
//!          CLOTHING STORE BILLING SYSTEM
//! ======================================================
//! Name: Asha
//! Date: 2026-10-16 14:30:05
//! #    Item                  Qty    Price     Total
//! ------------------------------------------------------
//! 1    Shirt                   2 Rs. 20.00 Rs.  40.00
//! 2    Jeans                   1 Rs. 40.00 Rs.  40.00
//! Discount                               -Rs.  8.00      ◄── only if discount > 0
//! ======================================================
//! GRAND TOTAL                            Rs.  72.00
//! ======================================================
//! ```
//!
//! Rendering is pure: the timestamp is an argument, and nothing is printed
//! or written here. An empty cart renders a valid receipt with zero totals;
//! callers that want a "nothing to show" notice check `cart.is_empty()`
//! first.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::money::Money;
use crate::types::DiscountRate;
use crate::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_STORE_NAME};

/// Width of the `=` and `-` rule lines.
pub const RECEIPT_WIDTH: usize = 54;

/// Widest item name shown in the item column; longer names are cut.
pub const ITEM_NAME_WIDTH: usize = 20;

/// Spaces before the store title.
pub const TITLE_INDENT: usize = 9;

/// Width of the label column on the discount and grand total rows.
const SUMMARY_LABEL_WIDTH: usize = 38;

/// Timestamp format printed on the `Date:` line.
pub const RECEIPT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Store-specific text printed on every receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLayout {
    /// Title line, indented under the top rule.
    pub store_name: String,

    /// Prefix before every amount, e.g. `Rs.`
    pub currency_symbol: String,
}

impl Default for ReceiptLayout {
    fn default() -> Self {
        ReceiptLayout {
            store_name: DEFAULT_STORE_NAME.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

/// A rendered receipt.
///
/// Derived from a cart on every render and never stored. The totals are
/// returned alongside the text so callers never have to parse them back out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Rendered text lines, without line terminators.
    pub lines: Vec<String>,

    /// Sum of all line totals.
    pub subtotal: Money,

    /// Amount taken off the subtotal (zero when there is no discount).
    pub discount_amount: Money,

    /// subtotal − discount_amount
    pub grand_total: Money,
}

/// Renders the receipt for `cart`.
///
/// ## Steps
/// 1. Header: rule, store title, rule, customer, timestamp, column headings
/// 2. One row per line item, numbered from 1 in cart order
/// 3. Subtotal = Σ line totals
/// 4. Discount row when `discount > 0`, omitted entirely otherwise
/// 5. Grand total row between two rules
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use tillroll_core::{render_receipt, Cart, Catalog, DiscountRate, Money, ReceiptLayout};
///
/// let catalog = Catalog::parse("Shirt,20.00\nJeans,40.00");
/// let mut cart = Cart::new();
/// cart.add_item(&catalog, 1, 2).unwrap();
/// cart.add_item(&catalog, 2, 1).unwrap();
///
/// let at = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let discount: DiscountRate = "10".parse().unwrap();
/// let receipt = render_receipt(&cart, "Asha", discount, at, &ReceiptLayout::default());
///
/// assert_eq!(receipt.subtotal, Money::from_cents(8000));
/// assert_eq!(receipt.discount_amount, Money::from_cents(800));
/// assert_eq!(receipt.grand_total, Money::from_cents(7200));
/// ```
pub fn render_receipt(
    cart: &Cart,
    customer_name: &str,
    discount: DiscountRate,
    generated_at: NaiveDateTime,
    layout: &ReceiptLayout,
) -> Receipt {
    let symbol = layout.currency_symbol.as_str();
    let heavy_rule = "=".repeat(RECEIPT_WIDTH);
    let light_rule = "-".repeat(RECEIPT_WIDTH);

    let mut lines = vec![
        heavy_rule.clone(),
        format!("{:indent$}{}", "", layout.store_name, indent = TITLE_INDENT),
        heavy_rule.clone(),
        format!("Name: {}", customer_name),
        format!("Date: {}", generated_at.format(RECEIPT_DATE_FORMAT)),
        format!(
            "{:<4} {:<name_w$} {:>4} {:>8} {:>9}",
            "#",
            "Item",
            "Qty",
            "Price",
            "Total",
            name_w = ITEM_NAME_WIDTH
        ),
        light_rule,
    ];

    for (position, item) in cart.items().iter().enumerate() {
        lines.push(format!(
            "{:<4} {:<name_w$} {:>4} {symbol}{:>6} {symbol}{:>7}",
            position + 1,
            truncate_name(&item.product_name, ITEM_NAME_WIDTH),
            item.quantity,
            item.unit_price,
            item.line_total,
            name_w = ITEM_NAME_WIDTH,
        ));
    }

    let subtotal = cart.subtotal();
    let discount_amount = subtotal.discount_amount(discount);
    let grand_total = subtotal - discount_amount;

    if !discount.is_zero() {
        lines.push(format!(
            "{:<label_w$} -{symbol}{:>6}",
            "Discount",
            discount_amount,
            label_w = SUMMARY_LABEL_WIDTH
        ));
    }

    lines.push(heavy_rule.clone());
    lines.push(format!(
        "{:<label_w$} {symbol}{:>7}",
        "GRAND TOTAL",
        grand_total,
        label_w = SUMMARY_LABEL_WIDTH
    ));
    lines.push(heavy_rule);

    Receipt {
        lines,
        subtotal,
        discount_amount,
        grand_total,
    }
}

/// Renders the receipt stamped with the current local time.
pub fn render_receipt_now(
    cart: &Cart,
    customer_name: &str,
    discount: DiscountRate,
    layout: &ReceiptLayout,
) -> Receipt {
    render_receipt(cart, customer_name, discount, Local::now().naive_local(), layout)
}

/// Cuts `name` to at most `width` characters so rows stay aligned.
fn truncate_name(name: &str, width: usize) -> &str {
    match name.char_indices().nth(width) {
        Some((byte_index, _)) => &name[..byte_index],
        None => name,
    }
}
