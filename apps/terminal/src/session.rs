//! # Checkout Session
//!
//! The menu loop and the state it works on.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  Customer name ──► Discount % ──► MENU ◄──────────────────────┐         │
//! │                                    │                          │         │
//! │             ┌──────────┬───────────┼───────────┬──────────┐   │         │
//! │             ▼          ▼           ▼           ▼          ▼   │         │
//! │         1 Add Item  2 View    3 Remove    4 Final Bill  5 Exit│         │
//! │             │          │           │           │          │   │         │
//! │             └──────────┴───────────┴───────────┘          ▼   │         │
//! │                        └──────────────────────────────► end   │         │
//! │                                    └──────────────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure inside a menu action is reported to the operator and the
//! loop continues with the cart unchanged. Only console I/O errors end the
//! session early; end of input ends it cleanly.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use tillroll_core::validation::{
    parse_discount, parse_quantity, parse_selection, validate_customer_name,
};
use tillroll_core::{render_receipt, Cart, Catalog, DiscountRate, Receipt, ReceiptLayout};
use tillroll_store::{export_receipt, StoreResult};
use tracing::{debug, info};

use crate::config::TerminalConfig;
use crate::error::AppResult;
use crate::prompt::Console;

/// Source of "now" for receipt dates and export file names.
pub type Clock = fn() -> NaiveDateTime;

/// The local wall clock.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

// =============================================================================
// Menu
// =============================================================================

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    ViewBill,
    RemoveItem,
    FinalBill,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order, with their labels.
    pub const ALL: [(MenuChoice, &'static str); 5] = [
        (MenuChoice::AddItem, "Add Item"),
        (MenuChoice::ViewBill, "View Bill"),
        (MenuChoice::RemoveItem, "Remove Item"),
        (MenuChoice::FinalBill, "Final Bill"),
        (MenuChoice::Exit, "Exit"),
    ];
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::AddItem),
            "2" => Ok(MenuChoice::ViewBill),
            "3" => Ok(MenuChoice::RemoveItem),
            "4" => Ok(MenuChoice::FinalBill),
            "5" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// State for one customer's checkout.
///
/// ## Ownership
/// The session owns the catalog and the cart outright; menu actions borrow
/// the session mutably one at a time.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    cart: Cart,
    customer_name: String,
    discount: DiscountRate,
    layout: ReceiptLayout,
    export_dir: PathBuf,
    clock: Clock,
}

impl Session {
    /// Creates a session with an empty cart.
    pub fn new(
        catalog: Catalog,
        customer_name: impl Into<String>,
        discount: DiscountRate,
        config: &TerminalConfig,
    ) -> Self {
        Session {
            catalog,
            cart: Cart::new(),
            customer_name: customer_name.into(),
            discount,
            layout: config.layout.clone(),
            export_dir: config.store.export_dir.clone(),
            clock: local_now,
        }
    }

    /// Replaces the clock used for receipt timestamps.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn discount(&self) -> DiscountRate {
        self.discount
    }

    /// Renders the current cart, or `None` when there is nothing to show.
    pub fn render(&self, generated_at: NaiveDateTime) -> Option<Receipt> {
        if self.cart.is_empty() {
            return None;
        }
        Some(render_receipt(
            &self.cart,
            &self.customer_name,
            self.discount,
            generated_at,
            &self.layout,
        ))
    }

    /// Renders and writes the receipt file, or `None` for an empty cart.
    pub fn export(&self) -> Option<StoreResult<PathBuf>> {
        let generated_at = (self.clock)();
        let receipt = self.render(generated_at)?;
        Some(export_receipt(
            &self.export_dir,
            &self.customer_name,
            generated_at,
            &receipt.lines,
        ))
    }

    // -------------------------------------------------------------------------
    // Menu actions
    // -------------------------------------------------------------------------

    /// Menu 1: list the catalog and add a line.
    pub fn add_item<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> AppResult<()> {
        if self.catalog.is_empty() {
            return console.say("No products available.");
        }

        console.say("\nAvailable Products:")?;
        for (i, product) in self.catalog.iter().enumerate() {
            console.say(format_args!(
                "{}. {} - {}{}",
                i + 1,
                product.name,
                self.layout.currency_symbol,
                product.unit_price
            ))?;
        }

        let selection = console.ask("Select product number: ", parse_selection)?;
        let product = match self.catalog.select(selection) {
            Ok(product) => product,
            Err(err) => {
                debug!(%err, "Rejected catalog selection");
                return console.say("Invalid choice.");
            }
        };

        let quantity = console.ask("Quantity: ", parse_quantity)?;
        match self.cart.add_product(product, quantity) {
            Ok(line) => {
                debug!(
                    product = %line.product_name,
                    quantity = line.quantity,
                    line_total = %line.line_total,
                    "Line added"
                );
                console.say(format_args!("Added {} x{}", line.product_name, line.quantity))
            }
            Err(err) => console.say(err),
        }
    }

    /// Menu 2: print the receipt.
    pub fn view_bill<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> AppResult<()> {
        let Some(receipt) = self.render((self.clock)()) else {
            return console.say("No items yet.");
        };
        for line in &receipt.lines {
            console.say(line)?;
        }
        Ok(())
    }

    /// Menu 3: list the cart and remove a line by number.
    pub fn remove_item<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> AppResult<()> {
        if self.cart.is_empty() {
            return console.say("No items to remove.");
        }

        for (i, item) in self.cart.items().iter().enumerate() {
            console.say(format_args!("{} {}", i + 1, item.product_name))?;
        }

        let index = console.ask("Enter item number: ", parse_selection)?;
        match self.cart.remove_item(index) {
            Ok(removed) => {
                debug!(product = %removed.product_name, index, "Line removed");
                console.say("Item removed.")
            }
            Err(err) => {
                debug!(%err, "Rejected cart index");
                console.say("Invalid number.")
            }
        }
    }

    /// Menu 4: write the receipt file.
    pub fn final_bill<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> AppResult<()> {
        match self.export() {
            None => console.say("No items to save."),
            Some(Ok(path)) => console.say(format_args!("Bill saved to {}", path.display())),
            Some(Err(err)) => console.say(format_args!("Failed to save bill: {}", err)),
        }
    }
}

// =============================================================================
// Menu Loop
// =============================================================================

/// Runs a full checkout: customer details, then the menu until Exit or end
/// of input.
///
/// Returns the session as it stood at the end, or `None` if input ended
/// before the customer details were complete.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: Catalog,
    config: &TerminalConfig,
    clock: Clock,
) -> AppResult<Option<Session>> {
    console.say(format_args!("\nWELCOME TO {}", config.layout.store_name))?;

    let (customer_name, discount) = match customer_details(console) {
        Ok(details) => details,
        Err(err) if err.is_input_closed() => return Ok(None),
        Err(err) => return Err(err),
    };

    info!(customer = %customer_name, discount = %discount, "Session started");
    let mut session = Session::new(catalog, customer_name, discount, config).with_clock(clock);

    match menu_loop(console, &mut session) {
        Ok(()) => {}
        Err(err) if err.is_input_closed() => debug!("Input closed, ending session"),
        Err(err) => return Err(err),
    }

    info!(
        lines = session.cart().len(),
        units = session.cart().total_quantity(),
        "Session ended"
    );
    Ok(Some(session))
}

fn customer_details<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> AppResult<(String, DiscountRate)> {
    let name = console.ask("Customer name: ", validate_customer_name)?;
    let discount = console.ask("Discount %: ", parse_discount)?;
    Ok((name, discount))
}

fn menu_loop<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> AppResult<()> {
    loop {
        console.say("\nMENU")?;
        for (i, (_, label)) in MenuChoice::ALL.iter().enumerate() {
            console.say(format_args!("{} {}", i + 1, label))?;
        }

        let choice = console.read_line("Enter choice: ")?;
        match choice.parse::<MenuChoice>() {
            Ok(MenuChoice::AddItem) => session.add_item(console)?,
            Ok(MenuChoice::ViewBill) => session.view_bill(console)?,
            Ok(MenuChoice::RemoveItem) => session.remove_item(console)?,
            Ok(MenuChoice::FinalBill) => session.final_bill(console)?,
            Ok(MenuChoice::Exit) => return console.say("Thank you!"),
            Err(()) => console.say("Invalid choice.")?,
        }
    }
}
