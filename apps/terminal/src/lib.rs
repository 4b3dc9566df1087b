//! # Tillroll Terminal
//!
//! Interactive checkout for one customer at a time.
//!
//! ## Module Structure
//! ```text
//! tillroll_terminal/
//! ├── lib.rs       ◄─── You are here (startup)
//! ├── config.rs    ◄─── Defaults → TILLROLL_* env → flags
//! ├── error.rs     ◄─── Session-ending errors
//! ├── prompt.rs    ◄─── Console I/O and re-prompt loops
//! └── session.rs   ◄─── Menu loop and menu actions
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Startup Sequence                                │
//! │                                                                         │
//! │  1. Initialize tracing ────────────────────────────────────────────────►│
//! │     • Logs go to stderr so they never interleave with the receipt       │
//! │     • Default: warn, tillroll=info; override with RUST_LOG              │
//! │                                                                         │
//! │  2. Resolve configuration ─────────────────────────────────────────────►│
//! │                                                                         │
//! │  3. Load catalog ──────────────────────────────────────────────────────►│
//! │     • Missing/unreadable file: notice, continue with empty catalog      │
//! │                                                                         │
//! │  4. Run the session over stdin/stdout ─────────────────────────────────►│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod session;

use std::io;

use clap::Parser;
use tillroll_core::Catalog;
use tillroll_store::{load_catalog, StoreError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::{Cli, TerminalConfig};
use error::AppResult;
use prompt::Console;
use session::{local_now, run_session};

/// Application entry point.
pub fn run() -> AppResult<()> {
    init_tracing();

    let config = TerminalConfig::from_env()?.with_cli(Cli::parse());
    info!(
        catalog = %config.store.catalog_path.display(),
        export_dir = %config.store.export_dir.display(),
        "Starting tillroll"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let catalog = match load_catalog(&config.store.catalog_path) {
        Ok(catalog) => catalog,
        Err(err) => {
            warn!(error = %err, "Continuing with an empty catalog");
            console.say(catalog_notice(&err))?;
            Catalog::new()
        }
    };

    run_session(&mut console, catalog, &config, local_now)?;
    Ok(())
}

/// Operator-facing text for a catalog that could not be loaded.
fn catalog_notice(err: &StoreError) -> String {
    if err.is_not_found() {
        "Product file not found.".to_string()
    } else {
        format!("{}.", err)
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every cart change and skipped catalog line
/// - `RUST_LOG=warn` - Only problems
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,tillroll=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
