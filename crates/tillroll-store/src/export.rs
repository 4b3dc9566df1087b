//! # Receipt Export
//!
//! Writes a rendered receipt to `bill_<customer>_<YYYYMMDD_HHMMSS>.txt`.
//!
//! ## File Naming
//! ```text
//! customer "Asha Rao", 2026-10-16 14:30:05
//!      │
//!      ▼
//! bill_Asha Rao_20261016_143005.txt
//!
//! customer "A/B", same time          (path separators replaced)
//!      │
//!      ▼
//! bill_A_B_20261016_143005.txt
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};

/// Timestamp format embedded in export file names.
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Builds the export file name for a customer and time.
pub fn receipt_file_name(customer_name: &str, generated_at: NaiveDateTime) -> String {
    format!(
        "bill_{}_{}.txt",
        sanitize_file_component(customer_name),
        generated_at.format(EXPORT_TIMESTAMP_FORMAT)
    )
}

/// Writes `lines` (one per line, `\n` terminated, UTF-8) into `dir` and
/// returns the path written. An existing file with the same name is
/// replaced.
pub fn export_receipt(
    dir: &Path,
    customer_name: &str,
    generated_at: NaiveDateTime,
    lines: &[String],
) -> StoreResult<PathBuf> {
    let path = dir.join(receipt_file_name(customer_name, generated_at));

    let mut contents = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }

    if let Err(source) = fs::write(&path, contents) {
        warn!(path = %path.display(), error = %source, "Receipt export failed");
        return Err(StoreError::ExportWrite { path, source });
    }

    info!(path = %path.display(), lines = lines.len(), "Receipt exported");
    Ok(path)
}

/// Replaces characters that cannot appear in a file name on common
/// platforms.
fn sanitize_file_component(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
