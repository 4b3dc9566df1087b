//! # Catalog File
//!
//! Reads `product.txt` and hands the text to the core parser.

use std::fs;
use std::io;
use std::path::Path;

use tillroll_core::catalog::{parse_catalog, SkipReason};
use tillroll_core::Catalog;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

/// Loads the catalog file at `path`.
///
/// Malformed lines are dropped (and logged at debug level). A missing file is
/// `StoreError::CatalogNotFound`, which callers treat as an empty catalog.
pub fn load_catalog(path: &Path) -> StoreResult<Catalog> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => StoreError::CatalogNotFound {
            path: path.to_path_buf(),
        },
        _ => StoreError::CatalogRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let parsed = parse_catalog(&text);
    for skipped in &parsed.skipped {
        debug!(
            path = %path.display(),
            line = skipped.line_number,
            reason = %describe(&skipped.reason),
            "Skipping catalog record"
        );
    }

    info!(
        path = %path.display(),
        products = parsed.catalog.len(),
        skipped = parsed.skipped.len(),
        "Catalog loaded"
    );

    Ok(parsed.catalog)
}

fn describe(reason: &SkipReason) -> String {
    match reason {
        SkipReason::FieldCount(n) => format!("expected 2 fields, found {}", n),
        SkipReason::EmptyName => "empty product name".to_string(),
        SkipReason::InvalidPrice(price) => format!("price '{}' is not a number", price),
        SkipReason::NegativePrice(price) => format!("price '{}' is negative", price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tillroll_core::Money;

    #[test]
    fn test_load_catalog_skips_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("product.txt");
        fs::write(&path, "Shirt,20.00\nBadLine\nJeans,abc\nJeans,40.00\n").unwrap();

        let catalog = load_catalog(&path).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.price_of("Shirt"), Some(Money::from_cents(2000)));
        assert_eq!(catalog.price_of("Jeans"), Some(Money::from_cents(4000)));
    }

    #[test]
    fn test_load_catalog_handles_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("product.txt");
        fs::write(&path, "Shirt,20.00\r\nJeans,40.00\r\n").unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.price_of("Jeans"), Some(Money::from_cents(4000)));
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = load_catalog(&path).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_catalog_rejects_non_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("product.txt");
        fs::write(&path, [0xff, 0xfe, b',', b'1']).unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, StoreError::CatalogRead { .. }));
    }

    #[test]
    fn test_describe_reasons() {
        assert_eq!(
            describe(&SkipReason::FieldCount(3)),
            "expected 2 fields, found 3"
        );
        assert_eq!(
            describe(&SkipReason::InvalidPrice("abc".to_string())),
            "price 'abc' is not a number"
        );
    }
}
