//! Catalog file reader
//!
//! Loads catalog text from disk and delegates parsing to the csv_format
//! module. Fatal file errors (missing file, permission denied) are mapped to
//! [`OrderError`] variants so the CLI can report them uniformly.

use crate::io::csv_format::parse_products_csv;
use crate::types::{OrderError, Product};
use std::fs;
use std::path::Path;

/// Read and parse a catalog file
///
/// # Errors
///
/// - [`OrderError::FileNotFound`] if the path does not exist
/// - [`OrderError::IoError`] for any other read failure
/// - any parse error from [`parse_products_csv`]
///
/// # Examples
///
/// ```no_run
/// use order_desk::io::read_catalog;
/// use std::path::Path;
///
/// let products = read_catalog(Path::new("catalog.csv")).unwrap();
/// println!("Loaded {} products", products.len());
/// ```
pub fn read_catalog(path: &Path) -> Result<Vec<Product>, OrderError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => OrderError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => OrderError::IoError {
            message: format!("Failed to read '{}': {}", path.display(), e),
        },
    })?;

    log::info!("loading catalog from {}", path.display());
    parse_products_csv(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary catalog file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_read_catalog_parses_file() {
        let file = create_temp_csv("sku,name,price,category\nSKU1,Pen,10.5,stationery\n");

        let products = read_catalog(file.path()).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].sku, "SKU1");
    }

    #[test]
    fn test_read_catalog_missing_file() {
        let err = read_catalog(Path::new("nonexistent_catalog.csv")).unwrap_err();
        assert_eq!(
            err,
            OrderError::FileNotFound {
                path: "nonexistent_catalog.csv".to_string()
            }
        );
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_read_catalog_propagates_parse_errors() {
        let file = create_temp_csv("sku,name,price\nBADSKU,OnlyTwoFields\n");

        let err = read_catalog(file.path()).unwrap_err();
        assert!(matches!(err, OrderError::MalformedRow { .. }));
    }

    #[test]
    fn test_read_catalog_empty_file() {
        let file = create_temp_csv("");
        assert!(read_catalog(file.path()).unwrap().is_empty());
    }
}
