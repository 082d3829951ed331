//! I/O module
//!
//! Handles catalog parsing and receipt output.
//!
//! # Components
//!
//! - `csv_format` - Text format handling (catalog parsing, receipt serialization)
//! - `catalog_reader` - Reads a catalog file from disk

pub mod catalog_reader;
pub mod csv_format;

pub use catalog_reader::read_catalog;
pub use csv_format::{parse_products_csv, write_receipt_csv, write_receipt_json};
