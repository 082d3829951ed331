//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `product`: Catalog entries and identifiers
//! - `order`: Orders, order lines and receipts
//! - `error`: Error types for the order desk

pub mod error;
pub mod order;
pub mod product;

pub use error::{ErrorKind, OrderError};
pub use order::{Order, OrderItem, Receipt, ReceiptItem, ReceiptLine};
pub use product::{Product, Sku, DEFAULT_CATEGORY};
