//! Product catalog types
//!
//! A product is created once (usually by the catalog parser) and never
//! modified afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier
///
/// Identifiers are compared exactly: `"sku1"` and `"SKU1"` are different products.
pub type Sku = String;

/// Category used when a catalog row does not name one
pub const DEFAULT_CATEGORY: &str = "general";

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub sku: Sku,

    /// Display name
    pub name: String,

    /// Unit price in currency units
    pub price: Decimal,

    /// Free-form category, `"general"` unless specified
    pub category: String,
}

impl Product {
    /// Create a product in the default category
    pub fn new(sku: impl Into<Sku>, name: impl Into<String>, price: Decimal) -> Self {
        Product {
            sku: sku.into(),
            name: name.into(),
            price,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Replace the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}
