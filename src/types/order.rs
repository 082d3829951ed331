//! Order and receipt types
//!
//! Orders are built by the caller and passed in; a [`Receipt`] is produced
//! once per successful order and handed back, never stored.

use super::product::Sku;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product identifier
    pub sku: Sku,

    /// Requested quantity (must be positive)
    pub qty: u32,
}

impl OrderItem {
    pub fn new(sku: impl Into<Sku>, qty: u32) -> Self {
        OrderItem {
            sku: sku.into(),
            qty,
        }
    }
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier, echoed on the receipt
    pub order_id: String,

    /// Ordered lines, in the order they were given
    pub items: Vec<OrderItem>,

    /// Optional coupon code (`SAVE10`, `FLAT50`)
    pub coupon_code: Option<String>,
}

impl Order {
    /// Create an order without a coupon
    pub fn new(order_id: impl Into<String>, items: Vec<OrderItem>) -> Self {
        Order {
            order_id: order_id.into(),
            items,
            coupon_code: None,
        }
    }

    /// Attach a coupon code
    pub fn with_coupon(mut self, code: impl Into<String>) -> Self {
        self.coupon_code = Some(code.into());
        self
    }
}

/// Identifier and quantity as echoed on the receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptItem {
    pub sku: Sku,
    pub qty: u32,
}

/// Itemised price breakdown for one order line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub sku: Sku,
    pub name: String,
    pub qty: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// Output record of a successful order
///
/// All amounts derive from the same computation:
/// `grand_total = discounted + tax` and `tax` is computed on `discounted`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub order_id: String,
    pub items: Vec<ReceiptItem>,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Decimal,
    pub discounted: Decimal,
    pub tax: Decimal,
    pub grand_total: Decimal,
    pub timestamp: DateTime<Utc>,

    /// The coupon code as given on the order, empty when none was used
    pub coupon_code: String,
}
