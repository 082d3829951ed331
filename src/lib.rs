//! Order Desk Library
//! # Overview
//!
//! This library processes toy retail orders against an in-memory inventory:
//! a catalog is parsed from CSV-like text, stocked, and orders are priced,
//! charged to a bank account and committed, producing a receipt.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Product, Order, Receipt, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::inventory`] - Product catalog and stock counts
//!   - [`core::pricing`] - Coupon and tax calculations
//!   - [`core::bank_account`] - Account balance management
//!   - [`core::order_processor`] - Order orchestration
//! - [`io`] - Catalog parsing and receipt output
//! - [`calculator`] - Small arithmetic and text helpers
//! - [`runner`] - Executes CLI commands
//!
//! # Order Flow
//!
//! 1. Validate every line: positive quantity, known product, enough stock
//! 2. Price: subtotal, coupon discount, tax on the discounted amount
//! 3. Charge the payer the grand total
//! 4. Remove stock for all lines at once
//! 5. Return a receipt
//!
//! A failure at any step leaves inventory and payer unchanged.
//!
//! # Example
//!
//! ```
//! use order_desk::{parse_products_csv, process_order, BankAccount, Inventory, Order, OrderItem};
//! use rust_decimal::Decimal;
//!
//! let products = parse_products_csv("SKU1,Pen,10.5\nSKU2,Book,99.0\n").unwrap();
//! let mut inventory = Inventory::from_products(products);
//! inventory.add_stock("SKU1", 10).unwrap();
//! inventory.add_stock("SKU2", 5).unwrap();
//!
//! let mut account = BankAccount::with_balance("Shaik", Decimal::new(500, 0)).unwrap();
//! let order = Order::new("ORD-001", vec![OrderItem::new("SKU1", 2), OrderItem::new("SKU2", 1)])
//!     .with_coupon("SAVE10");
//!
//! let receipt = process_order(&order, &mut inventory, &mut account).unwrap();
//! assert_eq!(receipt.grand_total, Decimal::new(12744, 2));
//! assert_eq!(inventory.get_stock("SKU1"), 8);
//! ```

// Module declarations
pub mod calculator;
pub mod cli;
pub mod core;
pub mod io;
pub mod runner;
pub mod types;

pub use self::core::{
    apply_coupon, calculate_subtotal, compute_tax, process_order, BankAccount, Inventory,
    OrderProcessor, Payer, PricingPolicy,
};
pub use io::{parse_products_csv, read_catalog};
pub use types::{ErrorKind, Order, OrderError, OrderItem, Product, Receipt};
