//! Core business logic module
//!
//! This module contains the order processing components:
//! - `traits` - The `Payer` seam used to charge orders
//! - `inventory` - Product catalog and stock counts
//! - `pricing` - Coupon and tax calculations
//! - `bank_account` - Account balance with deposit/withdraw validation
//! - `order_processor` - Order validation, charging and stock commit

pub mod bank_account;
pub mod inventory;
pub mod order_processor;
pub mod pricing;
pub mod traits;

pub use bank_account::BankAccount;
pub use inventory::Inventory;
pub use order_processor::{calculate_subtotal, process_order, OrderProcessor, OrderQuote};
pub use pricing::{apply_coupon, compute_tax, Coupon, PricingPolicy, DEFAULT_TAX_RATE};
pub use traits::Payer;
