//! Core traits for the order flow
//!
//! The order processor charges whatever implements [`Payer`], so accounts
//! other than [`BankAccount`](crate::core::BankAccount) can pay for orders.

use crate::types::OrderError;
use rust_decimal::Decimal;

/// Something an order can be charged to
pub trait Payer {
    /// Take `amount` from the payer, leaving it unchanged on error
    fn charge(&mut self, amount: Decimal) -> Result<(), OrderError>;

    /// Give back an amount previously charged
    fn refund(&mut self, amount: Decimal) -> Result<(), OrderError>;
}
