//! Bank account used to pay for orders
//!
//! The balance never goes negative: opening balances are validated and
//! withdrawals larger than the balance are rejected with the account unchanged.

use crate::core::traits::Payer;
use crate::types::OrderError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A named account holding a balance
#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    owner: String,
    balance: Decimal,
}

impl BankAccount {
    /// Create an account with a zero balance
    pub fn new(owner: impl Into<String>) -> Self {
        BankAccount {
            owner: owner.into(),
            balance: Decimal::ZERO,
        }
    }

    /// Create an account with an opening balance
    ///
    /// # Errors
    ///
    /// [`OrderError::InvalidAmount`] if `balance` is negative
    pub fn with_balance(owner: impl Into<String>, balance: Decimal) -> Result<Self, OrderError> {
        if balance < Decimal::ZERO {
            return Err(OrderError::invalid_amount(balance, "opening balance"));
        }
        Ok(BankAccount {
            owner: owner.into(),
            balance,
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Add funds to the account
    ///
    /// # Errors
    ///
    /// - [`OrderError::InvalidAmount`] if `amount` is zero or negative
    /// - [`OrderError::ArithmeticOverflow`] if the balance would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), OrderError> {
        if amount <= Decimal::ZERO {
            return Err(OrderError::invalid_amount(amount, "deposit"));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| OrderError::arithmetic_overflow("deposit"))?;

        log::debug!("account {}: deposit {} -> {}", self.owner, amount, self.balance);
        Ok(())
    }

    /// Add funds given as text
    ///
    /// # Errors
    ///
    /// - [`OrderError::NonNumericAmount`] if `raw` is not a decimal number
    /// - anything [`BankAccount::deposit`] returns
    pub fn deposit_str(&mut self, raw: &str) -> Result<(), OrderError> {
        let amount = parse_amount(raw)?;
        self.deposit(amount)
    }

    /// Take funds out of the account
    ///
    /// # Errors
    ///
    /// - [`OrderError::InvalidAmount`] if `amount` is zero or negative
    /// - [`OrderError::InsufficientFunds`] if `amount` exceeds the balance
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), OrderError> {
        if amount <= Decimal::ZERO {
            return Err(OrderError::invalid_amount(amount, "withdraw"));
        }
        if amount > self.balance {
            return Err(OrderError::insufficient_funds(
                &self.owner,
                self.balance,
                amount,
            ));
        }

        self.balance -= amount;
        log::debug!("account {}: withdraw {} -> {}", self.owner, amount, self.balance);
        Ok(())
    }
}

impl Payer for BankAccount {
    fn charge(&mut self, amount: Decimal) -> Result<(), OrderError> {
        self.withdraw(amount)
    }

    fn refund(&mut self, amount: Decimal) -> Result<(), OrderError> {
        self.deposit(amount)
    }
}

/// Parse an amount typed as text
///
/// # Errors
///
/// [`OrderError::NonNumericAmount`] if `raw` is not a decimal number
pub fn parse_amount(raw: &str) -> Result<Decimal, OrderError> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| OrderError::NonNumericAmount {
            raw: raw.to_string(),
        })
}
