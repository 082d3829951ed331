//! Error types for the order desk
//!
//! This module defines every error that can occur while parsing a catalog,
//! managing stock, charging an account or processing an order.
//!
//! # Error Categories
//!
//! Each variant belongs to one [`ErrorKind`]:
//!
//! - **Value**: invalid quantities or amounts, malformed rows, insufficient stock or funds
//! - **Lookup**: an identifier that is not in the catalog
//! - **Type**: input that is not numeric where a number is required
//! - **Io**: file not found, unreadable file

use rust_decimal::Decimal;
use thiserror::Error;

/// Broad category of an [`OrderError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input was well-typed but its value is not acceptable
    Value,
    /// A product identifier was not found
    Lookup,
    /// The input is not of the expected type (e.g. non-numeric amount)
    Type,
    /// File system failure
    Io,
}

/// Main error type for the order desk
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A catalog row with fewer than three fields
    #[error("Malformed product row{}: {row}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MalformedRow {
        /// Line number where the row starts (if available)
        line: Option<u64>,
        /// The offending row as read
        row: String,
    },

    /// A catalog price that is not a decimal number
    #[error("Invalid price '{price}' for product {sku}")]
    InvalidPrice {
        /// Product identifier
        sku: String,
        /// The raw price field
        price: String,
    },

    /// Product identifier missing from the catalog
    #[error("Unknown sku: {sku}")]
    UnknownSku {
        /// The identifier that was looked up
        sku: String,
    },

    /// Quantity must be positive
    #[error("Quantity must be positive for {sku}")]
    InvalidQuantity {
        /// Product identifier
        sku: String,
    },

    /// Not enough stock to satisfy a removal or an order
    #[error("Insufficient stock for {sku}: available {available}, requested {requested}")]
    InsufficientStock {
        /// Product identifier
        sku: String,
        /// Current stock count
        available: u32,
        /// Requested quantity
        requested: u64,
    },

    /// Amount must be positive (deposit/withdraw) or non-negative (opening balance)
    #[error("Invalid amount {amount} for {operation}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
        /// Operation that rejected it
        operation: String,
    },

    /// Amount text could not be read as a number
    #[error("Amount must be numeric, got '{raw}'")]
    NonNumericAmount {
        /// The raw input
        raw: String,
    },

    /// Withdrawal larger than the balance
    #[error("Insufficient funds for {owner}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account owner
        owner: String,
        /// Current balance
        balance: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// An order without items
    #[error("Order {order_id} has no items")]
    EmptyOrder {
        /// Order identifier
        order_id: String,
    },

    /// Division with a zero divisor
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },
}

impl From<std::io::Error> for OrderError {
    fn from(error: std::io::Error) -> Self {
        OrderError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for OrderError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(_) => OrderError::IoError {
                message: error.to_string(),
            },
            _ => OrderError::MalformedRow {
                line: error.position().map(|pos| pos.line()),
                row: error.to_string(),
            },
        }
    }
}

impl OrderError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::FileNotFound { .. } | OrderError::IoError { .. } => ErrorKind::Io,
            OrderError::UnknownSku { .. } => ErrorKind::Lookup,
            OrderError::NonNumericAmount { .. } => ErrorKind::Type,
            OrderError::MalformedRow { .. }
            | OrderError::InvalidPrice { .. }
            | OrderError::InvalidQuantity { .. }
            | OrderError::InsufficientStock { .. }
            | OrderError::InvalidAmount { .. }
            | OrderError::InsufficientFunds { .. }
            | OrderError::EmptyOrder { .. }
            | OrderError::DivisionByZero
            | OrderError::ArithmeticOverflow { .. } => ErrorKind::Value,
        }
    }

    /// Create an UnknownSku error
    pub fn unknown_sku(sku: &str) -> Self {
        OrderError::UnknownSku {
            sku: sku.to_string(),
        }
    }

    /// Create an InvalidQuantity error
    pub fn invalid_quantity(sku: &str) -> Self {
        OrderError::InvalidQuantity {
            sku: sku.to_string(),
        }
    }

    /// Create an InsufficientStock error
    pub fn insufficient_stock(sku: &str, available: u32, requested: u64) -> Self {
        OrderError::InsufficientStock {
            sku: sku.to_string(),
            available,
            requested,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal, operation: &str) -> Self {
        OrderError::InvalidAmount {
            amount,
            operation: operation.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(owner: &str, balance: Decimal, requested: Decimal) -> Self {
        OrderError::InsufficientFunds {
            owner: owner.to_string(),
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        OrderError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create a MalformedRow error
    pub fn malformed_row(line: Option<u64>, row: &str) -> Self {
        OrderError::MalformedRow {
            line,
            row: row.to_string(),
        }
    }
}
