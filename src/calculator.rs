//! Arithmetic and text helpers
//!
//! Small standalone utilities exposed through the `calc` subcommand.

use crate::types::OrderError;
use rust_decimal::Decimal;

pub fn add(a: Decimal, b: Decimal) -> Result<Decimal, OrderError> {
    a.checked_add(b)
        .ok_or_else(|| OrderError::arithmetic_overflow("add"))
}

/// Divide `a` by `b`
///
/// # Errors
///
/// [`OrderError::DivisionByZero`] if `b` is zero
pub fn divide(a: Decimal, b: Decimal) -> Result<Decimal, OrderError> {
    if b.is_zero() {
        return Err(OrderError::DivisionByZero);
    }
    a.checked_div(b)
        .ok_or_else(|| OrderError::arithmetic_overflow("divide"))
}

pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Whether `text` reads the same backwards, ignoring whitespace and case
pub fn is_palindrome(text: &str) -> bool {
    let cleaned: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// Number of whitespace-separated words
pub fn word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}
