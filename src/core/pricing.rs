//! Coupon and tax pricing
//!
//! Pure functions over `Decimal` amounts. The free functions use the default
//! [`PricingPolicy`]; build a custom policy for other rates.
//!
//! Supported coupon codes (case-insensitive, surrounding whitespace ignored):
//!
//! - `SAVE10`: 10% off
//! - `FLAT50`: 50 currency units off, only when the subtotal is at least 200
//!
//! Unknown codes leave the amount unchanged. Discounted amounts never go below zero.

use crate::types::OrderError;
use rust_decimal::Decimal;

/// Default sales tax rate (18%)
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Decimal places tax amounts are rounded to
pub const TAX_DECIMAL_PLACES: u32 = 2;

/// A recognised coupon code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coupon {
    /// Percentage discount
    Save10,
    /// Flat discount above a minimum subtotal
    Flat50,
}

impl Coupon {
    /// Parse a coupon code, returning `None` for unknown or empty codes
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "SAVE10" => Some(Coupon::Save10),
            "FLAT50" => Some(Coupon::Flat50),
            _ => None,
        }
    }
}

/// Pricing configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PricingPolicy {
    /// Tax rate as a fraction (0.18 = 18%)
    pub tax_rate: Decimal,
    /// Percentage taken off by `SAVE10` (10 = 10%)
    pub save10_percent: Decimal,
    /// Amount taken off by `FLAT50`
    pub flat50_amount: Decimal,
    /// Minimum subtotal for `FLAT50` to apply
    pub flat50_min_subtotal: Decimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            save10_percent: Decimal::new(10, 0),
            flat50_amount: Decimal::new(50, 0),
            flat50_min_subtotal: Decimal::new(200, 0),
        }
    }
}

impl PricingPolicy {
    /// Create a new PricingPolicy with custom values
    ///
    /// Each value is checked on its own: a tax rate outside `[0, 1]`, a
    /// `SAVE10` percentage outside `[0, 100]` or a negative `FLAT50` amount or
    /// threshold is replaced by its default with a warning.
    pub fn new(
        tax_rate: Decimal,
        save10_percent: Decimal,
        flat50_amount: Decimal,
        flat50_min_subtotal: Decimal,
    ) -> Self {
        let default = Self::default();

        let tax_rate = if tax_rate < Decimal::ZERO || tax_rate > Decimal::ONE {
            log::warn!(
                "Invalid tax_rate ({}), using default ({})",
                tax_rate,
                default.tax_rate
            );
            default.tax_rate
        } else {
            tax_rate
        };

        let save10_percent =
            if save10_percent < Decimal::ZERO || save10_percent > Decimal::ONE_HUNDRED {
                log::warn!(
                    "Invalid save10_percent ({}), using default ({})",
                    save10_percent,
                    default.save10_percent
                );
                default.save10_percent
            } else {
                save10_percent
            };

        let flat50_amount = if flat50_amount < Decimal::ZERO {
            log::warn!(
                "Invalid flat50_amount ({}), using default ({})",
                flat50_amount,
                default.flat50_amount
            );
            default.flat50_amount
        } else {
            flat50_amount
        };

        let flat50_min_subtotal = if flat50_min_subtotal < Decimal::ZERO {
            log::warn!(
                "Invalid flat50_min_subtotal ({}), using default ({})",
                flat50_min_subtotal,
                default.flat50_min_subtotal
            );
            default.flat50_min_subtotal
        } else {
            flat50_min_subtotal
        };

        Self {
            tax_rate,
            save10_percent,
            flat50_amount,
            flat50_min_subtotal,
        }
    }

    /// Create a policy with a custom tax rate and default coupon settings
    pub fn with_tax_rate(tax_rate: Decimal) -> Self {
        let default = Self::default();
        Self::new(
            tax_rate,
            default.save10_percent,
            default.flat50_amount,
            default.flat50_min_subtotal,
        )
    }

    /// Apply a coupon code to a subtotal
    ///
    /// # Errors
    ///
    /// [`OrderError::ArithmeticOverflow`] if the discount cannot be represented
    pub fn apply_coupon(
        &self,
        subtotal: Decimal,
        code: Option<&str>,
    ) -> Result<Decimal, OrderError> {
        let Some(coupon) = code.and_then(Coupon::parse) else {
            if let Some(code) = code.filter(|c| !c.trim().is_empty()) {
                log::debug!("ignoring unknown coupon code '{}'", code);
            }
            return Ok(subtotal);
        };

        let discount = match coupon {
            Coupon::Save10 => subtotal
                .checked_mul(self.save10_percent)
                .and_then(|d| d.checked_div(Decimal::ONE_HUNDRED))
                .ok_or_else(|| OrderError::arithmetic_overflow("coupon discount"))?,
            Coupon::Flat50 if subtotal >= self.flat50_min_subtotal => self.flat50_amount,
            Coupon::Flat50 => Decimal::ZERO,
        };

        let discounted = subtotal
            .checked_sub(discount)
            .ok_or_else(|| OrderError::arithmetic_overflow("coupon discount"))?;

        Ok(discounted.max(Decimal::ZERO))
    }

    /// Tax on an amount at this policy's rate
    pub fn compute_tax(&self, amount: Decimal) -> Result<Decimal, OrderError> {
        compute_tax(amount, self.tax_rate)
    }
}

/// Apply a coupon code to a subtotal with the default policy
///
/// # Examples
///
/// ```
/// use order_desk::core::pricing::apply_coupon;
/// use rust_decimal::Decimal;
///
/// assert_eq!(apply_coupon(Decimal::new(200, 0), Some("SAVE10")).unwrap(), Decimal::new(180, 0));
/// assert_eq!(apply_coupon(Decimal::new(150, 0), Some("FLAT50")).unwrap(), Decimal::new(150, 0));
/// ```
pub fn apply_coupon(subtotal: Decimal, code: Option<&str>) -> Result<Decimal, OrderError> {
    PricingPolicy::default().apply_coupon(subtotal, code)
}

/// Tax on `amount` at `rate`
///
/// The product is computed exactly and only the final value is rounded to
/// two decimal places, half to even.
///
/// # Errors
///
/// [`OrderError::ArithmeticOverflow`] if `amount × rate` overflows
pub fn compute_tax(amount: Decimal, rate: Decimal) -> Result<Decimal, OrderError> {
    amount
        .checked_mul(rate)
        .map(|tax| tax.round_dp(TAX_DECIMAL_PLACES))
        .ok_or_else(|| OrderError::arithmetic_overflow("tax"))
}

/// Tax on `amount` at [`DEFAULT_TAX_RATE`]
pub fn compute_tax_default(amount: Decimal) -> Result<Decimal, OrderError> {
    compute_tax(amount, DEFAULT_TAX_RATE)
}
