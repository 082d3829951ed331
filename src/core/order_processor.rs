//! Order processing
//!
//! This module provides the OrderProcessor that orchestrates an order by
//! coordinating the Inventory, the pricing policy and a Payer.
//!
//! Processing happens in two phases:
//!
//! 1. **Quote** (read-only): every line is validated (positive quantity, known
//!    identifier, enough stock for the summed demand) and totals are computed.
//! 2. **Commit**: the payer is charged, then stock is removed for all lines at
//!    once. If the stock commit fails the charge is refunded.
//!
//! A failed order therefore leaves both the inventory and the payer as they were.

use crate::core::inventory::{aggregate, Inventory};
use crate::core::pricing::PricingPolicy;
use crate::core::traits::Payer;
use crate::types::{Order, OrderError, Receipt, ReceiptItem, ReceiptLine};
use chrono::Utc;
use rust_decimal::Decimal;

/// Priced order, not yet charged or committed
#[derive(Debug, Clone, PartialEq)]
pub struct OrderQuote {
    /// Priced lines, in order
    pub lines: Vec<ReceiptLine>,
    /// Sum of all line totals
    pub subtotal: Decimal,
    /// Subtotal after the coupon
    pub discounted: Decimal,
    /// Tax on the discounted amount
    pub tax: Decimal,
    /// Amount charged to the payer
    pub grand_total: Decimal,
}

/// Order processing engine
///
/// Holds the pricing policy; inventory and payer are passed in per call so the
/// caller owns all mutable state.
#[derive(Debug, Clone, Default)]
pub struct OrderProcessor {
    policy: PricingPolicy,
}

impl OrderProcessor {
    /// Create an OrderProcessor with a pricing policy
    pub fn new(policy: PricingPolicy) -> Self {
        OrderProcessor { policy }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Validate an order against the inventory and compute its totals
    ///
    /// Nothing is mutated.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The order has no items
    /// - A line has a zero quantity
    /// - A line names a product that is not in the catalog
    /// - The summed quantity for a product exceeds its stock
    /// - A total overflows
    pub fn quote(&self, order: &Order, inventory: &Inventory) -> Result<OrderQuote, OrderError> {
        if order.items.is_empty() {
            return Err(OrderError::EmptyOrder {
                order_id: order.order_id.clone(),
            });
        }

        for item in &order.items {
            if item.qty == 0 {
                return Err(OrderError::invalid_quantity(&item.sku));
            }
            if !inventory.has_sku(&item.sku) {
                return Err(OrderError::unknown_sku(&item.sku));
            }
        }

        let demand = aggregate(order.items.iter().map(|item| (item.sku.as_str(), item.qty)));
        for (sku, qty) in demand {
            inventory.check_removal(sku, qty)?;
        }

        let lines = price_lines(order, inventory)?;
        let subtotal = sum_lines(&lines)?;
        let discounted = self
            .policy
            .apply_coupon(subtotal, order.coupon_code.as_deref())?;
        let tax = self.policy.compute_tax(discounted)?;
        let grand_total = discounted
            .checked_add(tax)
            .ok_or_else(|| OrderError::arithmetic_overflow("grand total"))?;

        Ok(OrderQuote {
            lines,
            subtotal,
            discounted,
            tax,
            grand_total,
        })
    }

    /// Process an order end to end
    ///
    /// Validates and prices the order, charges `payer` the grand total,
    /// removes the ordered stock and returns the receipt. An order whose grand
    /// total is zero is not charged.
    ///
    /// # Errors
    ///
    /// Any error from [`OrderProcessor::quote`], from charging the payer, or
    /// from committing stock. In every case inventory and payer are unchanged.
    pub fn process<P: Payer + ?Sized>(
        &self,
        order: &Order,
        inventory: &mut Inventory,
        payer: &mut P,
    ) -> Result<Receipt, OrderError> {
        self.process_with(order, inventory, payer, |inventory, removals| {
            inventory.remove_stock_all(removals)
        })
    }

    /// Process an order, removing stock through `commit`
    ///
    /// `commit` must either remove every line or leave the inventory untouched.
    fn process_with<P, C>(
        &self,
        order: &Order,
        inventory: &mut Inventory,
        payer: &mut P,
        commit: C,
    ) -> Result<Receipt, OrderError>
    where
        P: Payer + ?Sized,
        C: FnOnce(&mut Inventory, &[(&str, u32)]) -> Result<(), OrderError>,
    {
        let quote = self.quote(order, inventory)?;

        let charged = quote.grand_total > Decimal::ZERO;
        if charged {
            payer.charge(quote.grand_total)?;
        }

        let removals: Vec<(&str, u32)> = order
            .items
            .iter()
            .map(|item| (item.sku.as_str(), item.qty))
            .collect();

        if let Err(e) = commit(inventory, removals.as_slice()) {
            if charged {
                if let Err(refund_error) = payer.refund(quote.grand_total) {
                    log::error!(
                        "order {}: refund of {} failed: {}",
                        order.order_id,
                        quote.grand_total,
                        refund_error
                    );
                }
            }
            return Err(e);
        }

        log::info!(
            "order {} processed: subtotal {}, discounted {}, tax {}, total {}",
            order.order_id,
            quote.subtotal,
            quote.discounted,
            quote.tax,
            quote.grand_total
        );

        Ok(Receipt {
            order_id: order.order_id.clone(),
            items: order
                .items
                .iter()
                .map(|item| ReceiptItem {
                    sku: item.sku.clone(),
                    qty: item.qty,
                })
                .collect(),
            lines: quote.lines,
            subtotal: quote.subtotal,
            discounted: quote.discounted,
            tax: quote.tax,
            grand_total: quote.grand_total,
            timestamp: Utc::now(),
            coupon_code: order.coupon_code.clone().unwrap_or_default(),
        })
    }
}

/// Sum of quantity × unit price over all order lines
///
/// # Errors
///
/// [`OrderError::UnknownSku`] if a line names a product not in the catalog
pub fn calculate_subtotal(order: &Order, inventory: &Inventory) -> Result<Decimal, OrderError> {
    sum_lines(&price_lines(order, inventory)?)
}

/// Process an order with the default pricing policy
pub fn process_order<P: Payer + ?Sized>(
    order: &Order,
    inventory: &mut Inventory,
    payer: &mut P,
) -> Result<Receipt, OrderError> {
    OrderProcessor::default().process(order, inventory, payer)
}

fn price_lines(order: &Order, inventory: &Inventory) -> Result<Vec<ReceiptLine>, OrderError> {
    order
        .items
        .iter()
        .map(|item| {
            let product = inventory
                .get_product(&item.sku)
                .ok_or_else(|| OrderError::unknown_sku(&item.sku))?;
            let line_total = product
                .price
                .checked_mul(Decimal::from(item.qty))
                .ok_or_else(|| OrderError::arithmetic_overflow("line total"))?;

            Ok(ReceiptLine {
                sku: item.sku.clone(),
                name: product.name.clone(),
                qty: item.qty,
                unit_price: product.price,
                line_total,
            })
        })
        .collect()
}

fn sum_lines(lines: &[ReceiptLine]) -> Result<Decimal, OrderError> {
    lines.iter().try_fold(Decimal::ZERO, |acc, line| {
        acc.checked_add(line.line_total)
            .ok_or_else(|| OrderError::arithmetic_overflow("subtotal"))
    })
}
