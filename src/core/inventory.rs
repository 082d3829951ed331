//! Inventory management module
//!
//! This module provides the `Inventory` struct which owns the product catalog
//! and the stock count for each product.
//!
//! The Inventory is responsible for:
//! - Registering products in the catalog (with zero initial stock)
//! - Tracking stock counts and rejecting removals that would go negative
//! - Price lookups for order pricing
//! - Committing a whole order's stock removal atomically
//!
//! Identifiers are matched exactly everywhere; there is no case folding.

use crate::types::{OrderError, Product, Sku};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Product catalog plus stock counts
///
/// Every identifier that has a stock entry also has a catalog entry: stock
/// can only be added for known products.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    /// Map of identifier to stock count
    stock: HashMap<Sku, u32>,

    /// Map of identifier to catalog entry
    catalog: HashMap<Sku, Product>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Inventory {
            stock: HashMap::new(),
            catalog: HashMap::new(),
        }
    }

    /// Build an inventory from a list of products, all with zero stock
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut inventory = Self::new();
        for product in products {
            inventory.add_product(product);
        }
        inventory
    }

    /// Add or replace a catalog entry
    ///
    /// A new product starts with zero stock. Replacing an existing product
    /// keeps its current stock count.
    pub fn add_product(&mut self, product: Product) {
        log::debug!("catalog: adding {} ({})", product.sku, product.name);
        self.stock.entry(product.sku.clone()).or_insert(0);
        self.catalog.insert(product.sku.clone(), product);
    }

    /// Increase stock for a known product
    ///
    /// # Errors
    ///
    /// - [`OrderError::InvalidQuantity`] if `qty` is zero
    /// - [`OrderError::UnknownSku`] if the product is not in the catalog
    /// - [`OrderError::ArithmeticOverflow`] if the count would exceed `u32::MAX`
    pub fn add_stock(&mut self, sku: &str, qty: u32) -> Result<(), OrderError> {
        if qty == 0 {
            return Err(OrderError::invalid_quantity(sku));
        }
        if !self.has_sku(sku) {
            return Err(OrderError::unknown_sku(sku));
        }

        let current = self.get_stock(sku);
        let new_stock = current
            .checked_add(qty)
            .ok_or_else(|| OrderError::arithmetic_overflow("add_stock"))?;

        self.stock.insert(sku.to_string(), new_stock);
        log::debug!("stock: {} {} -> {}", sku, current, new_stock);
        Ok(())
    }

    /// Current stock count, zero for unknown identifiers
    pub fn get_stock(&self, sku: &str) -> u32 {
        self.stock.get(sku).copied().unwrap_or(0)
    }

    /// Decrease stock
    ///
    /// # Errors
    ///
    /// - [`OrderError::InvalidQuantity`] if `qty` is zero
    /// - [`OrderError::InsufficientStock`] if `qty` exceeds the current count
    pub fn remove_stock(&mut self, sku: &str, qty: u32) -> Result<(), OrderError> {
        self.check_removal(sku, u64::from(qty))?;

        let current = self.get_stock(sku);
        self.stock.insert(sku.to_string(), current - qty);
        log::debug!("stock: {} {} -> {}", sku, current, current - qty);
        Ok(())
    }

    /// Decrease stock for several products, all or nothing
    ///
    /// Every removal is checked before any count changes. Quantities for the
    /// same identifier are summed, so `[("A", 6), ("A", 6)]` needs 12 in stock.
    pub fn remove_stock_all(&mut self, removals: &[(&str, u32)]) -> Result<(), OrderError> {
        let demand = aggregate(removals.iter().copied());
        for (sku, qty) in &demand {
            self.check_removal(sku, *qty)?;
        }

        for (sku, qty) in demand {
            // checked above: qty <= current stock, which fits in u32
            let current = self.get_stock(sku);
            let remaining = current - qty as u32;
            self.stock.insert(sku.to_string(), remaining);
            log::debug!("stock: {} {} -> {}", sku, current, remaining);
        }
        Ok(())
    }

    /// Check that `qty` units can be removed without mutating anything
    pub fn check_removal(&self, sku: &str, qty: u64) -> Result<(), OrderError> {
        if qty == 0 {
            return Err(OrderError::invalid_quantity(sku));
        }
        let available = self.get_stock(sku);
        if u64::from(available) < qty {
            return Err(OrderError::insufficient_stock(sku, available, qty));
        }
        Ok(())
    }

    /// Catalog price of a product
    ///
    /// # Errors
    ///
    /// [`OrderError::UnknownSku`] if the product is not in the catalog
    pub fn get_price(&self, sku: &str) -> Result<Decimal, OrderError> {
        self.catalog
            .get(sku)
            .map(|product| product.price)
            .ok_or_else(|| OrderError::unknown_sku(sku))
    }

    /// Catalog entry of a product, if present
    pub fn get_product(&self, sku: &str) -> Option<&Product> {
        self.catalog.get(sku)
    }

    /// Whether the product is in the catalog
    pub fn has_sku(&self, sku: &str) -> bool {
        self.catalog.contains_key(sku)
    }

    /// All catalog entries sorted by identifier
    pub fn products(&self) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.catalog.values().collect();
        products.sort_by(|a, b| a.sku.cmp(&b.sku));
        products
    }
}

/// Sum quantities per identifier, keeping first-seen order
pub(crate) fn aggregate<'a>(lines: impl IntoIterator<Item = (&'a str, u32)>) -> Vec<(&'a str, u64)> {
    let mut demand: Vec<(&str, u64)> = Vec::new();
    for (sku, qty) in lines {
        match demand.iter_mut().find(|(seen, _)| *seen == sku) {
            Some((_, total)) => *total += u64::from(qty),
            None => demand.push((sku, u64::from(qty))),
        }
    }
    demand
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;
    use rstest::rstest;

    fn pen() -> Product {
        Product::new("SKU1", "Pen", Decimal::new(5, 0))
    }

    fn inventory_with_pen(stock: u32) -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add_product(pen());
        if stock > 0 {
            inventory.add_stock("SKU1", stock).unwrap();
        }
        inventory
    }

    #[test]
    fn test_new_creates_empty_inventory() {
        let inventory = Inventory::new();
        assert!(inventory.products().is_empty());
        assert_eq!(inventory.get_stock("SKU1"), 0);
    }

    #[test]
    fn test_add_product_initializes_zero_stock() {
        let inventory = inventory_with_pen(0);
        assert!(inventory.has_sku("SKU1"));
        assert_eq!(inventory.stock.get("SKU1"), Some(&0));
    }

    #[test]
    fn test_add_product_again_keeps_stock() {
        let mut inventory = inventory_with_pen(4);
        inventory.add_product(Product::new("SKU1", "Pen v2", Decimal::new(6, 0)));

        assert_eq!(inventory.get_stock("SKU1"), 4);
        assert_eq!(inventory.get_price("SKU1").unwrap(), Decimal::new(6, 0));
    }

    #[test]
    fn test_add_stock_accumulates_instead_of_overwriting() {
        let mut inventory = inventory_with_pen(0);

        inventory.add_stock("SKU1", 2).unwrap();
        inventory.add_stock("SKU1", 3).unwrap();

        assert_eq!(inventory.get_stock("SKU1"), 5);
    }

    #[rstest]
    #[case::zero_qty("SKU1", 0, ErrorKind::Value)]
    #[case::unknown_sku("UNKNOWN", 1, ErrorKind::Lookup)]
    fn test_add_stock_validations(#[case] sku: &str, #[case] qty: u32, #[case] kind: ErrorKind) {
        let mut inventory = inventory_with_pen(0);

        let err = inventory.add_stock(sku, qty).unwrap_err();
        assert_eq!(err.kind(), kind);
    }

    #[test]
    fn test_add_stock_overflow() {
        let mut inventory = inventory_with_pen(u32::MAX);

        let err = inventory.add_stock("SKU1", 1).unwrap_err();
        assert!(matches!(err, OrderError::ArithmeticOverflow { .. }));
        assert_eq!(inventory.get_stock("SKU1"), u32::MAX);
    }

    #[test]
    fn test_remove_stock_blocks_if_insufficient() {
        let mut inventory = inventory_with_pen(1);

        let err = inventory.remove_stock("SKU1", 2).unwrap_err();
        assert_eq!(err, OrderError::insufficient_stock("SKU1", 1, 2));
        assert_eq!(inventory.get_stock("SKU1"), 1);
    }

    #[test]
    fn test_remove_stock_invalid_qty() {
        let mut inventory = inventory_with_pen(1);

        let err = inventory.remove_stock("SKU1", 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_remove_stock_down_to_zero() {
        let mut inventory = inventory_with_pen(3);

        inventory.remove_stock("SKU1", 3).unwrap();
        assert_eq!(inventory.get_stock("SKU1"), 0);
    }

    #[test]
    fn test_remove_stock_all_is_atomic() {
        let mut inventory = inventory_with_pen(10);
        inventory.add_product(Product::new("SKU2", "Book", Decimal::new(99, 0)));
        inventory.add_stock("SKU2", 1).unwrap();

        let err = inventory
            .remove_stock_all(&[("SKU1", 2), ("SKU2", 5)])
            .unwrap_err();

        assert!(matches!(err, OrderError::InsufficientStock { .. }));
        assert_eq!(inventory.get_stock("SKU1"), 10);
        assert_eq!(inventory.get_stock("SKU2"), 1);
    }

    #[test]
    fn test_remove_stock_all_sums_duplicate_lines() {
        let mut inventory = inventory_with_pen(10);

        let err = inventory
            .remove_stock_all(&[("SKU1", 6), ("SKU1", 6)])
            .unwrap_err();
        assert_eq!(err, OrderError::insufficient_stock("SKU1", 10, 12));

        inventory
            .remove_stock_all(&[("SKU1", 4), ("SKU1", 6)])
            .unwrap();
        assert_eq!(inventory.get_stock("SKU1"), 0);
    }

    #[test]
    fn test_get_price_is_case_sensitive() {
        let inventory = inventory_with_pen(0);

        assert_eq!(inventory.get_price("SKU1").unwrap(), Decimal::new(5, 0));
        let err = inventory.get_price("sku1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert!(!inventory.has_sku("sku1"));
    }

    #[test]
    fn test_products_sorted_by_sku() {
        let inventory = Inventory::from_products([
            Product::new("SKU3", "C", Decimal::ONE),
            Product::new("SKU1", "A", Decimal::ONE),
            Product::new("SKU2", "B", Decimal::ONE),
        ]);

        let skus: Vec<&str> = inventory.products().iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["SKU1", "SKU2", "SKU3"]);
        assert_eq!(inventory.get_stock("SKU3"), 0);
    }

    #[test]
    fn test_aggregate_keeps_first_seen_order() {
        let demand = aggregate([("B", 1), ("A", 2), ("B", 3)]);
        assert_eq!(demand, vec![("B", 4), ("A", 2)]);
    }
}
