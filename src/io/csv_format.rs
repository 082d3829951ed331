//! CSV format handling for the product catalog and receipt output
//!
//! This module centralizes all text format concerns, providing:
//! - Catalog parsing from CSV-like text into [`Product`] records
//! - Receipt serialization as JSON or as a CSV line table
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{OrderError, Product, Receipt, DEFAULT_CATEGORY};
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;

/// Columns a header row must start with (compared lowercased)
const HEADER_PREFIX: [&str; 3] = ["sku", "name", "price"];

/// Parse catalog text into products
///
/// Expected format (header optional):
///
/// ```text
/// sku,name,price,category
/// SKU1,Pen,10.5,stationery
/// SKU2,Book,99.0,books
/// ```
///
/// Blank and whitespace-only lines are skipped. The first remaining line is
/// treated as a header when its first three fields are `sku`, `name`, `price`
/// (case-insensitive). The category column is optional and defaults to
/// `"general"`.
///
/// # Errors
///
/// - [`OrderError::MalformedRow`] for a row with fewer than three fields
/// - [`OrderError::InvalidPrice`] for a price that is not a non-negative decimal
///
/// # Examples
///
/// ```
/// use order_desk::io::parse_products_csv;
///
/// let products = parse_products_csv("sku,name,price\nSKU1,Pen,10.5\n").unwrap();
/// assert_eq!(products.len(), 1);
/// assert_eq!(products[0].category, "general");
/// ```
pub fn parse_products_csv(text: &str) -> Result<Vec<Product>, OrderError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut products = Vec::new();
    let mut first_row = true;

    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }

        if std::mem::take(&mut first_row) && is_header(&record) {
            continue;
        }

        let line = record.position().map(|pos| pos.line());
        products.push(convert_product_record(&record, line)?);
    }

    log::debug!("parsed {} products from catalog text", products.len());
    Ok(products)
}

fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].is_empty()
}

fn is_header(record: &StringRecord) -> bool {
    record.len() >= HEADER_PREFIX.len()
        && record
            .iter()
            .zip(HEADER_PREFIX)
            .all(|(field, expected)| field.to_lowercase() == expected)
}

/// Convert one catalog row into a Product
fn convert_product_record(record: &StringRecord, line: Option<u64>) -> Result<Product, OrderError> {
    if record.len() < 3 {
        let row: Vec<&str> = record.iter().collect();
        return Err(OrderError::malformed_row(line, &row.join(",")));
    }

    let sku = &record[0];
    let price_raw = &record[2];
    let price = Decimal::from_str(price_raw)
        .or_else(|_| Decimal::from_scientific(price_raw))
        .ok()
        .filter(|price| !price.is_sign_negative())
        .ok_or_else(|| OrderError::InvalidPrice {
            sku: sku.to_string(),
            price: price_raw.to_string(),
        })?;

    let category = match record.get(3) {
        Some(category) if !category.is_empty() => category,
        _ => DEFAULT_CATEGORY,
    };

    Ok(Product::new(sku, &record[1], price).with_category(category))
}

/// Write a receipt as pretty-printed JSON
///
/// The output is a single JSON object with the receipt fields as keys.
pub fn write_receipt_json(receipt: &Receipt, output: &mut dyn Write) -> Result<(), OrderError> {
    serde_json::to_writer_pretty(&mut *output, receipt).map_err(|e| OrderError::IoError {
        message: format!("Failed to write receipt: {}", e),
    })?;
    writeln!(output)?;
    Ok(())
}

/// Write a receipt as a CSV line table followed by summary rows
///
/// ```text
/// sku,name,qty,unit_price,line_total
/// SKU1,Pen,2,10.50,21.00
/// subtotal,,,,21.00
/// ...
/// ```
pub fn write_receipt_csv(receipt: &Receipt, output: &mut dyn Write) -> Result<(), OrderError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["sku", "name", "qty", "unit_price", "line_total"])?;

    for line in &receipt.lines {
        writer.write_record(&[
            line.sku.clone(),
            line.name.clone(),
            line.qty.to_string(),
            format!("{:.2}", line.unit_price),
            format!("{:.2}", line.line_total),
        ])?;
    }

    for (label, amount) in [
        ("subtotal", receipt.subtotal),
        ("discounted", receipt.discounted),
        ("tax", receipt.tax),
        ("grand_total", receipt.grand_total),
    ] {
        let amount = format!("{:.2}", amount);
        writer.write_record([label, "", "", "", amount.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}
