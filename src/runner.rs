//! Command execution
//!
//! Maps parsed CLI arguments onto the library: the `order` command builds an
//! inventory from a catalog, stocks it, processes the sample order and writes
//! the receipt; the `calc` command runs one calculator helper.
//!
//! Output goes to the writer passed in so both commands can be tested
//! against an in-memory buffer.

use crate::calculator;
use crate::cli::{CalcOp, CliArgs, Command, OrderArgs, OutputFormat};
use crate::core::bank_account::parse_amount;
use crate::core::{BankAccount, Inventory, OrderProcessor};
use crate::io::{parse_products_csv, read_catalog, write_receipt_csv, write_receipt_json};
use crate::types::{Order, OrderError, OrderItem, Receipt};
use std::io::Write;

/// Catalog used when no `--catalog` file is given
pub const SAMPLE_CATALOG: &str = "sku,name,price,category
SKU1,Pen,10.5,stationery
SKU2,Book,99.0,books
";

/// Initial stock applied to the catalog, for products it contains
pub const SAMPLE_STOCK: [(&str, u32); 2] = [("SKU1", 10), ("SKU2", 5)];

/// The order processed by the `order` command
pub fn sample_order(coupon: Option<&str>) -> Order {
    let order = Order::new(
        "ORD-001",
        vec![OrderItem::new("SKU1", 2), OrderItem::new("SKU2", 1)],
    );
    match coupon {
        Some(code) => order.with_coupon(code),
        None => order,
    }
}

/// Execute a parsed command, writing its result to `output`
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), OrderError> {
    match &args.command {
        Command::Order(order_args) => run_order(order_args, output).map(|_| ()),
        Command::Calc { op } => run_calc(op, output),
    }
}

/// Process the sample order and write its receipt
pub fn run_order(args: &OrderArgs, output: &mut dyn Write) -> Result<Receipt, OrderError> {
    let products = match &args.catalog {
        Some(path) => read_catalog(path)?,
        None => parse_products_csv(SAMPLE_CATALOG)?,
    };

    let mut inventory = Inventory::from_products(products);
    for (sku, qty) in SAMPLE_STOCK {
        if inventory.has_sku(sku) {
            inventory.add_stock(sku, qty)?;
        } else {
            log::warn!("catalog has no {}, skipping initial stock", sku);
        }
    }

    let balance = parse_amount(&args.balance)?;
    let mut account = BankAccount::with_balance(args.owner.as_str(), balance)?;

    let processor = OrderProcessor::new(args.to_pricing_policy());
    let order = sample_order(args.coupon_code());
    let receipt = processor.process(&order, &mut inventory, &mut account)?;

    log::info!(
        "account {} balance after order: {}",
        account.owner(),
        account.balance()
    );

    match args.format {
        OutputFormat::Json => write_receipt_json(&receipt, output)?,
        OutputFormat::Csv => write_receipt_csv(&receipt, output)?,
    }

    Ok(receipt)
}

/// Run one calculator helper and print its result
pub fn run_calc(op: &CalcOp, output: &mut dyn Write) -> Result<(), OrderError> {
    match op {
        CalcOp::Add { a, b } => writeln!(output, "{}", calculator::add(*a, *b)?)?,
        CalcOp::Divide { a, b } => writeln!(output, "{}", calculator::divide(*a, *b)?)?,
        CalcOp::IsEven { n } => writeln!(output, "{}", calculator::is_even(*n))?,
        CalcOp::Palindrome { text } => writeln!(output, "{}", calculator::is_palindrome(text))?,
        CalcOp::WordCount { text } => writeln!(output, "{}", calculator::word_count(text))?,
    }
    Ok(())
}
