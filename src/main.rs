//! Order Desk CLI
//!
//! Command-line interface for the order desk library.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- order
//! cargo run -- order --catalog products.csv --balance 1000 --coupon FLAT50
//! cargo run -- order --no-coupon --tax-rate 0.05 --format csv
//! cargo run -- calc divide 10 4
//! RUST_LOG=debug cargo run -- order
//! ```
//!
//! The `order` command loads the catalog (the built-in sample when no file
//! is given), stocks it, processes the sample order and prints the receipt
//! to stdout.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed catalog, insufficient funds or stock, etc.)

use order_desk::cli;
use order_desk::runner;
use std::process;

fn main() {
    // Initialize logger (respect RUST_LOG env var if set)
    env_logger::init();

    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = runner::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
