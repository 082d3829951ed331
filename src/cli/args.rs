use crate::core::PricingPolicy;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Process toy retail orders and run small calculator helpers
#[derive(Parser, Debug)]
#[command(name = "order-desk")]
#[command(about = "Process toy retail orders against an in-memory inventory", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a catalog, stock it and process the sample order
    Order(OrderArgs),

    /// Arithmetic and text helpers
    Calc {
        #[command(subcommand)]
        op: CalcOp,
    },
}

#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Catalog CSV file (defaults to the built-in sample catalog)
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Name of the paying account's owner
    #[arg(long = "owner", value_name = "NAME", default_value = "Shaik")]
    pub owner: String,

    /// Opening balance of the paying account
    #[arg(long = "balance", value_name = "AMOUNT", default_value = "500")]
    pub balance: String,

    /// Coupon code applied to the sample order
    #[arg(
        long = "coupon",
        value_name = "CODE",
        default_value = "SAVE10",
        conflicts_with = "no_coupon"
    )]
    pub coupon: String,

    /// Process the sample order without a coupon
    #[arg(long = "no-coupon")]
    pub no_coupon: bool,

    /// Tax rate as a fraction (default: 0.18, range: 0-1)
    #[arg(long = "tax-rate", value_name = "RATE")]
    pub tax_rate: Option<Decimal>,

    /// Receipt output format
    #[arg(long = "format", value_name = "FORMAT", default_value = "json")]
    pub format: OutputFormat,
}

/// Available receipt output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum CalcOp {
    /// Sum of two numbers
    Add {
        #[arg(allow_hyphen_values = true)]
        a: Decimal,
        #[arg(allow_hyphen_values = true)]
        b: Decimal,
    },
    /// Quotient of two numbers
    Divide {
        #[arg(allow_hyphen_values = true)]
        a: Decimal,
        #[arg(allow_hyphen_values = true)]
        b: Decimal,
    },
    /// Whether an integer is even
    IsEven {
        #[arg(allow_hyphen_values = true)]
        n: i64,
    },
    /// Whether text is a palindrome, ignoring spaces and case
    Palindrome { text: String },
    /// Number of words in a sentence
    WordCount { text: String },
}

impl OrderArgs {
    /// Create a PricingPolicy from CLI arguments
    ///
    /// Falls back to the default policy when no tax rate is given; an
    /// out-of-range rate is replaced by the default with a warning.
    pub fn to_pricing_policy(&self) -> PricingPolicy {
        match self.tax_rate {
            Some(rate) => PricingPolicy::with_tax_rate(rate),
            None => PricingPolicy::default(),
        }
    }

    /// Coupon code to apply, if any
    pub fn coupon_code(&self) -> Option<&str> {
        if self.no_coupon || self.coupon.trim().is_empty() {
            None
        } else {
            Some(self.coupon.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_TAX_RATE;
    use rstest::rstest;

    fn order_args(args: &[&str]) -> OrderArgs {
        match CliArgs::try_parse_from(args).unwrap().command {
            Command::Order(order) => order,
            other => panic!("Expected order command, got {:?}", other),
        }
    }

    #[test]
    fn test_order_defaults() {
        let args = order_args(&["program", "order"]);

        assert_eq!(args.catalog, None);
        assert_eq!(args.owner, "Shaik");
        assert_eq!(args.balance, "500");
        assert_eq!(args.coupon_code(), Some("SAVE10"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.to_pricing_policy(), PricingPolicy::default());
    }

    #[rstest]
    #[case::catalog(&["program", "order", "--catalog", "items.csv"], Some(PathBuf::from("items.csv")))]
    #[case::no_catalog(&["program", "order"], None)]
    fn test_catalog_option(#[case] args: &[&str], #[case] expected: Option<PathBuf>) {
        assert_eq!(order_args(args).catalog, expected);
    }

    #[rstest]
    #[case::custom(&["program", "order", "--coupon", "FLAT50"], Some("FLAT50"))]
    #[case::disabled(&["program", "order", "--no-coupon"], None)]
    #[case::empty(&["program", "order", "--coupon", ""], None)]
    fn test_coupon_option(#[case] args: &[&str], #[case] expected: Option<&str>) {
        assert_eq!(order_args(args).coupon_code(), expected);
    }

    // Tax rate conversion, out-of-range values fall back to the default
    #[rstest]
    #[case::valid(&["program", "order", "--tax-rate", "0.05"], Decimal::new(5, 2))]
    #[case::zero(&["program", "order", "--tax-rate", "0"], Decimal::ZERO)]
    #[case::too_high(&["program", "order", "--tax-rate", "2"], DEFAULT_TAX_RATE)]
    fn test_pricing_policy_conversion(#[case] args: &[&str], #[case] expected: Decimal) {
        assert_eq!(order_args(args).to_pricing_policy().tax_rate, expected);
    }

    #[rstest]
    #[case::add(&["program", "calc", "add", "2", "3"], CalcOp::Add { a: Decimal::new(2, 0), b: Decimal::new(3, 0) })]
    #[case::negative(&["program", "calc", "add", "-2", "3.5"], CalcOp::Add { a: Decimal::new(-2, 0), b: Decimal::new(35, 1) })]
    #[case::is_even(&["program", "calc", "is-even", "6"], CalcOp::IsEven { n: 6 })]
    #[case::palindrome(&["program", "calc", "palindrome", "Race car"], CalcOp::Palindrome { text: "Race car".to_string() })]
    fn test_calc_parsing(#[case] args: &[&str], #[case] expected: CalcOp) {
        match CliArgs::try_parse_from(args).unwrap().command {
            Command::Calc { op } => assert_eq!(op, expected),
            other => panic!("Expected calc command, got {:?}", other),
        }
    }

    // Error handling tests
    #[rstest]
    #[case::missing_command(&["program"])]
    #[case::invalid_format(&["program", "order", "--format", "xml"])]
    #[case::invalid_tax_rate(&["program", "order", "--tax-rate", "abc"])]
    #[case::coupon_conflict(&["program", "order", "--coupon", "SAVE10", "--no-coupon"])]
    #[case::calc_missing_operand(&["program", "calc", "divide", "1"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
