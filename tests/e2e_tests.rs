//! End-to-end integration tests
//!
//! These tests validate the complete order pipeline using predefined CSV
//! fixtures. Each test:
//! 1. Reads catalog.csv from a fixture directory
//! 2. Stocks it and processes the sample order through the CLI runner
//! 3. Writes the receipt in CSV format (no timestamp, so output is deterministic)
//! 4. Compares actual output with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - The sample order with the SAVE10 coupon
//! - FLAT50 above and below its minimum subtotal
//! - Catalogs without a header, with blank lines and padded fields

#[cfg(test)]
mod tests {
    use clap::Parser;
    use order_desk::cli::CliArgs;
    use order_desk::runner;
    use rstest::rstest;
    use std::fs;
    use std::path::Path;

    /// Run a fixture by processing catalog.csv and comparing with expected.csv
    ///
    /// # Arguments
    ///
    /// * `fixture_name` - Name of the fixture directory (e.g., "sample_save10")
    /// * `extra_args` - Additional `order` arguments (e.g., a coupon)
    fn run_test_fixture(fixture_name: &str, extra_args: &[&str]) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let catalog_path = format!("{}/catalog.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&catalog_path).exists(),
            "Catalog file not found: {}",
            catalog_path
        );

        let mut argv = vec![
            "order-desk",
            "order",
            "--catalog",
            catalog_path.as_str(),
            "--format",
            "csv",
        ];
        argv.extend_from_slice(extra_args);
        let args = CliArgs::try_parse_from(argv).unwrap();

        let mut output = Vec::new();
        runner::run(&args, &mut output)
            .unwrap_or_else(|e| panic!("Failed to process order: {}", e));

        let actual_output = String::from_utf8(output).expect("Receipt is not UTF-8");
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("sample_save10", &[])]
    #[case("flat50_applied", &["--coupon", "FLAT50"])]
    #[case("flat50_below_threshold", &["--coupon", "flat50"])]
    #[case("headerless_catalog", &["--coupon", "SAVE10"])]
    fn test_fixtures(#[case] fixture: &str, #[case] extra_args: &[&str]) {
        run_test_fixture(fixture, extra_args);
    }

    #[test]
    fn test_missing_catalog_file_fails() {
        let args =
            CliArgs::try_parse_from(["order-desk", "order", "--catalog", "tests/fixtures/nope.csv"])
                .unwrap();

        let err = runner::run(&args, &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "File not found: tests/fixtures/nope.csv");
    }
}
