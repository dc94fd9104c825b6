//! Black-box test of the full demo script: run the same scenario the binary
//! runs, against an in-memory writer, and snapshot the transcript.

use kiosk_cli::demo;

const EXPECTED_TRANSCRIPT: &str = "\
Available Products:
Name: Soda, Price: $1.50
Stock: 20
Name: Chips, Price: $2.00
Stock: 15
Name: Candy, Price: $0.75
Stock: 30
Sold 5 of Soda.
Insufficient stock for Chips.
Available Products:
Name: Soda, Price: $1.50
Stock: 15
Name: Chips, Price: $2.00
Stock: 15
Name: Candy, Price: $0.75
Stock: 30
Welcome to the kiosk!
Products available (Count: 3)
Discounted price: $1.80
";

#[test]
fn demo_transcript_matches_and_failure_is_the_stock_check() {
    let mut out = Vec::new();
    let err = demo::run(&mut out).expect_err("the closing stock check fails by design");

    assert_eq!(err.to_string(), "validation failed: stock cannot be negative");
    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED_TRANSCRIPT);
}

#[test]
fn demo_failure_downcasts_to_the_domain_error() {
    let mut out = Vec::new();
    let err = demo::run(&mut out).expect_err("the closing stock check fails by design");

    match err.downcast_ref::<kiosk_core::DomainError>() {
        Some(kiosk_core::DomainError::Validation(_)) => {}
        other => panic!("expected a Validation domain error, got {other:?}"),
    }
}
