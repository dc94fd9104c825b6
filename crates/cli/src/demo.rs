//! The scripted kiosk walkthrough.
//!
//! A linear, single-actor scenario: seed the kiosk, list it, sell twice
//! (one success, one insufficient-stock), re-list, show the two message
//! variants, apply a discount, and finish with a stock check that fails by
//! design so the caller's boundary handler has something to recover.

use std::io::{self, Write};

use anyhow::Result;

use kiosk_catalog::{check_stock, Discount, StockedEntry};
use kiosk_core::Money;
use kiosk_registry::{Kiosk, SaleOutcome};

/// Print a bare message line.
pub fn display_message(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{message}")
}

/// Print a message line with a parenthesized count appended.
pub fn display_message_with_count(
    out: &mut impl Write,
    message: &str,
    count: usize,
) -> io::Result<()> {
    writeln!(out, "{message} (Count: {count})")
}

/// Render a sale outcome in the kiosk's user-facing wording.
pub fn report_sale(
    out: &mut impl Write,
    name: &str,
    quantity: i64,
    outcome: SaleOutcome,
) -> io::Result<()> {
    match outcome {
        SaleOutcome::Sold { .. } => writeln!(out, "Sold {quantity} of {name}."),
        SaleOutcome::InsufficientStock { .. } => writeln!(out, "Insufficient stock for {name}."),
        SaleOutcome::NotFound => writeln!(out, "Product {name} not found."),
    }
}

/// Run the demo scenario, writing the transcript to `out`.
///
/// The trailing `check_stock(-5)` call fails deliberately; its error
/// propagates to the caller, which is expected to recover it.
pub fn run(out: &mut impl Write) -> Result<()> {
    let mut kiosk = Kiosk::new();
    kiosk.add(StockedEntry::new("Soda", Money::from_cents(150), 20));
    kiosk.add(StockedEntry::new("Chips", Money::from_cents(200), 15));
    kiosk.add(StockedEntry::new("Candy", Money::from_cents(75), 30));

    write!(out, "{}", kiosk.listing())?;

    let outcome = kiosk.sell_by_name("Soda", 5);
    report_sale(out, "Soda", 5, outcome)?;
    let outcome = kiosk.sell_by_name("Chips", 20);
    report_sale(out, "Chips", 20, outcome)?;

    write!(out, "{}", kiosk.listing())?;

    display_message(out, "Welcome to the kiosk!")?;
    display_message_with_count(out, "Products available", kiosk.entries().len())?;

    let discount = Discount::new(10.0);
    let discounted = discount.apply(Money::from_cents(200));
    writeln!(out, "Discounted price: {discounted}")?;

    check_stock(-5)?;
    Ok(())
}
