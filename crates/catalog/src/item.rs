use serde::{Deserialize, Serialize};

use kiosk_core::Money;

/// Listing surface shared by every entry kind.
///
/// The closed set of implementors is {`CatalogEntry`, `StockedEntry`}; the
/// stocked variant delegates to the base summary and appends its stock line.
pub trait Describe {
    /// Append this entry's listing lines to `out` (one `\n`-terminated line
    /// per field group).
    fn describe(&self, out: &mut String);

    /// Convenience: the listing lines as an owned string.
    fn description(&self) -> String {
        let mut out = String::new();
        self.describe(&mut out);
        out
    }
}

/// A named, priced entry — the base record for anything sellable.
///
/// The name is immutable after construction and identifies the entry within
/// a registry (by convention; duplicates are not rejected structurally).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    name: String,
    price: Money,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

impl Describe for CatalogEntry {
    fn describe(&self, out: &mut String) {
        use core::fmt::Write;
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Name: {}, Price: {}", self.name, self.price);
    }
}

/// A catalog entry with an on-hand stock count.
///
/// Stock is intended to stay non-negative but only `sell` guards that;
/// `restock` is deliberately unconditional (a negative delta reduces stock).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockedEntry {
    entry: CatalogEntry,
    stock: i64,
}

impl StockedEntry {
    pub fn new(name: impl Into<String>, price: Money, stock: i64) -> Self {
        Self {
            entry: CatalogEntry::new(name, price),
            stock,
        }
    }

    pub fn name(&self) -> &str {
        self.entry.name()
    }

    pub fn price(&self) -> Money {
        self.entry.price()
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// Adjust stock by `delta`, unconditionally.
    pub fn restock(&mut self, delta: i64) {
        self.stock += delta;
        tracing::debug!(name = self.name(), delta, stock = self.stock, "restocked");
    }

    /// Attempt to sell `quantity` units.
    ///
    /// Returns `true` and decrements stock when `quantity <= stock`;
    /// otherwise returns `false` and leaves stock untouched. Insufficient
    /// stock is an expected outcome here, not an error.
    pub fn sell(&mut self, quantity: i64) -> bool {
        if quantity <= self.stock {
            self.stock -= quantity;
            tracing::debug!(name = self.name(), quantity, stock = self.stock, "sold");
            true
        } else {
            false
        }
    }
}

impl Describe for StockedEntry {
    fn describe(&self, out: &mut String) {
        use core::fmt::Write;
        self.entry.describe(out);
        let _ = writeln!(out, "Stock: {}", self.stock);
    }
}
