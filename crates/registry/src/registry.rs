use serde::{Deserialize, Serialize};

use kiosk_catalog::{Describe, StockedEntry};

/// Outcome of a sale routed through the registry.
///
/// The three cases are distinguishable by callers; rendering them as user
/// messages is the binary's concern.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum SaleOutcome {
    /// The sale went through; `remaining` is the stock left afterwards.
    Sold { remaining: i64 },
    /// Not enough stock; `available` is the untouched stock level.
    InsufficientStock { available: i64 },
    /// No entry with the requested name exists.
    NotFound,
}

/// The kiosk: an ordered, by-value collection of stocked entries.
///
/// Insertion order is display order. Duplicate names are permitted; every
/// name-based operation resolves to the first match, so later duplicates are
/// unreachable by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kiosk {
    entries: Vec<StockedEntry>,
}

impl Kiosk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Always succeeds; no uniqueness enforcement.
    pub fn add(&mut self, entry: StockedEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[StockedEntry] {
        &self.entries
    }

    /// Render every entry's description in insertion order.
    ///
    /// Pure: repeat calls produce the same text until the kiosk mutates.
    pub fn listing(&self) -> String {
        let mut out = String::from("Available Products:\n");
        for entry in &self.entries {
            entry.describe(&mut out);
        }
        out
    }

    /// Sell `quantity` units of the first entry named `name`.
    ///
    /// Linear first-match scan; O(n) in registry size, which is fine for a
    /// single-actor in-memory kiosk.
    pub fn sell_by_name(&mut self, name: &str, quantity: i64) -> SaleOutcome {
        for entry in &mut self.entries {
            if entry.name() == name {
                return if entry.sell(quantity) {
                    SaleOutcome::Sold {
                        remaining: entry.stock(),
                    }
                } else {
                    tracing::debug!(name, quantity, available = entry.stock(), "insufficient stock");
                    SaleOutcome::InsufficientStock {
                        available: entry.stock(),
                    }
                };
            }
        }
        tracing::debug!(name, "entry not found");
        SaleOutcome::NotFound
    }
}
