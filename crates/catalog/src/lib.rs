//! Catalog domain module.
//!
//! This crate contains the sellable-entry model for the kiosk, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod item;
pub mod pricing;
pub mod stock;

pub use item::{CatalogEntry, Describe, StockedEntry};
pub use pricing::Discount;
pub use stock::check_stock;
