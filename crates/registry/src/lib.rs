//! Kiosk registry module.
//!
//! Owns the ordered collection of stocked entries and routes name-based
//! sales to them.

pub mod registry;

pub use registry::{Kiosk, SaleOutcome};
