//! `kiosk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no infrastructure
//! concerns): the error model, the money value object, and the value-object
//! marker trait shared by the catalog types.

pub mod error;
pub mod money;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use money::Money;
pub use value_object::ValueObject;
