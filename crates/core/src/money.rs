//! Money as an integer amount of the smallest currency unit (cents).
//!
//! Prices are never floats; arithmetic happens on `i64` cents and display
//! formatting produces the familiar `$d.cc` form.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// An amount of money in cents.
///
/// Negative amounts are representable (an over-applied discount can produce
/// one) and render with a leading minus sign.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_dollars_and_cents() {
        assert_eq!(Money::from_cents(150).to_string(), "$1.50");
        assert_eq!(Money::from_cents(200).to_string(), "$2.00");
        assert_eq!(Money::from_cents(75).to_string(), "$0.75");
    }

    #[test]
    fn display_zero_pads_the_cents_column() {
        assert_eq!(Money::from_cents(105).to_string(), "$1.05");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn display_renders_negative_amounts_with_a_leading_sign() {
        assert_eq!(Money::from_cents(-100).to_string(), "-$1.00");
        assert_eq!(Money::from_cents(-5).to_string(), "-$0.05");
    }
}
