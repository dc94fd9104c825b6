use serde::{Deserialize, Serialize};

use kiosk_core::{Money, ValueObject};

/// A fixed percentage discount applicable to any price.
///
/// The percentage range is not validated: values below 0 raise the price and
/// values above 100 drive it negative. Callers wanting bounds enforce them.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    percent: f64,
}

impl Discount {
    pub fn new(percent: f64) -> Self {
        Self { percent }
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// `price - price * percent / 100`, on cents, rounded half away from zero.
    pub fn apply(&self, price: Money) -> Money {
        let reduction = (price.cents() as f64 * self.percent / 100.0).round() as i64;
        Money::from_cents(price.cents() - reduction)
    }
}

impl ValueObject for Discount {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_percent_off_two_dollars_is_one_eighty() {
        let discount = Discount::new(10.0);
        assert_eq!(discount.apply(Money::from_cents(200)), Money::from_cents(180));
    }

    #[test]
    fn zero_percent_is_identity() {
        let discount = Discount::new(0.0);
        assert_eq!(discount.apply(Money::from_cents(150)), Money::from_cents(150));
    }

    #[test]
    fn full_discount_reduces_to_zero() {
        let discount = Discount::new(100.0);
        assert_eq!(discount.apply(Money::from_cents(75)), Money::ZERO);
    }

    #[test]
    fn percent_above_one_hundred_goes_negative() {
        // Permissive on purpose: the range is not validated.
        let discount = Discount::new(150.0);
        assert_eq!(discount.apply(Money::from_cents(200)), Money::from_cents(-100));
    }

    #[test]
    fn negative_percent_raises_the_price() {
        let discount = Discount::new(-10.0);
        assert_eq!(discount.apply(Money::from_cents(200)), Money::from_cents(220));
    }
}
