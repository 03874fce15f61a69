//! Monetary amounts backed by decimal arithmetic.
//!
//! All price paths in Mercato use [`Money`] - never floating point. The type
//! is a thin serde-transparent wrapper around [`Decimal`] so snapshots stay
//! compact and arithmetic stays exact.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the store currency's standard unit (dollars, not cents).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default, Hash,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new amount from a raw decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create an amount from whole currency units (e.g., `5` -> $5.00).
    #[must_use]
    pub fn from_major(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create an amount from the smallest currency unit (e.g., `1099` -> $10.99).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The underlying decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether this amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Multiply by a fractional rate (e.g., a tax rate of `0.05`).
    #[must_use]
    pub fn times(&self, rate: Decimal) -> Self {
        Self(self.0 * rate)
    }

    /// Subtract, flooring at zero.
    ///
    /// This is the central enforcement of the non-negative total: a discount
    /// larger than the remaining balance can never drive an amount negative.
    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        if other.0 >= self.0 {
            Self::ZERO
        } else {
            Self(self.0 - other.0)
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        assert_eq!(Money::from_cents(1099).amount(), Decimal::new(1099, 2));
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(5).amount(), Decimal::from(5));
        assert_eq!(Money::from_major(-3).amount(), Decimal::from(-3));
    }

    #[test]
    fn test_times_rate() {
        // $21.98 at a 5% rate
        let subtotal = Money::from_cents(2198);
        assert_eq!(
            subtotal.times(Decimal::new(5, 2)).amount(),
            Decimal::new(10990, 4)
        );
    }

    #[test]
    fn test_saturating_sub_floors_at_zero() {
        let small = Money::from_major(3);
        let large = Money::from_major(10);
        assert_eq!(small.saturating_sub(large), Money::ZERO);
        assert_eq!(large.saturating_sub(small), Money::from_major(7));
    }

    #[test]
    fn test_mul_by_quantity() {
        assert_eq!(Money::from_cents(1099) * 2, Money::from_cents(2198));
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_major(1), Money::from_major(2)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_major(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_major(5).to_string(), "$5.00");
    }
}
