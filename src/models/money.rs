//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that splits and subtotals
//! reconstitute exactly. Values coming from loosely typed input (`f64`) are
//! converted once, at the boundary, with half-away-from-zero rounding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

/// Round a fractional cent count to the nearest whole cent, half away from zero.
///
/// Non-finite values collapse to zero. The small nudge absorbs binary
/// representation error such as `1.005 * 100.0 == 100.49999999999999`.
pub(crate) fn round_cents(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let nudged = value + value.signum() * 1e-7;
    nudged.round() as i64
}

/// Round a plain `f64` to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    round_cents(value * 100.0) as f64 / 100.0
}

impl Money {
    /// Largest magnitude, in currency units, accepted from loosely typed input
    pub const MAX_INPUT_UNITS: f64 = 1e12;

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use household_budget::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.cents(), 1050);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Convert a decimal amount (e.g. `1234.567`) to Money, rounding to the cent.
    ///
    /// `NaN` and infinities become zero.
    ///
    /// # Examples
    /// ```
    /// use household_budget::models::Money;
    /// assert_eq!(Money::from_major(1234.567).cents(), 123457);
    /// assert_eq!(Money::from_major(f64::NAN).cents(), 0);
    /// ```
    pub fn from_major(amount: f64) -> Self {
        Self(round_cents(amount * 100.0))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a decimal number of currency units
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Clamp negative amounts to zero
    pub const fn floor_zero(&self) -> Self {
        if self.0 < 0 {
            Self(0)
        } else {
            *self
        }
    }

    /// Multiply by a whole factor, saturating at the i64 bounds
    pub const fn times(&self, factor: i64) -> Self {
        Self(self.0.saturating_mul(factor))
    }

    /// Divide by a whole divisor, rounding half away from zero.
    ///
    /// A zero divisor yields zero.
    pub const fn div_round(&self, divisor: i64) -> Self {
        if divisor == 0 {
            return Self(0);
        }
        let quotient = self.0 / divisor;
        let remainder = self.0 % divisor;
        if 2 * remainder.abs() >= divisor.abs() {
            let sign = if (self.0 < 0) == (divisor < 0) { 1 } else { -1 };
            Self(quotient + sign)
        } else {
            Self(quotient)
        }
    }

    /// Take a percentage (0-100 scale) of this amount, rounded to the cent
    ///
    /// # Examples
    /// ```
    /// use household_budget::models::Money;
    /// let total = Money::from_cents(123457);
    /// assert_eq!(total.percent(60.0).cents(), 74074);
    /// ```
    pub fn percent(&self, pct: f64) -> Self {
        Self(round_cents(self.0 as f64 * pct / 100.0))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
