//! Frequency normalization
//!
//! Converts amounts recorded at a billing cadence to their monthly
//! equivalent and back. All results are whole cents.

use crate::models::{Cadence, Money};

/// Monthly equivalent of an amount billed at `cadence`
///
/// # Examples
/// ```
/// use household_budget::models::{Cadence, Money};
/// use household_budget::services::frequency::to_monthly;
///
/// let monthly = to_monthly(Money::from_cents(30000), Cadence::Quarterly);
/// assert_eq!(monthly.cents(), 10000);
/// ```
pub fn to_monthly(amount: Money, cadence: Cadence) -> Money {
    amount.div_round(cadence.months())
}

/// Annual equivalent of an amount billed at `cadence`
pub fn to_annual(amount: Money, cadence: Cadence) -> Money {
    amount.times(cadence.per_year())
}

/// Amount per occurrence at `cadence` for a given monthly figure
///
/// Inverse of [`to_monthly`], up to the rounding of the monthly figure.
pub fn from_monthly(monthly: Money, cadence: Cadence) -> Money {
    monthly.times(cadence.months())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_monthly() {
        let amount = Money::from_cents(120000);
        assert_eq!(to_monthly(amount, Cadence::Monthly).cents(), 120000);
        assert_eq!(to_monthly(amount, Cadence::Quarterly).cents(), 40000);
        assert_eq!(to_monthly(amount, Cadence::Annual).cents(), 10000);
    }

    #[test]
    fn test_to_monthly_rounds_to_cent() {
        assert_eq!(to_monthly(Money::from_cents(10000), Cadence::Quarterly).cents(), 3333);
        assert_eq!(to_monthly(Money::from_cents(20000), Cadence::Quarterly).cents(), 6667);
        assert_eq!(to_monthly(Money::from_cents(100), Cadence::Annual).cents(), 8);
        assert_eq!(to_monthly(Money::from_cents(-20000), Cadence::Quarterly).cents(), -6667);
    }

    #[test]
    fn test_to_annual() {
        let amount = Money::from_cents(5000);
        assert_eq!(to_annual(amount, Cadence::Monthly).cents(), 60000);
        assert_eq!(to_annual(amount, Cadence::Quarterly).cents(), 20000);
        assert_eq!(to_annual(amount, Cadence::Annual).cents(), 5000);
    }

    #[test]
    fn test_quarterly_rent_scenario() {
        let monthly = to_monthly(Money::from_units_cents(300, 0), Cadence::Quarterly);
        assert_eq!(monthly, Money::from_units_cents(100, 0));
    }

    #[test]
    fn test_round_trip_within_monthly_rounding() {
        for cents in (-50_000..50_000).step_by(7) {
            let amount = Money::from_cents(cents);
            for cadence in Cadence::ALL {
                let back = from_monthly(to_monthly(amount, cadence), cadence);
                let drift = (back - amount).cents().abs();
                // Half a cent of monthly rounding, scaled by the months covered.
                assert!(
                    drift * 2 <= cadence.months(),
                    "{} {:?} drifted by {} cents",
                    amount,
                    cadence,
                    drift
                );
            }
        }
    }

    #[test]
    fn test_monthly_round_trip_is_exact() {
        for cents in [-1, 0, 1, 99, 123457, -98765] {
            let amount = Money::from_cents(cents);
            assert_eq!(from_monthly(to_monthly(amount, Cadence::Monthly), Cadence::Monthly), amount);
        }
    }

    #[test]
    fn test_annualized_monthly_matches_native_annual() {
        for cents in (0..10_000).step_by(13) {
            let amount = Money::from_cents(cents);
            for cadence in Cadence::ALL {
                let native = to_annual(amount, cadence);
                let via_monthly = to_annual(to_monthly(amount, cadence), Cadence::Monthly);
                assert!((native - via_monthly).cents().abs() * 2 <= 12);
            }
        }
    }
}
