//! What-if projections
//!
//! Compound growth of savings and amortized loan payments. Rates are annual
//! percentages; compounding and payments are monthly.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Money;
use crate::models::money::round_cents;

/// Monthly rate from an annual percentage, 0 for non-finite input
fn monthly_rate(annual_rate_pct: f64) -> f64 {
    if annual_rate_pct.is_finite() {
        annual_rate_pct / 100.0 / 12.0
    } else {
        0.0
    }
}

/// Value after `years` of monthly compounding, with an optional monthly contribution
///
/// # Examples
/// ```
/// use household_budget::models::Money;
/// use household_budget::services::projection::compound_growth;
///
/// let value = compound_growth(Money::from_major(10000.0), 5.0, 10, Money::zero());
/// assert_eq!(value, Money::from_major(16470.09));
/// ```
pub fn compound_growth(
    principal: Money,
    annual_rate_pct: f64,
    years: u32,
    monthly_contribution: Money,
) -> Money {
    let r = monthly_rate(annual_rate_pct);
    let n = f64::from(years) * 12.0;
    let p = principal.cents() as f64;
    let c = monthly_contribution.cents() as f64;

    let cents = if r == 0.0 {
        p + c * n
    } else {
        let growth = (1.0 + r).powf(n);
        p * growth + c * (growth - 1.0) / r
    };
    Money::from_cents(round_cents(cents))
}

/// Fixed monthly payment of an amortized loan (PMT)
///
/// A zero term yields zero; a zero rate divides the principal evenly.
pub fn loan_payment(principal: Money, annual_rate_pct: f64, months: u32) -> Money {
    if months == 0 {
        return Money::zero();
    }
    let r = monthly_rate(annual_rate_pct);
    if r == 0.0 {
        return principal.div_round(i64::from(months));
    }
    let p = principal.cents() as f64;
    let payment = p * r / (1.0 - (1.0 + r).powf(-f64::from(months)));
    Money::from_cents(round_cents(payment))
}

/// One month of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    pub balance: Money,
}

/// Longest loan term, in months, for which a schedule is produced
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Walk the repayment month by month
///
/// The last payment is adjusted so that the balance closes at exactly zero.
fn amortize(
    principal: Money,
    annual_rate_pct: f64,
    months: u32,
    mut visit: impl FnMut(AmortizationRow),
) {
    let payment = loan_payment(principal, annual_rate_pct, months);
    let r = monthly_rate(annual_rate_pct);

    let mut balance = principal;
    for month in 1..=months {
        let interest = Money::from_cents(round_cents(balance.cents() as f64 * r));
        let (payment, repaid) = if month == months {
            (balance + interest, balance)
        } else {
            (payment, payment - interest)
        };
        balance -= repaid;
        visit(AmortizationRow {
            month,
            payment,
            interest,
            principal: repaid,
            balance,
        });
    }
}

/// Month-by-month repayment of a loan
///
/// The last payment is adjusted so that the balance closes at exactly zero.
/// Terms longer than [`MAX_TERM_MONTHS`] yield an empty schedule.
pub fn amortization_schedule(
    principal: Money,
    annual_rate_pct: f64,
    months: u32,
) -> Vec<AmortizationRow> {
    if months > MAX_TERM_MONTHS {
        warn!(months, max = MAX_TERM_MONTHS, "loan term too long, no schedule");
        return Vec::new();
    }
    let mut rows = Vec::with_capacity(months as usize);
    amortize(principal, annual_rate_pct, months, |row| rows.push(row));
    rows
}

/// Total interest over the life of a loan, without building the schedule
///
/// Zero for terms longer than [`MAX_TERM_MONTHS`].
pub fn loan_interest(principal: Money, annual_rate_pct: f64, months: u32) -> Money {
    if months > MAX_TERM_MONTHS {
        warn!(months, max = MAX_TERM_MONTHS, "loan term too long, no interest total");
        return Money::zero();
    }
    let mut interest = Money::zero();
    amortize(principal, annual_rate_pct, months, |row| interest += row.interest);
    interest
}

/// Total interest paid over a schedule
pub fn total_interest(schedule: &[AmortizationRow]) -> Money {
    schedule.iter().map(|row| row.interest).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn major(amount: f64) -> Money {
        Money::from_major(amount)
    }

    #[test]
    fn test_compound_growth() {
        assert_eq!(compound_growth(major(10000.0), 5.0, 10, Money::zero()), major(16470.09));
        assert_eq!(compound_growth(major(1000.0), 0.0, 5, major(100.0)), major(7000.0));
        assert_eq!(compound_growth(major(1000.0), 5.0, 0, major(100.0)), major(1000.0));
    }

    #[test]
    fn test_compound_growth_non_finite_rate() {
        assert_eq!(compound_growth(major(1000.0), f64::NAN, 2, Money::zero()), major(1000.0));
    }

    #[test]
    fn test_loan_payment() {
        assert_eq!(loan_payment(major(200000.0), 6.0, 360), major(1199.10));
        assert_eq!(loan_payment(major(1200.0), 0.0, 12), major(100.0));
        assert_eq!(loan_payment(major(1200.0), 5.0, 0), Money::zero());
    }

    #[test]
    fn test_schedule_closes_at_zero() {
        let schedule = amortization_schedule(major(10000.0), 4.5, 36);
        assert_eq!(schedule.len(), 36);
        assert_eq!(schedule.last().map(|row| row.balance), Some(Money::zero()));

        let repaid: Money = schedule.iter().map(|row| row.principal).sum();
        assert_eq!(repaid, major(10000.0));

        let paid: Money = schedule.iter().map(|row| row.payment).sum();
        assert_eq!(paid, major(10000.0) + total_interest(&schedule));
    }

    #[test]
    fn test_schedule_first_month() {
        let schedule = amortization_schedule(major(200000.0), 6.0, 360);
        assert_eq!(schedule[0].interest, major(1000.0));
        assert_eq!(schedule[0].principal, major(199.10));
        assert_eq!(schedule[0].balance, major(199800.90));
    }

    #[test]
    fn test_loan_interest_matches_schedule() {
        let schedule = amortization_schedule(major(10000.0), 4.5, 36);
        assert_eq!(loan_interest(major(10000.0), 4.5, 36), total_interest(&schedule));
    }

    #[test]
    fn test_overlong_term_is_not_scheduled() {
        assert!(amortization_schedule(major(1000.0), 5.0, u32::MAX).is_empty());
        assert!(amortization_schedule(major(1000.0), 5.0, MAX_TERM_MONTHS + 1).is_empty());
        assert_eq!(loan_interest(major(1000.0), 5.0, u32::MAX), Money::zero());
        assert_eq!(amortization_schedule(major(1000.0), 5.0, MAX_TERM_MONTHS).len(), 1200);
    }

    #[test]
    fn test_zero_rate_schedule() {
        let schedule = amortization_schedule(major(100.0), 0.0, 3);
        let payments: Vec<i64> = schedule.iter().map(|row| row.payment.cents()).collect();
        assert_eq!(payments, vec![3333, 3333, 3334]);
        assert_eq!(total_interest(&schedule), Money::zero());
    }
}
