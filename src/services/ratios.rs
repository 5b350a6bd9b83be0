//! Financial health ratios
//!
//! Savings rate, expense ratio and debt ratio, combined into a point score
//! and a qualitative tier. Band thresholds are fixed constants so that the
//! same figures always land in the same tier.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{round2, Money};
use crate::services::budget::BudgetSummary;

/// Savings rate bands: at or above the threshold earns the points
pub const SAVINGS_RATE_BANDS: [(f64, u32); 4] = [(20.0, 40), (15.0, 30), (10.0, 20), (5.0, 10)];

/// Expense ratio bands: at or below the threshold earns the points
pub const EXPENSE_RATIO_BANDS: [(f64, u32); 3] = [(50.0, 30), (70.0, 20), (90.0, 10)];

/// Debt ratio bands: at or below the threshold earns the points
pub const DEBT_RATIO_BANDS: [(f64, u32); 3] = [(20.0, 30), (35.0, 20), (50.0, 10)];

/// Qualitative financial health
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl HealthTier {
    /// Tier for a composite score out of 100
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => Self::Excellent,
            s if s >= 60 => Self::Good,
            s if s >= 40 => Self::Fair,
            _ => Self::Poor,
        }
    }
}

impl fmt::Display for HealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Poor => write!(f, "Poor"),
            Self::Fair => write!(f, "Fair"),
            Self::Good => write!(f, "Good"),
            Self::Excellent => write!(f, "Excellent"),
        }
    }
}

/// Aggregate ratios, in percent, rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialRatios {
    pub savings_rate: f64,
    pub expense_ratio: f64,
    pub debt_ratio: f64,
    pub score: u32,
    pub tier: HealthTier,
}

/// `numerator / denominator * 100`, or 0 without a positive denominator
fn percent_of(numerator: Money, denominator: Money) -> f64 {
    if !denominator.is_positive() {
        return 0.0;
    }
    numerator.cents() as f64 / denominator.cents() as f64 * 100.0
}

/// `(income - expenses) / income * 100`
pub fn savings_rate(income: Money, expenses: Money) -> f64 {
    round2(percent_of(income - expenses, income))
}

/// `expenses / income * 100`
pub fn expense_ratio(income: Money, expenses: Money) -> f64 {
    round2(percent_of(expenses, income))
}

/// `debt_payments / gross_income * 100`
pub fn debt_ratio(debt_payments: Money, gross_income: Money) -> f64 {
    round2(percent_of(debt_payments, gross_income))
}

/// Composite score out of 100
pub fn health_score(savings_rate: f64, expense_ratio: f64, debt_ratio: f64) -> u32 {
    let savings = SAVINGS_RATE_BANDS
        .iter()
        .find(|(threshold, _)| savings_rate >= *threshold)
        .map_or(0, |(_, points)| *points);
    let expenses = EXPENSE_RATIO_BANDS
        .iter()
        .find(|(threshold, _)| expense_ratio <= *threshold)
        .map_or(0, |(_, points)| *points);
    let debt = DEBT_RATIO_BANDS
        .iter()
        .find(|(threshold, _)| debt_ratio <= *threshold)
        .map_or(0, |(_, points)| *points);
    savings + expenses + debt
}

impl FinancialRatios {
    /// Compute ratios from aggregate monthly figures
    ///
    /// # Examples
    /// ```
    /// use household_budget::models::Money;
    /// use household_budget::services::ratios::{FinancialRatios, HealthTier};
    ///
    /// let ratios = FinancialRatios::calculate(
    ///     Money::from_major(5000.0),
    ///     Money::from_major(3000.0),
    ///     Money::from_major(250.0),
    ///     Money::from_major(5000.0),
    /// );
    /// assert_eq!(ratios.savings_rate, 40.0);
    /// assert_eq!(ratios.tier, HealthTier::Excellent);
    /// ```
    pub fn calculate(
        income: Money,
        expenses: Money,
        debt_payments: Money,
        gross_income: Money,
    ) -> Self {
        let savings_rate = savings_rate(income, expenses);
        let expense_ratio = expense_ratio(income, expenses);
        let debt_ratio = debt_ratio(debt_payments, gross_income);
        let score = health_score(savings_rate, expense_ratio, debt_ratio);

        Self {
            savings_rate,
            expense_ratio,
            debt_ratio,
            score,
            tier: HealthTier::from_score(score),
        }
    }

    /// Ratios for a monthly summary; gross income is the household income
    pub fn from_summary(summary: &BudgetSummary, debt_payments: Money) -> Self {
        Self::calculate(
            summary.income.total,
            summary.expenses.total,
            debt_payments,
            summary.income.total,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn major(amount: f64) -> Money {
        Money::from_major(amount)
    }

    #[test]
    fn test_savings_rate() {
        assert_eq!(savings_rate(major(5000.0), major(3000.0)), 40.0);
        assert_eq!(savings_rate(major(3000.0), major(4500.0)), -50.0);
        assert_eq!(savings_rate(Money::zero(), major(100.0)), 0.0);
    }

    #[test]
    fn test_expense_and_debt_ratios() {
        assert_eq!(expense_ratio(major(5000.0), major(3000.0)), 60.0);
        assert_eq!(expense_ratio(Money::zero(), major(3000.0)), 0.0);
        assert_eq!(debt_ratio(major(250.0), major(5000.0)), 5.0);
        assert_eq!(debt_ratio(major(1000.0), major(3000.0)), 33.33);
        assert_eq!(debt_ratio(major(250.0), Money::zero()), 0.0);
    }

    #[test]
    fn test_excellent_scenario() {
        let ratios = FinancialRatios::calculate(major(5000.0), major(3000.0), major(250.0), major(5000.0));
        assert_eq!(ratios.savings_rate, 40.0);
        assert_eq!(ratios.expense_ratio, 60.0);
        assert_eq!(ratios.debt_ratio, 5.0);
        assert_eq!(ratios.score, 90);
        assert_eq!(ratios.tier, HealthTier::Excellent);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(health_score(20.0, 50.0, 20.0), 100);
        assert_eq!(health_score(19.99, 50.01, 20.01), 30 + 20 + 20);
        assert_eq!(health_score(5.0, 90.0, 50.0), 10 + 10 + 10);
        assert_eq!(health_score(4.99, 90.01, 50.01), 0);
        assert_eq!(health_score(-10.0, 120.0, 80.0), 0);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(HealthTier::from_score(0), HealthTier::Poor);
        assert_eq!(HealthTier::from_score(39), HealthTier::Poor);
        assert_eq!(HealthTier::from_score(40), HealthTier::Fair);
        assert_eq!(HealthTier::from_score(59), HealthTier::Fair);
        assert_eq!(HealthTier::from_score(60), HealthTier::Good);
        assert_eq!(HealthTier::from_score(79), HealthTier::Good);
        assert_eq!(HealthTier::from_score(80), HealthTier::Excellent);
    }

    #[test]
    fn test_overspending_household_is_poor() {
        // 45% debt ratio still earns the lowest debt band
        let ratios = FinancialRatios::calculate(major(2000.0), major(2500.0), major(900.0), major(2000.0));
        assert_eq!(ratios.debt_ratio, 45.0);
        assert_eq!(ratios.score, 10);
        assert_eq!(ratios.tier, HealthTier::Poor);

        let ratios = FinancialRatios::calculate(major(2000.0), major(2500.0), major(1100.0), major(2000.0));
        assert_eq!(ratios.score, 0);
        assert_eq!(ratios.tier, HealthTier::Poor);
    }

    #[test]
    fn test_zero_income() {
        let ratios = FinancialRatios::calculate(Money::zero(), Money::zero(), Money::zero(), Money::zero());
        assert_eq!(ratios.savings_rate, 0.0);
        assert_eq!(ratios.expense_ratio, 0.0);
        // 0% savings earns nothing; 0% expenses and debt earn full marks.
        assert_eq!(ratios.score, 60);
        assert_eq!(ratios.tier, HealthTier::Good);
    }

    #[test]
    fn test_idempotent() {
        let a = FinancialRatios::calculate(major(4321.0), major(1234.0), major(99.0), major(5000.0));
        let b = FinancialRatios::calculate(major(4321.0), major(1234.0), major(99.0), major(5000.0));
        assert_eq!(a, b);
    }
}
