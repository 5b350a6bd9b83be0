//! Split allocation
//!
//! Divides one amount between the two members under a [`SplitPolicy`].
//!
//! Each member's share is rounded to the cent independently, then any
//! residual between the total and the sum of the shares is given entirely to
//! the member with the larger share (member1 on a tie). The result therefore
//! always satisfies `member1 + member2 == total`, for any policy and any
//! total, including negative ones and manual percentages that do not add up
//! to 100.

use tracing::trace;

use crate::models::{round2, BudgetConfig, Money, SplitPolicy, SplitResult};

/// Percentages (0-100 scale) assigned to member1 and member2 by a policy
pub fn policy_percentages(policy: SplitPolicy, income1: Money, income2: Money) -> (f64, f64) {
    match policy {
        SplitPolicy::IncomeProportional => income_percentages(income1, income2),
        SplitPolicy::Manual { member1, member2 } => (member1, member2),
        SplitPolicy::Equal => (50.0, 50.0),
        SplitPolicy::Member1Only => (100.0, 0.0),
        SplitPolicy::Member2Only => (0.0, 100.0),
    }
}

/// Income ratio of each member, falling back to 50/50 without income
pub fn income_percentages(income1: Money, income2: Money) -> (f64, f64) {
    let total = income1 + income2;
    if !total.is_positive() {
        return (50.0, 50.0);
    }
    let total = total.cents() as f64;
    (
        income1.cents() as f64 / total * 100.0,
        income2.cents() as f64 / total * 100.0,
    )
}

/// Split `total` between the two members under `policy`
///
/// # Examples
/// ```
/// use household_budget::models::{Money, SplitPolicy};
/// use household_budget::services::split::split_amount;
///
/// let split = split_amount(
///     Money::from_cents(123457),
///     SplitPolicy::IncomeProportional,
///     Money::from_cents(300000),
///     Money::from_cents(200000),
/// );
/// assert_eq!(split.member1.cents(), 74074);
/// assert_eq!(split.member2.cents(), 49383);
/// ```
pub fn split_amount(
    total: Money,
    policy: SplitPolicy,
    income1: Money,
    income2: Money,
) -> SplitResult {
    let (pct1, pct2) = policy_percentages(policy, income1, income2);
    allocate(total, pct1, pct2)
}

/// Split `total` with the incomes of a household configuration
pub fn split_for(config: &BudgetConfig, total: Money, policy: SplitPolicy) -> SplitResult {
    split_amount(total, policy, config.income1, config.income2)
}

/// Split `total` by explicit percentages and reconcile the rounding residual
pub fn allocate(total: Money, pct1: f64, pct2: f64) -> SplitResult {
    let mut member1 = total.percent(pct1);
    let mut member2 = total.percent(pct2);

    let residual = total - (member1 + member2);
    if !residual.is_zero() {
        trace!(%total, %residual, "reconciling split residual");
        if member1.abs() >= member2.abs() {
            member1 += residual;
        } else {
            member2 += residual;
        }
    }

    debug_assert_eq!(member1 + member2, total, "split must reconstitute its total");

    SplitResult {
        member1,
        member2,
        total,
        member1_pct: round2(pct1),
        member2_pct: round2(pct2),
    }
}
