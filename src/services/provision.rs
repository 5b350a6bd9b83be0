//! Provision calculation
//!
//! Computes the monthly base amount of each savings goal and splits it
//! between the members with the goal's own policy.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{BudgetConfig, MemberTotals, Money, Provision, ProvisionBase, SplitResult};
use crate::services::split::split_for;

/// The computed allocation of one provision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvisionAllocation {
    pub name: String,
    /// Amount to set aside this month before splitting
    pub base: Money,
    pub split: SplitResult,
}

/// All active provisions with their totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProvisionSummary {
    pub items: Vec<ProvisionAllocation>,
    pub totals: MemberTotals,
}

/// Monthly base amount of a provision for the given household
///
/// # Examples
/// ```
/// use household_budget::models::{BudgetConfig, Money, Provision, ProvisionBase};
/// use household_budget::services::provision::base_amount;
///
/// let config = BudgetConfig::new("A", "B")
///     .with_incomes(Money::from_cents(300000), Money::from_cents(200000));
/// let savings = Provision::new("Savings", 10.0, ProvisionBase::TotalIncome);
/// assert_eq!(base_amount(&config, &savings).cents(), 50000);
/// ```
pub fn base_amount(config: &BudgetConfig, provision: &Provision) -> Money {
    match provision.base {
        ProvisionBase::TotalIncome => config.total_income().percent(provision.percentage),
        ProvisionBase::Member1Income => config.income1.percent(provision.percentage),
        ProvisionBase::Member2Income => config.income2.percent(provision.percentage),
        ProvisionBase::Fixed(amount) => amount,
    }
}

/// Compute the base and member split of one provision
///
/// The split policy is independent of the base: a provision computed on
/// member1's income may still be shared equally.
pub fn allocate_provision(config: &BudgetConfig, provision: &Provision) -> ProvisionAllocation {
    let base = base_amount(config, provision);
    let split = split_for(config, base, provision.policy);

    debug!(
        provision = %provision.name,
        %base,
        member1 = %split.member1,
        member2 = %split.member2,
        "allocated provision"
    );

    ProvisionAllocation {
        name: provision.name.clone(),
        base,
        split,
    }
}

/// Allocate every active provision and total them per member
pub fn calculate_provisions(config: &BudgetConfig, provisions: &[Provision]) -> ProvisionSummary {
    let items: Vec<ProvisionAllocation> = provisions
        .iter()
        .filter(|p| p.active)
        .map(|p| allocate_provision(config, p))
        .collect();

    let totals = items.iter().map(|item| item.split).sum();

    ProvisionSummary { items, totals }
}
