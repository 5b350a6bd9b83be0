//! Budget aggregation
//!
//! Builds the monthly household summary: variable spending, normalized fixed
//! lines and provisions, each split between the members, plus the amount the
//! household still has to set aside given its account balance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{
    BudgetConfig, Cadence, FixedLine, MemberTotals, Money, Provision, SplitPolicy, SplitResult,
    TransactionRecord,
};
use crate::services::frequency::to_monthly;
use crate::services::provision::{calculate_provisions, ProvisionAllocation};
use crate::services::split::split_for;

/// Records consumed by one aggregation pass
#[derive(Debug, Clone, Copy)]
pub struct BudgetInputs<'a> {
    pub transactions: &'a [TransactionRecord],
    pub fixed_lines: &'a [FixedLine],
    pub provisions: &'a [Provision],
    /// Running balance of the shared account for the month
    pub account_balance: Money,
}

/// A fixed line after normalization and splitting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedLineAllocation {
    pub label: String,
    pub cadence: Cadence,
    /// Declared amount per occurrence
    pub amount: Money,
    pub monthly: Money,
    pub policy: SplitPolicy,
    pub split: SplitResult,
}

/// Variable spending for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: String,
    pub amount: Money,
    pub count: usize,
}

/// What the household still needs to put aside this month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyProvision {
    pub account_balance: Money,
    /// Fixed lines plus provisions for the month
    pub required: Money,
    /// `max(0, required - account_balance)`
    pub needed: Money,
    /// `max(0, account_balance - required)`
    pub surplus: Money,
    /// Transfer each member should make, split by income ratio
    pub transfer: SplitResult,
}

/// Full monthly summary for the household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub member1: String,
    pub member2: String,
    pub income: MemberTotals,
    pub variable: SplitResult,
    pub fixed: MemberTotals,
    pub provisions: MemberTotals,
    /// Variable + fixed + provisions, per member
    pub expenses: MemberTotals,
    /// Income minus expense share, per member
    pub balances: MemberTotals,
    /// Total income minus total expenses
    pub remaining: Money,
    pub family: FamilyProvision,
    pub fixed_lines: Vec<FixedLineAllocation>,
    pub provision_items: Vec<ProvisionAllocation>,
    pub categories: Vec<CategorySpending>,
}

impl BudgetSummary {
    /// Whether every subtotal equals the sum of its per-member halves
    pub fn is_closed(&self) -> bool {
        self.variable.is_closed()
            && self.fixed.is_closed()
            && self.provisions.is_closed()
            && self.expenses.is_closed()
            && self.balances.is_closed()
            && self.family.transfer.is_closed()
    }
}

/// Service computing budget summaries for one household configuration
pub struct BudgetService<'a> {
    config: &'a BudgetConfig,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(config: &'a BudgetConfig) -> Self {
        Self { config }
    }

    /// Sum of the absolute amounts of qualifying expenses
    pub fn variable_total(&self, transactions: &[TransactionRecord]) -> Money {
        transactions
            .iter()
            .filter(|t| t.is_budget_expense())
            .map(|t| t.amount.abs())
            .sum()
    }

    /// Variable spending grouped by category, largest first
    pub fn category_breakdown(&self, transactions: &[TransactionRecord]) -> Vec<CategorySpending> {
        let mut by_category: BTreeMap<&str, (Money, usize)> = BTreeMap::new();
        for txn in transactions.iter().filter(|t| t.is_budget_expense()) {
            let key = if txn.category.trim().is_empty() {
                "Uncategorized"
            } else {
                txn.category.as_str()
            };
            let entry = by_category.entry(key).or_insert((Money::zero(), 0));
            entry.0 += txn.amount.abs();
            entry.1 += 1;
        }

        let mut categories: Vec<CategorySpending> = by_category
            .into_iter()
            .map(|(category, (amount, count))| CategorySpending {
                category: category.to_string(),
                amount,
                count,
            })
            .collect();
        categories.sort_by(|a, b| b.amount.cmp(&a.amount).then(a.category.cmp(&b.category)));
        categories
    }

    /// Normalize a fixed line to monthly and split it
    pub fn allocate_fixed_line(&self, line: &FixedLine) -> FixedLineAllocation {
        let monthly = to_monthly(line.amount, line.cadence);
        let policy = line.effective_policy(self.config.default_policy);
        let split = split_for(self.config, monthly, policy);

        debug!(
            line = %line.label,
            cadence = %line.cadence,
            %monthly,
            member1 = %split.member1,
            member2 = %split.member2,
            "allocated fixed line"
        );

        FixedLineAllocation {
            label: line.label.clone(),
            cadence: line.cadence,
            amount: line.amount,
            monthly,
            policy,
            split,
        }
    }

    /// Amount still to provision given the account balance
    ///
    /// The need is split by income ratio regardless of the policies of the
    /// underlying lines.
    pub fn family_provision(&self, required: Money, account_balance: Money) -> FamilyProvision {
        let needed = (required - account_balance).floor_zero();
        let surplus = (account_balance - required).floor_zero();
        let transfer = split_for(self.config, needed, SplitPolicy::IncomeProportional);

        FamilyProvision {
            account_balance,
            required,
            needed,
            surplus,
            transfer,
        }
    }

    /// Compute the full monthly summary
    pub fn summarize(&self, inputs: BudgetInputs<'_>) -> BudgetSummary {
        let config = self.config;

        let variable_total = self.variable_total(inputs.transactions);
        let variable = split_for(config, variable_total, config.default_policy);

        let fixed_lines: Vec<FixedLineAllocation> = inputs
            .fixed_lines
            .iter()
            .filter(|line| line.active)
            .map(|line| self.allocate_fixed_line(line))
            .collect();
        let fixed: MemberTotals = fixed_lines.iter().map(|line| line.split).sum();

        let provision_summary = calculate_provisions(config, inputs.provisions);
        let provisions = provision_summary.totals;

        let expenses = MemberTotals::from(variable) + fixed + provisions;
        let income = MemberTotals {
            member1: config.income1,
            member2: config.income2,
            total: config.total_income(),
        };
        let balances = MemberTotals {
            member1: income.member1 - expenses.member1,
            member2: income.member2 - expenses.member2,
            total: income.total - expenses.total,
        };

        let family = self.family_provision(fixed.total + provisions.total, inputs.account_balance);

        debug!(
            variable = %variable.total,
            fixed = %fixed.total,
            provisions = %provisions.total,
            needed = %family.needed,
            "summarized household budget"
        );

        BudgetSummary {
            member1: config.member1.clone(),
            member2: config.member2.clone(),
            income,
            variable,
            fixed,
            provisions,
            expenses,
            remaining: balances.total,
            balances,
            family,
            fixed_lines,
            provision_items: provision_summary.items,
            categories: self.category_breakdown(inputs.transactions),
        }
    }
}
