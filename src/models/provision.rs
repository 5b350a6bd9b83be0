//! Provision model
//!
//! A provision is a recurring savings goal that is set aside every month and
//! allocated between members like an expense.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::split_policy::SplitPolicy;

/// What a provision's percentage is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ProvisionBase {
    /// Percentage of the combined household income
    #[default]
    TotalIncome,
    /// Percentage of member1's income only
    Member1Income,
    /// Percentage of member2's income only
    Member2Income,
    /// A declared amount; the percentage is ignored
    Fixed(Money),
}

impl ProvisionBase {
    pub fn description(&self) -> String {
        match self {
            Self::TotalIncome => "Total income".to_string(),
            Self::Member1Income => "Member 1 income".to_string(),
            Self::Member2Income => "Member 2 income".to_string(),
            Self::Fixed(amount) => format!("Fixed {}", amount),
        }
    }
}

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provision {
    pub name: String,
    /// Percentage (0-100) applied to the base income
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub base: ProvisionBase,
    #[serde(default)]
    pub policy: SplitPolicy,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Provision {
    pub fn new(name: impl Into<String>, percentage: f64, base: ProvisionBase) -> Self {
        Self {
            name: name.into(),
            percentage,
            base,
            policy: SplitPolicy::default(),
            active: true,
        }
    }

    /// A provision of a declared amount
    pub fn fixed(name: impl Into<String>, amount: Money) -> Self {
        Self::new(name, 0.0, ProvisionBase::Fixed(amount))
    }

    pub fn with_policy(mut self, policy: SplitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

impl fmt::Display for Provision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.base {
            ProvisionBase::Fixed(amount) => write!(f, "{} ({})", self.name, amount),
            base => write!(f, "{} ({}% of {})", self.name, self.percentage, base.description()),
        }
    }
}
