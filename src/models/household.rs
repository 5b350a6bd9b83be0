//! Household configuration model
//!
//! The two members, their gross monthly incomes and the split policy applied
//! when a line does not specify its own.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::split_policy::SplitPolicy;

/// Identifies one of the two household members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Member {
    Member1,
    Member2,
}

/// Household budget configuration for one calculation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Display name of the first member
    pub member1: String,
    /// Display name of the second member
    pub member2: String,
    /// Gross monthly income of the first member
    pub income1: Money,
    /// Gross monthly income of the second member
    pub income2: Money,
    /// Policy used for variable expenses and for lines without an override
    #[serde(default)]
    pub default_policy: SplitPolicy,
}

impl BudgetConfig {
    pub fn new(member1: impl Into<String>, member2: impl Into<String>) -> Self {
        Self {
            member1: member1.into(),
            member2: member2.into(),
            income1: Money::zero(),
            income2: Money::zero(),
            default_policy: SplitPolicy::default(),
        }
    }

    pub fn with_incomes(mut self, income1: Money, income2: Money) -> Self {
        self.income1 = income1;
        self.income2 = income2;
        self
    }

    pub fn with_policy(mut self, policy: SplitPolicy) -> Self {
        self.default_policy = policy;
        self
    }

    /// Combined monthly income of both members
    pub fn total_income(&self) -> Money {
        self.income1 + self.income2
    }

    pub fn income_of(&self, member: Member) -> Money {
        match member {
            Member::Member1 => self.income1,
            Member::Member2 => self.income2,
        }
    }

    pub fn name_of(&self, member: Member) -> &str {
        match member {
            Member::Member1 => &self.member1,
            Member::Member2 => &self.member2,
        }
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self::new("Member 1", "Member 2")
    }
}
