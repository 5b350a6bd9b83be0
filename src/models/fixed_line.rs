//! Fixed line model
//!
//! A manually declared recurring charge (rent, subscriptions, insurance)
//! billed at a given cadence.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cadence::Cadence;
use super::money::Money;
use super::split_policy::SplitPolicy;

/// A recurring fixed charge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedLine {
    pub label: String,
    /// Amount per occurrence, at `cadence`
    pub amount: Money,
    #[serde(default)]
    pub cadence: Cadence,
    /// Overrides the household default policy when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<SplitPolicy>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl FixedLine {
    pub fn new(label: impl Into<String>, amount: Money, cadence: Cadence) -> Self {
        Self {
            label: label.into(),
            amount,
            cadence,
            policy: None,
            active: true,
        }
    }

    pub fn monthly(label: impl Into<String>, amount: Money) -> Self {
        Self::new(label, amount, Cadence::Monthly)
    }

    pub fn with_policy(mut self, policy: SplitPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// The policy in force for this line given the household default
    pub fn effective_policy(&self, default: SplitPolicy) -> SplitPolicy {
        self.policy.unwrap_or(default)
    }
}

impl fmt::Display for FixedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.label, self.amount, self.cadence)
    }
}
