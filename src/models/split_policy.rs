//! Split policies
//!
//! A split policy decides how one amount is divided between the two
//! household members. Each variant carries exactly the data it needs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule used to divide an amount between member1 and member2
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SplitPolicy {
    /// Proportional to each member's income ("revenus" / "clé")
    IncomeProportional,
    /// Explicit percentages ("manuel")
    Manual { member1: f64, member2: f64 },
    /// Half each ("50/50")
    #[default]
    Equal,
    /// Member1 bears everything ("100/0")
    Member1Only,
    /// Member2 bears everything ("0/100")
    Member2Only,
}

impl SplitPolicy {
    pub fn manual(member1: f64, member2: f64) -> Self {
        Self::Manual { member1, member2 }
    }

    /// Keyword identifying the policy, as stored in household configuration
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::IncomeProportional => "revenus",
            Self::Manual { .. } => "manuel",
            Self::Equal => "50/50",
            Self::Member1Only => "100/0",
            Self::Member2Only => "0/100",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::IncomeProportional => "Income-proportional".to_string(),
            Self::Manual { member1, member2 } => format!("Manual {}/{}", member1, member2),
            Self::Equal => "50/50".to_string(),
            Self::Member1Only => "100/0".to_string(),
            Self::Member2Only => "0/100".to_string(),
        }
    }
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
