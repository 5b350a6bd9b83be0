//! Recording cadence of a fixed line
//!
//! Household fixed charges are declared at the cadence they are billed:
//! monthly (rent), quarterly (water), annual (insurance).

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a fixed line is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    #[default]
    Monthly,
    Quarterly,
    Annual,
}

impl Cadence {
    pub const ALL: [Cadence; 3] = [Cadence::Monthly, Cadence::Quarterly, Cadence::Annual];

    /// Number of months covered by one occurrence
    pub const fn months(&self) -> i64 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::Annual => 12,
        }
    }

    /// Occurrences per year
    pub const fn per_year(&self) -> i64 {
        12 / self.months()
    }

    /// Parse a cadence keyword, recognising both French and English spellings.
    ///
    /// Returns `None` for anything unrecognised; see
    /// [`crate::input::normalize::cadence_or_default`] for the defaulting rule.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mensuelle" | "mensuel" | "monthly" | "month" | "m" => Some(Self::Monthly),
            "trimestrielle" | "trimestriel" | "quarterly" | "quarter" | "q" => {
                Some(Self::Quarterly)
            }
            "annuelle" | "annuel" | "annual" | "yearly" | "year" | "y" => Some(Self::Annual),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Annual => "Annual",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
