//! Core data models for the household budget engine
//!
//! This module contains the value types a calculation pass works on: money,
//! cadences, split policies, the household configuration, fixed lines,
//! provisions and transaction records.

pub mod cadence;
pub mod fixed_line;
pub mod household;
pub mod money;
pub mod provision;
pub mod split;
pub mod split_policy;
pub mod transaction;

pub use cadence::Cadence;
pub use fixed_line::FixedLine;
pub use household::{BudgetConfig, Member};
pub use money::{round2, Money};
pub use provision::{Provision, ProvisionBase};
pub use split::{MemberTotals, SplitResult};
pub use split_policy::SplitPolicy;
pub use transaction::TransactionRecord;
