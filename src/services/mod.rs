//! Calculation layer
//!
//! Pure functions over the models: frequency normalization, split
//! allocation, provisions, monthly aggregation, ratios and projections.
//! Nothing here performs I/O or keeps state between calls.

pub mod budget;
pub mod frequency;
pub mod projection;
pub mod provision;
pub mod ratios;
pub mod split;

pub use budget::{BudgetInputs, BudgetService, BudgetSummary, FamilyProvision};
pub use provision::{calculate_provisions, ProvisionAllocation, ProvisionSummary};
pub use ratios::{FinancialRatios, HealthTier};
pub use split::{split_amount, split_for};
