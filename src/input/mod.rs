//! Input boundary
//!
//! Raw records as stored by the calling layer, the single place where
//! malformed values are defaulted, and scenario files that bundle a whole
//! calculation pass.

pub mod normalize;
pub mod records;
pub mod scenario;

pub use records::{RawBudgetConfig, RawFixedLine, RawProvision, RawTransaction};
pub use scenario::{parse_month, Household, Scenario};
