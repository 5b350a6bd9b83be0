//! Terminal reports for the household budget
//!
//! Fixed-width text renderings of monthly summaries, financial health
//! ratios and loan schedules.

pub mod health;
pub mod loan;
pub mod summary;

pub use health::HealthReport;
pub use loan::LoanReport;
pub use summary::SummaryReport;
