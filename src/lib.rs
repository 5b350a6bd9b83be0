//! Household budget - shared expense allocation for a two-person household
//!
//! This library computes how a household's spending is divided between its
//! two members: variable spending from transactions, fixed charges of any
//! cadence normalized to a monthly amount, and savings provisions. Every
//! split closes to the cent, and the summary tells each member how much is
//! still needed in the shared account.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data types (money, cadences, split policies, records)
//! - `services`: Pure calculations (splits, provisions, aggregation, ratios, projections)
//! - `input`: Raw records and the single normalization boundary
//! - `config`: Path management and user settings
//! - `reports`: Fixed-width terminal reports
//! - `export`: JSON and YAML output
//! - `cli`: Command handlers for the `household` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use household_budget::models::{BudgetConfig, Money, SplitPolicy};
//! use household_budget::services::split_for;
//!
//! let config = BudgetConfig::new("Alex", "Sam")
//!     .with_incomes(Money::from_major(3000.0), Money::from_major(2000.0));
//! let split = split_for(&config, Money::from_major(1234.57), SplitPolicy::IncomeProportional);
//! assert_eq!(split.member1, Money::from_major(740.74));
//! assert_eq!(split.member2, Money::from_major(493.83));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod log;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{BudgetError, BudgetResult};
