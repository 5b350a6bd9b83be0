//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod init;
pub mod project;
pub mod ratios;
pub mod split;
pub mod summary;

pub use init::{handle_config_command, handle_init_command};
pub use project::{handle_project_command, ProjectCommands};
pub use ratios::{handle_ratios_command, RatiosArgs};
pub use split::{handle_split_command, SplitArgs};
pub use summary::{handle_summary_command, SummaryArgs};

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_json, export_yaml};
use crate::input::records::parse_loose_number;
use crate::models::Money;

/// Parse a command-line amount such as `1234.57`, `1234,57` or `-80`
pub fn parse_amount(s: &str) -> Result<Money, String> {
    match parse_loose_number(s) {
        Some(value) if value.is_finite() && value.abs() <= Money::MAX_INPUT_UNITS => {
            Ok(Money::from_major(value))
        }
        Some(value) if value.is_finite() => Err(format!("Amount out of range: '{}'", s)),
        _ => Err(format!("Invalid amount: '{}'", s)),
    }
}

/// Parse a percentage or rate such as `5`, `5.5` or `5,5`
pub fn parse_rate(s: &str) -> Result<f64, String> {
    match parse_loose_number(s.trim_end_matches('%')) {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(format!("Invalid rate: '{}'", s)),
    }
}

/// Render a report in the requested format
pub(crate) fn render<T, F>(value: &T, format: OutputFormat, text: F) -> BudgetResult<String>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Text => Ok(text()),
        OutputFormat::Json => {
            let mut out = Vec::new();
            export_json(value, &mut out, true)?;
            String::from_utf8(out).map_err(|e| BudgetError::Export(e.to_string()))
        }
        OutputFormat::Yaml => {
            let mut out = Vec::new();
            export_yaml(value, &mut out)?;
            String::from_utf8(out).map_err(|e| BudgetError::Export(e.to_string()))
        }
    }
}
