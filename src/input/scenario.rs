//! Scenario files
//!
//! A scenario bundles everything one calculation pass needs: the household
//! configuration, fixed lines, provisions, transactions and the running
//! account balance. Scenarios are read from JSON or YAML.

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use tracing::debug;

use super::normalize;
use super::records::{lenient_f64, RawBudgetConfig, RawFixedLine, RawProvision, RawTransaction};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetConfig, FixedLine, Money, Provision, TransactionRecord};
use crate::services::budget::{BudgetInputs, BudgetService, BudgetSummary};
use crate::services::ratios::FinancialRatios;

/// Raw scenario as read from disk
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Scenario {
    #[serde(default)]
    pub config: RawBudgetConfig,
    #[serde(default)]
    pub fixed_lines: Vec<RawFixedLine>,
    #[serde(default)]
    pub provisions: Vec<RawProvision>,
    #[serde(default)]
    pub transactions: Vec<RawTransaction>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub account_balance: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub debt_payments: f64,
}

/// Scenario after normalization, ready to be summarized
#[derive(Debug, Clone, PartialEq)]
pub struct Household {
    pub config: BudgetConfig,
    pub fixed_lines: Vec<FixedLine>,
    pub provisions: Vec<Provision>,
    pub transactions: Vec<TransactionRecord>,
    pub account_balance: Money,
    pub debt_payments: Money,
}

impl Scenario {
    /// Load a scenario, choosing the format from the file extension
    pub fn load(path: &Path) -> BudgetResult<Self> {
        let shown = path.display().to_string();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| BudgetError::scenario(&shown, format!("cannot read file: {}", e)))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();

        let scenario = match extension.as_str() {
            "json" => Self::from_json_str(&contents),
            "yaml" | "yml" => Self::from_yaml_str(&contents),
            other => {
                return Err(BudgetError::scenario(
                    &shown,
                    format!("unsupported extension '{}' (expected json, yaml or yml)", other),
                ))
            }
        }
        .map_err(|e| BudgetError::scenario(&shown, e.to_string()))?;

        debug!(
            path = %shown,
            fixed_lines = scenario.fixed_lines.len(),
            provisions = scenario.provisions.len(),
            transactions = scenario.transactions.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }

    pub fn from_json_str(contents: &str) -> BudgetResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_yaml_str(contents: &str) -> BudgetResult<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Convert every raw record to the typed model, applying defaults
    pub fn normalize(&self) -> Household {
        Household {
            config: normalize::budget_config(&self.config),
            fixed_lines: self.fixed_lines.iter().map(normalize::fixed_line).collect(),
            provisions: self.provisions.iter().map(normalize::provision).collect(),
            transactions: self.transactions.iter().map(normalize::transaction).collect(),
            account_balance: normalize::money_or_zero(self.account_balance),
            debt_payments: normalize::income_or_zero(self.debt_payments),
        }
    }
}

/// Parse a `YYYY-MM` month
pub fn parse_month(s: &str) -> BudgetResult<(i32, u32)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| BudgetError::Validation(format!("Invalid month '{}', expected YYYY-MM", s)))?;
    Ok((first.year(), first.month()))
}

impl Household {
    /// Keep only transactions dated in the given month
    pub fn retain_month(&mut self, year: i32, month: u32) {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.in_month(year, month));
        debug!(
            year,
            month,
            kept = self.transactions.len(),
            dropped = before - self.transactions.len(),
            "filtered transactions by month"
        );
    }

    pub fn inputs(&self) -> BudgetInputs<'_> {
        BudgetInputs {
            transactions: &self.transactions,
            fixed_lines: &self.fixed_lines,
            provisions: &self.provisions,
            account_balance: self.account_balance,
        }
    }

    pub fn summarize(&self) -> BudgetSummary {
        BudgetService::new(&self.config).summarize(self.inputs())
    }

    pub fn ratios(&self, summary: &BudgetSummary) -> FinancialRatios {
        FinancialRatios::from_summary(summary, self.debt_payments)
    }
}
