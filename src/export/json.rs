//! JSON Export functionality
//!
//! Exports a computed monthly summary to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::services::{BudgetSummary, FinancialRatios};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Summary export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Month the transactions were filtered to, as `YYYY-MM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,

    pub summary: BudgetSummary,

    pub ratios: FinancialRatios,
}

impl SummaryExport {
    pub fn new(summary: BudgetSummary, ratios: FinancialRatios, month: Option<String>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            month,
            summary,
            ratios,
        }
    }
}

/// Write any serializable report as JSON
pub fn export_json<T: Serialize, W: Write>(
    value: &T,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)
    } else {
        serde_json::to_writer(&mut *writer, value)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BudgetConfig, Money, Provision, ProvisionBase, SplitPolicy, TransactionRecord,
    };
    use crate::services::{BudgetInputs, BudgetService};

    fn sample_export() -> SummaryExport {
        let config = BudgetConfig::new("Alice", "Bob")
            .with_incomes(Money::from_major(3000.0), Money::from_major(2000.0))
            .with_policy(SplitPolicy::IncomeProportional);
        let transactions = vec![TransactionRecord::new(None, "Groceries", Money::from_major(-120.40))];
        let provisions = vec![Provision::new("Emergency", 10.0, ProvisionBase::TotalIncome)];
        let summary = BudgetService::new(&config).summarize(BudgetInputs {
            transactions: &transactions,
            fixed_lines: &[],
            provisions: &provisions,
            account_balance: Money::zero(),
        });
        let ratios = FinancialRatios::from_summary(&summary, Money::zero());
        SummaryExport::new(summary, ratios, Some("2024-03".into()))
    }

    #[test]
    fn test_export_contains_schema_and_amounts() {
        let export = sample_export();
        let mut out = Vec::new();
        export_json(&export, &mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("\"schema_version\": \"1.0.0\""));
        assert!(text.contains("\"month\": \"2024-03\""));
        // Money serializes as cents
        assert!(text.contains("12040"));
    }

    #[test]
    fn test_compact_export_is_one_line() {
        let mut out = Vec::new();
        export_json(&sample_export(), &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with("}\n"));
    }
}
