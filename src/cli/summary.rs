//! Monthly summary CLI command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use super::render;
use crate::config::{BudgetPaths, OutputFormat, Settings};
use crate::error::BudgetResult;
use crate::export::SummaryExport;
use crate::input::{parse_month, Scenario};
use crate::reports::{HealthReport, SummaryReport};

/// Arguments of the `summary` command
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Scenario file (JSON or YAML); defaults to the configured scenario
    pub scenario: Option<PathBuf>,

    /// Only count transactions dated in this month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Output format; defaults to the configured format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Load a scenario and render its monthly summary
pub fn render_summary(
    paths: &BudgetPaths,
    settings: &Settings,
    args: SummaryArgs,
) -> BudgetResult<String> {
    let path = settings.resolve_scenario(args.scenario, paths);
    let mut household = Scenario::load(&path)?.normalize();

    if let Some(month) = &args.month {
        let (year, month) = parse_month(month)?;
        household.retain_month(year, month);
    }

    let summary = household.summarize();
    let ratios = household.ratios(&summary);
    info!(path = %path.display(), remaining = %summary.remaining, "computed summary");

    let export = SummaryExport::new(summary, ratios, args.month.clone());
    let format = args.format.unwrap_or(settings.output_format);
    render(&export, format, || {
        let report = SummaryReport::new(&export.summary, &settings.currency_symbol);
        let report = match args.month.as_deref() {
            Some(month) => report.for_month(month),
            None => report,
        };
        format!(
            "{}\n{}",
            report.format_terminal(),
            HealthReport::new(export.ratios).format_terminal()
        )
    })
}

/// Handle the `summary` command
pub fn handle_summary_command(
    paths: &BudgetPaths,
    settings: &Settings,
    args: SummaryArgs,
) -> BudgetResult<()> {
    print!("{}", render_summary(paths, settings, args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BudgetError;
    use tempfile::TempDir;

    const SCENARIO: &str = r#"
config:
  member1: Alex
  member2: Sam
  rev1: 3000
  rev2: 2000
  split_mode: revenus
fixed_lines:
  - { label: Rent, amount: 1200, freq: mensuelle }
  - { label: Insurance, amount: 600, freq: annuelle, split_mode: "50/50" }
provisions:
  - { name: Emergency, percentage: 10, base_calculation: total }
transactions:
  - { date_op: "2025-01-10", label: Market, category: Food, amount: -150 }
  - { date_op: "2025-02-03", label: Market, category: Food, amount: -90 }
account_balance: 800
"#;

    fn setup() -> (TempDir, BudgetPaths, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let scenario = temp_dir.path().join("household.yaml");
        std::fs::write(&scenario, SCENARIO).unwrap();
        (temp_dir, paths, scenario)
    }

    #[test]
    fn test_text_summary() {
        let (_temp_dir, paths, scenario) = setup();
        let args = SummaryArgs {
            scenario: Some(scenario),
            month: None,
            format: None,
        };
        let text = render_summary(&paths, &Settings::default(), args).unwrap();

        assert!(text.contains("Household Budget"));
        assert!(text.contains("€1250.00"));
        assert!(text.contains("Financial Health"));
    }

    #[test]
    fn test_month_filter_in_json() {
        let (_temp_dir, paths, scenario) = setup();
        let args = SummaryArgs {
            scenario: Some(scenario),
            month: Some("2025-02".into()),
            format: Some(OutputFormat::Json),
        };
        let text = render_summary(&paths, &Settings::default(), args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["month"], "2025-02");
        assert_eq!(value["summary"]["variable"]["total"], 9000);
        // Rent 1200 + insurance 50 + emergency 500 minus the 800 balance
        assert_eq!(value["summary"]["family"]["needed"], 95000);
    }

    #[test]
    fn test_invalid_month() {
        let (_temp_dir, paths, scenario) = setup();
        let args = SummaryArgs {
            scenario: Some(scenario),
            month: Some("February".into()),
            format: None,
        };
        let err = render_summary(&paths, &Settings::default(), args).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_missing_scenario() {
        let (temp_dir, paths, _scenario) = setup();
        let args = SummaryArgs {
            scenario: Some(temp_dir.path().join("missing.json")),
            month: None,
            format: None,
        };
        let err = render_summary(&paths, &Settings::default(), args).unwrap_err();
        assert!(matches!(err, BudgetError::Scenario { .. }));
    }
}
