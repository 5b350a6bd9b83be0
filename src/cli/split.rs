//! One-off split CLI command

use clap::Args;
use serde::Serialize;

use super::{parse_amount, render};
use crate::config::{OutputFormat, Settings};
use crate::error::{BudgetError, BudgetResult};
use crate::input::normalize::parse_split_mode;
use crate::models::{BudgetConfig, Money, SplitPolicy, SplitResult};
use crate::services::split_for;

/// Arguments of the `split` command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Amount to split (e.g., "1234.57" or "1234,57")
    #[arg(allow_hyphen_values = true, value_parser = parse_amount)]
    pub amount: Money,

    /// Split mode: revenus, manuel, 50/50, 100/0 or 0/100
    #[arg(short, long, default_value = "50/50")]
    pub policy: String,

    /// Monthly income of the first member
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub income1: Money,

    /// Monthly income of the second member
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub income2: Money,

    /// Manual percentage of the first member
    #[arg(long)]
    pub split1: Option<f64>,

    /// Manual percentage of the second member
    #[arg(long)]
    pub split2: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Serialize)]
struct SplitOutput {
    policy: SplitPolicy,
    #[serde(flatten)]
    split: SplitResult,
}

/// Split an amount and render the shares
pub fn render_split(settings: &Settings, args: SplitArgs) -> BudgetResult<String> {
    let policy = parse_split_mode(&args.policy, args.split1, args.split2).ok_or_else(|| {
        BudgetError::Validation("A split policy is required (e.g., revenus or 50/50)".into())
    })?;
    let config = BudgetConfig::default().with_incomes(args.income1, args.income2);
    let split = split_for(&config, args.amount, policy);

    let output = SplitOutput { policy, split };
    let currency = settings.currency_symbol.as_str();
    render(&output, args.format.unwrap_or(settings.output_format), || {
        format!(
            "Split of {} ({})\n  {:<10} {:>15}  ({:.2}%)\n  {:<10} {:>15}  ({:.2}%)\n",
            split.total.format_with_symbol(currency),
            policy,
            config.member1,
            split.member1.format_with_symbol(currency),
            split.member1_pct,
            config.member2,
            split.member2.format_with_symbol(currency),
            split.member2_pct
        )
    })
}

/// Handle the `split` command
pub fn handle_split_command(settings: &Settings, args: SplitArgs) -> BudgetResult<()> {
    print!("{}", render_split(settings, args)?);
    Ok(())
}
