//! Financial ratios CLI command

use clap::Args;

use super::{parse_amount, render};
use crate::config::{OutputFormat, Settings};
use crate::error::BudgetResult;
use crate::models::Money;
use crate::reports::HealthReport;
use crate::services::FinancialRatios;

/// Arguments of the `ratios` command
#[derive(Args, Debug)]
pub struct RatiosArgs {
    /// Monthly net income
    #[arg(value_parser = parse_amount)]
    pub income: Money,

    /// Monthly expenses
    #[arg(value_parser = parse_amount)]
    pub expenses: Money,

    /// Monthly debt payments
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    pub debt: Money,

    /// Monthly gross income used for the debt ratio; defaults to the net income
    #[arg(short, long, value_parser = parse_amount)]
    pub gross: Option<Money>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Compute and render the ratios
pub fn render_ratios(settings: &Settings, args: RatiosArgs) -> BudgetResult<String> {
    let gross = args.gross.unwrap_or(args.income);
    let ratios = FinancialRatios::calculate(args.income, args.expenses, args.debt, gross);

    render(&ratios, args.format.unwrap_or(settings.output_format), || {
        HealthReport::new(ratios).format_terminal()
    })
}

/// Handle the `ratios` command
pub fn handle_ratios_command(settings: &Settings, args: RatiosArgs) -> BudgetResult<()> {
    print!("{}", render_ratios(settings, args)?);
    Ok(())
}
