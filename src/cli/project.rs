//! What-if projection CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_rate};
use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;
use crate::reports::LoanReport;
use crate::services::projection::{compound_growth, MAX_TERM_MONTHS};

/// Longest savings horizon accepted by `compound`
pub const MAX_YEARS: u32 = 100;

/// Projection subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Value of savings after monthly compounding
    Compound {
        /// Starting principal
        #[arg(value_parser = parse_amount)]
        principal: Money,
        /// Annual interest rate in percent (e.g., "5" or "4,5")
        #[arg(value_parser = parse_rate)]
        rate: f64,
        /// Number of years
        years: u32,
        /// Contribution added every month
        #[arg(short, long, value_parser = parse_amount, default_value = "0")]
        monthly: Money,
    },

    /// Monthly payment of an amortized loan
    Loan {
        /// Amount borrowed
        #[arg(value_parser = parse_amount)]
        principal: Money,
        /// Annual interest rate in percent
        #[arg(value_parser = parse_rate)]
        rate: f64,
        /// Term in months
        months: u32,
        /// Print the month-by-month schedule
        #[arg(short, long)]
        schedule: bool,
    },
}

/// Render a projection
pub fn render_projection(settings: &Settings, cmd: ProjectCommands) -> BudgetResult<String> {
    let currency = settings.currency_symbol.as_str();
    match cmd {
        ProjectCommands::Compound {
            principal,
            rate,
            years,
            monthly,
        } => {
            if years > MAX_YEARS {
                return Err(BudgetError::Validation(format!(
                    "Projection horizon must be at most {} years",
                    MAX_YEARS
                )));
            }
            let value = compound_growth(principal, rate, years, monthly);
            let contributed = principal + monthly.times(i64::from(years) * 12);
            Ok(format!(
                "Value after {} years at {:.2}%: {}\nContributed: {}\nGrowth:      {}\n",
                years,
                rate,
                value.format_with_symbol(currency),
                contributed.format_with_symbol(currency),
                (value - contributed).format_with_symbol(currency)
            ))
        }
        ProjectCommands::Loan {
            principal,
            rate,
            months,
            schedule,
        } => {
            if months == 0 || months > MAX_TERM_MONTHS {
                return Err(BudgetError::Validation(format!(
                    "Loan term must be between 1 and {} months",
                    MAX_TERM_MONTHS
                )));
            }
            Ok(LoanReport::generate(principal, rate, months, schedule).format_terminal(currency))
        }
    }
}

/// Handle a project command
pub fn handle_project_command(settings: &Settings, cmd: ProjectCommands) -> BudgetResult<()> {
    print!("{}", render_projection(settings, cmd)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound() {
        let text = render_projection(
            &Settings::default(),
            ProjectCommands::Compound {
                principal: Money::from_major(10000.0),
                rate: 5.0,
                years: 10,
                monthly: Money::zero(),
            },
        )
        .unwrap();
        assert!(text.contains("€16470.09"));
        assert!(text.contains("Growth:      €6470.09"));
    }

    #[test]
    fn test_loan() {
        let text = render_projection(
            &Settings::default(),
            ProjectCommands::Loan {
                principal: Money::from_major(200000.0),
                rate: 6.0,
                months: 360,
                schedule: false,
            },
        )
        .unwrap();
        assert!(text.contains("€1199.10"));
    }

    #[test]
    fn test_compound_rejects_long_horizon() {
        let err = render_projection(
            &Settings::default(),
            ProjectCommands::Compound {
                principal: Money::from_major(1000.0),
                rate: 5.0,
                years: u32::MAX,
                monthly: Money::from_major(1_000_000_000.0),
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_loan_rejects_long_term() {
        let err = render_projection(
            &Settings::default(),
            ProjectCommands::Loan {
                principal: Money::from_major(1000.0),
                rate: 5.0,
                months: u32::MAX,
                schedule: false,
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_loan_requires_term() {
        let err = render_projection(
            &Settings::default(),
            ProjectCommands::Loan {
                principal: Money::from_major(1000.0),
                rate: 6.0,
                months: 0,
                schedule: true,
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }
}
