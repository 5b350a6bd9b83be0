//! Loan Repayment Report

use crate::models::Money;
use crate::services::projection::{
    amortization_schedule, loan_interest, loan_payment, AmortizationRow,
};

/// Monthly payment of a loan with its optional month-by-month schedule
#[derive(Debug, Clone)]
pub struct LoanReport {
    pub principal: Money,
    pub annual_rate_pct: f64,
    pub months: u32,
    pub payment: Money,
    pub total_interest: Money,
    /// Empty unless requested
    pub schedule: Vec<AmortizationRow>,
}

impl LoanReport {
    /// Compute the payment, and the schedule when `with_schedule` is set
    pub fn generate(principal: Money, annual_rate_pct: f64, months: u32, with_schedule: bool) -> Self {
        let schedule = if with_schedule {
            amortization_schedule(principal, annual_rate_pct, months)
        } else {
            Vec::new()
        };
        Self {
            principal,
            annual_rate_pct,
            months,
            payment: loan_payment(principal, annual_rate_pct, months),
            total_interest: loan_interest(principal, annual_rate_pct, months),
            schedule,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Loan of {} at {:.2}% over {} months\n",
            self.principal.format_with_symbol(currency),
            self.annual_rate_pct,
            self.months
        ));
        output.push_str(&"=".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "Monthly payment: {:>15}\n",
            self.payment.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "Total interest:  {:>15}\n",
            self.total_interest.format_with_symbol(currency)
        ));

        if !self.schedule.is_empty() {
            output.push('\n');
            output.push_str(&format!(
                "{:>6} {:>15} {:>15} {:>15} {:>15}\n",
                "Month", "Payment", "Interest", "Principal", "Balance"
            ));
            output.push_str(&"-".repeat(70));
            output.push('\n');
            for row in &self.schedule {
                output.push_str(&format!(
                    "{:>6} {:>15} {:>15} {:>15} {:>15}\n",
                    row.month, row.payment, row.interest, row.principal, row.balance
                ));
            }
        }

        output
    }
}
