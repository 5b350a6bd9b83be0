//! Financial Health Report

use crate::services::FinancialRatios;

/// Terminal rendering of [`FinancialRatios`]
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub ratios: FinancialRatios,
}

impl HealthReport {
    pub fn new(ratios: FinancialRatios) -> Self {
        Self { ratios }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let r = &self.ratios;
        let mut output = String::new();

        output.push_str("Financial Health\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("Savings rate:   {:>10.2}%\n", r.savings_rate));
        output.push_str(&format!("Expense ratio:  {:>10.2}%\n", r.expense_ratio));
        output.push_str(&format!("Debt ratio:     {:>10.2}%\n", r.debt_ratio));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!("Score:          {:>7}/100 ({})\n", r.score, r.tier));

        output
    }
}
