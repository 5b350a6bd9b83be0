//! Monthly Summary Report
//!
//! Shows income, each expense block and the provisioning need side by side
//! for both members.

use crate::models::{MemberTotals, Money, SplitResult};
use crate::services::BudgetSummary;

const WIDTH: usize = 80;

/// Terminal rendering of a [`BudgetSummary`]
#[derive(Debug, Clone)]
pub struct SummaryReport<'a> {
    summary: &'a BudgetSummary,
    currency: &'a str,
    month: Option<&'a str>,
}

impl<'a> SummaryReport<'a> {
    pub fn new(summary: &'a BudgetSummary, currency: &'a str) -> Self {
        Self {
            summary,
            currency,
            month: None,
        }
    }

    /// Label the report with the month the transactions were filtered to
    pub fn for_month(mut self, month: &'a str) -> Self {
        self.month = Some(month);
        self
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(self.currency)
    }

    fn totals_row(&self, label: &str, totals: &MemberTotals) -> String {
        format!(
            "{:<30} {:>15} {:>15} {:>15}\n",
            label,
            self.money(totals.member1),
            self.money(totals.member2),
            self.money(totals.total)
        )
    }

    fn split_row(&self, label: &str, split: &SplitResult) -> String {
        format!(
            "  {:<28} {:>15} {:>15} {:>15}\n",
            truncate(label, 28),
            self.money(split.member1),
            self.money(split.member2),
            self.money(split.total)
        )
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let s = self.summary;
        let mut output = String::new();

        // Header
        match self.month {
            Some(month) => output.push_str(&format!("Household Budget - {}\n", month)),
            None => output.push_str("Household Budget\n"),
        }
        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');

        output.push_str(&format!(
            "{:<30} {:>15} {:>15} {:>15}\n",
            "", truncate(&s.member1, 15), truncate(&s.member2, 15), "Total"
        ));
        output.push_str(&"-".repeat(WIDTH));
        output.push('\n');
        output.push_str(&self.totals_row("Income", &s.income));
        output.push_str(&self.split_row("Variable spending", &s.variable));

        if !s.fixed_lines.is_empty() {
            output.push_str("\nFIXED CHARGES (monthly)\n");
            for line in &s.fixed_lines {
                output.push_str(&self.split_row(&line.label, &line.split));
            }
        }
        output.push_str(&self.totals_row("Fixed total", &s.fixed));

        if !s.provision_items.is_empty() {
            output.push_str("\nPROVISIONS\n");
            for item in &s.provision_items {
                output.push_str(&self.split_row(&item.name, &item.split));
            }
        }
        output.push_str(&self.totals_row("Provisions total", &s.provisions));

        // Grand totals
        output.push_str(&"-".repeat(WIDTH));
        output.push('\n');
        output.push_str(&self.totals_row("TOTAL EXPENSES", &s.expenses));
        output.push_str(&self.totals_row("BALANCE", &s.balances));

        // Family account
        output.push_str("\nShared account\n");
        output.push_str(&format!(
            "  Required:        {:>15}\n",
            self.money(s.family.required)
        ));
        output.push_str(&format!(
            "  Account balance: {:>15}\n",
            self.money(s.family.account_balance)
        ));
        if s.family.needed.is_positive() {
            output.push_str(&format!(
                "  Still needed:    {:>15}  ({} {}, {} {})\n",
                self.money(s.family.needed),
                s.member1,
                self.money(s.family.transfer.member1),
                s.member2,
                self.money(s.family.transfer.member2)
            ));
        } else {
            output.push_str(&format!(
                "  Surplus:         {:>15}\n",
                self.money(s.family.surplus)
            ));
        }

        if !s.categories.is_empty() {
            output.push_str(&format!("\n{:<35} {:>15} {:>8} {:>8}\n", "Category", "Amount", "Count", "%"));
            output.push_str(&"-".repeat(WIDTH));
            output.push('\n');
            for category in &s.categories {
                output.push_str(&format!(
                    "  {:<33} {:>15} {:>8} {:>7.1}%\n",
                    truncate(&category.category, 33),
                    self.money(category.amount),
                    category.count,
                    share(category.amount, s.variable.total)
                ));
            }
        }

        output
    }
}

/// Percentage of `part` in `whole`, 0 when the whole is empty
fn share(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
