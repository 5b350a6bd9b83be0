//! Transaction record model
//!
//! Read-only view of a bank transaction as fetched by the calling layer.
//! Only the fields the budget engine reads are kept.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A transaction as seen by the budget engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Operation date, `None` when the source date could not be read
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub category: String,
    /// Signed amount (negative for an expense)
    pub amount: Money,
    /// Flagged as an expense by the source system
    #[serde(default)]
    pub is_expense: bool,
    /// Excluded from budget math (inter-account transfers and the like)
    #[serde(default)]
    pub excluded: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TransactionRecord {
    pub fn new(date: Option<NaiveDate>, label: impl Into<String>, amount: Money) -> Self {
        Self {
            date,
            label: label.into(),
            category: String::new(),
            amount,
            is_expense: amount.is_negative(),
            excluded: false,
            tags: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn excluded(mut self) -> Self {
        self.excluded = true;
        self
    }

    /// Whether this record counts toward variable expenses
    pub fn is_budget_expense(&self) -> bool {
        !self.excluded && (self.is_expense || self.amount.is_negative())
    }

    /// Whether the operation date falls in the given calendar month
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.date
            .map(|d| d.year() == year && d.month() == month)
            .unwrap_or(false)
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(f, "{} {} {}", date, self.label, self.amount),
            None => write!(f, "---------- {} {}", self.label, self.amount),
        }
    }
}
