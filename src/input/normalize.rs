//! Normalize-or-default boundary
//!
//! Every fallback applied to user-editable configuration lives here:
//!
//! | input                         | fallback                          |
//! |-------------------------------|-----------------------------------|
//! | non-numeric amount            | 0                                 |
//! | negative or non-numeric income| 0                                 |
//! | unknown cadence               | monthly                           |
//! | unknown split mode            | 50/50                             |
//! | manual split without values   | 50/50 (one value: its complement) |
//! | percentage outside 0-100      | clamped                           |
//! | unknown provision base        | total income                      |
//! | unreadable transaction date   | undated                           |
//!
//! The calculation layer only ever sees the typed models.

use chrono::NaiveDate;
use tracing::warn;

use super::records::{RawBudgetConfig, RawFixedLine, RawProvision, RawTransaction};
use crate::models::{
    BudgetConfig, Cadence, FixedLine, Money, Provision, ProvisionBase, SplitPolicy,
    TransactionRecord,
};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];

/// Amount in cents, 0 when not a finite number or beyond [`Money::MAX_INPUT_UNITS`]
pub fn money_or_zero(amount: f64) -> Money {
    if !amount.is_finite() {
        warn!(amount, "non-numeric amount, using 0");
        return Money::zero();
    }
    if amount.abs() > Money::MAX_INPUT_UNITS {
        warn!(amount, "amount out of range, using 0");
        return Money::zero();
    }
    Money::from_major(amount)
}

/// Income in cents, 0 when negative or not a finite number
pub fn income_or_zero(amount: f64) -> Money {
    let income = money_or_zero(amount);
    if income.is_negative() {
        warn!(%income, "negative income, using 0");
        return Money::zero();
    }
    income
}

/// Percentage clamped to 0-100, `default` when not a finite number
pub fn percent_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v.clamp(0.0, 100.0),
        Some(v) => {
            warn!(value = v, default, "non-numeric percentage, using default");
            default
        }
        None => default,
    }
}

/// Cadence keyword, monthly when unrecognised
pub fn cadence_or_default(freq: &str) -> Cadence {
    Cadence::parse(freq).unwrap_or_else(|| {
        if !freq.trim().is_empty() {
            warn!(freq, "unknown cadence, treating as monthly");
        }
        Cadence::Monthly
    })
}

/// Manual percentages; a single value gets its complement, none gets 50/50
fn manual_percentages(split1: Option<f64>, split2: Option<f64>) -> (f64, f64) {
    let split1 = split1.filter(|v| v.is_finite());
    let split2 = split2.filter(|v| v.is_finite());
    match (split1, split2) {
        (Some(a), Some(b)) => (percent_or(Some(a), 50.0), percent_or(Some(b), 50.0)),
        (Some(a), None) => {
            let a = percent_or(Some(a), 50.0);
            (a, 100.0 - a)
        }
        (None, Some(b)) => {
            let b = percent_or(Some(b), 50.0);
            (100.0 - b, b)
        }
        (None, None) => (50.0, 50.0),
    }
}

/// Recognise a split mode keyword
///
/// Returns `None` for an empty mode so that callers can apply their own
/// default (a fixed line without a mode follows the household policy).
pub fn parse_split_mode(mode: &str, split1: Option<f64>, split2: Option<f64>) -> Option<SplitPolicy> {
    let mode = mode.trim().to_lowercase();
    let policy = match mode.as_str() {
        "" => return None,
        "revenus" | "clé" | "cle" | "income" | "proportional" | "prorata" => {
            SplitPolicy::IncomeProportional
        }
        "manuel" | "manual" | "custom" => {
            let (member1, member2) = manual_percentages(split1, split2);
            SplitPolicy::Manual { member1, member2 }
        }
        "50/50" | "equal" | "egal" | "égal" => SplitPolicy::Equal,
        "100/0" | "member1" | "membre1" => SplitPolicy::Member1Only,
        "0/100" | "member2" | "membre2" => SplitPolicy::Member2Only,
        other => {
            warn!(mode = other, "unknown split mode, using 50/50");
            SplitPolicy::Equal
        }
    };
    Some(policy)
}

/// Split mode keyword, 50/50 when empty or unrecognised
pub fn split_policy_or_default(mode: &str, split1: Option<f64>, split2: Option<f64>) -> SplitPolicy {
    parse_split_mode(mode, split1, split2).unwrap_or(SplitPolicy::Equal)
}

/// Provision base keyword, total income when unrecognised
pub fn provision_base_or_default(mode: &str, fixed_amount: Option<f64>) -> ProvisionBase {
    match mode.trim().to_lowercase().as_str() {
        "total" | "total_income" | "revenus_total" | "" => ProvisionBase::TotalIncome,
        "member1" | "membre1" | "member1_income" => ProvisionBase::Member1Income,
        "member2" | "membre2" | "member2_income" => ProvisionBase::Member2Income,
        "fixed" | "fixe" | "montant_fixe" | "fixed_amount" => {
            ProvisionBase::Fixed(money_or_zero(fixed_amount.unwrap_or(0.0)))
        }
        other => {
            warn!(base = other, "unknown provision base, using total income");
            ProvisionBase::TotalIncome
        }
    }
}

/// Operation date, `None` when unreadable
pub fn date_or_none(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }
    // Stores sometimes return a full timestamp; the day is enough.
    let day = date.get(..10).unwrap_or(date);
    let parsed = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(day, format).ok());
    if parsed.is_none() {
        warn!(date, "unreadable transaction date");
    }
    parsed
}

pub fn budget_config(raw: &RawBudgetConfig) -> BudgetConfig {
    let member1 = if raw.member1.trim().is_empty() {
        "Member 1".to_string()
    } else {
        raw.member1.clone()
    };
    let member2 = if raw.member2.trim().is_empty() {
        "Member 2".to_string()
    } else {
        raw.member2.clone()
    };

    BudgetConfig {
        member1,
        member2,
        income1: income_or_zero(raw.rev1),
        income2: income_or_zero(raw.rev2),
        default_policy: split_policy_or_default(&raw.split_mode, raw.split1, raw.split2),
    }
}

pub fn fixed_line(raw: &RawFixedLine) -> FixedLine {
    FixedLine {
        label: raw.label.clone(),
        amount: money_or_zero(raw.amount),
        cadence: cadence_or_default(&raw.freq),
        policy: parse_split_mode(&raw.split_mode, raw.split1, raw.split2),
        active: raw.active,
    }
}

pub fn provision(raw: &RawProvision) -> Provision {
    Provision {
        name: raw.name.clone(),
        percentage: percent_or(Some(raw.percentage), 0.0),
        base: provision_base_or_default(&raw.base_calculation, raw.fixed_amount),
        policy: split_policy_or_default(&raw.split_mode, raw.split_member1, raw.split_member2),
        active: raw.is_active,
    }
}

pub fn transaction(raw: &RawTransaction) -> TransactionRecord {
    TransactionRecord {
        date: date_or_none(&raw.date_op),
        label: raw.label.clone(),
        category: raw.category.clone(),
        amount: money_or_zero(raw.amount),
        is_expense: raw.is_expense,
        excluded: raw.exclude,
        tags: raw.tags.clone(),
    }
}
