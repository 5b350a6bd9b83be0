//! Raw input records
//!
//! Loosely typed records as supplied by the transaction and configuration
//! stores. Field names follow the stored layout. Numbers may arrive as
//! numbers, numeric strings (`"12,50"`), `null` or garbage; everything
//! deserializes, and unreadable values become `NaN` to be defaulted by
//! [`super::normalize`].

use serde::de::{Deserializer, IgnoredAny};
use serde::Deserialize;

/// Any JSON/YAML value, kept only as far as a number or text is readable
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Flag(bool),
    Text(String),
    Other(IgnoredAny),
}

/// Parse a user-typed number, accepting a decimal comma and a currency sign
pub(crate) fn parse_loose_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .trim_end_matches('€')
        .trim_start_matches('€')
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned.parse::<f64>().ok()
}

pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Number(n) => n,
        Loose::Text(text) => parse_loose_number(&text).unwrap_or(f64::NAN),
        Loose::Flag(_) | Loose::Other(_) => f64::NAN,
    })
}

fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Number(n) => Some(n),
        Loose::Text(text) if text.trim().is_empty() => None,
        Loose::Text(text) => Some(parse_loose_number(&text).unwrap_or(f64::NAN)),
        Loose::Flag(_) | Loose::Other(_) => None,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Flag(flag) => flag,
        Loose::Number(n) => n != 0.0,
        Loose::Text(text) => matches!(
            text.trim().to_lowercase().as_str(),
            "true" | "1" | "yes" | "oui"
        ),
        Loose::Other(_) => false,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Text(text) => text,
        Loose::Number(n) => n.to_string(),
        Loose::Flag(flag) => flag.to_string(),
        Loose::Other(_) => String::new(),
    })
}

fn default_true() -> bool {
    true
}

/// Household configuration as stored
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawBudgetConfig {
    #[serde(default, deserialize_with = "lenient_string")]
    pub member1: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub member2: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rev1: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rev2: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub split_mode: String,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub split1: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub split2: Option<f64>,
}

/// Fixed line as stored
#[derive(Debug, Clone, Deserialize)]
pub struct RawFixedLine {
    #[serde(default, deserialize_with = "lenient_string")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub freq: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub split_mode: String,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub split1: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub split2: Option<f64>,
    #[serde(default = "default_true", deserialize_with = "lenient_bool")]
    pub active: bool,
}

/// Provision as stored
#[derive(Debug, Clone, Deserialize)]
pub struct RawProvision {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub percentage: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub base_calculation: String,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub fixed_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub split_mode: String,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub split_member1: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub split_member2: Option<f64>,
    #[serde(default = "default_true", deserialize_with = "lenient_bool")]
    pub is_active: bool,
}

/// Transaction as returned by the transaction store
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransaction {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date_op: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_expense: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub exclude: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_loose_number() {
        assert_eq!(parse_loose_number("12,50"), Some(12.5));
        assert_eq!(parse_loose_number(" 1 234.5 € "), Some(1234.5));
        assert_eq!(parse_loose_number("-3"), Some(-3.0));
        assert_eq!(parse_loose_number("abc"), None);
    }

    #[test]
    fn test_fixed_line_tolerates_bad_values() {
        let line: RawFixedLine = serde_json::from_str(
            r#"{"label": "Internet", "amount": "39,99", "freq": null, "split_mode": 5, "active": 1}"#,
        )
        .unwrap();
        assert_eq!(line.amount, 39.99);
        assert_eq!(line.freq, "");
        assert_eq!(line.split_mode, "5");
        assert!(line.active);
        assert!(line.split1.is_none());
    }

    #[test]
    fn test_garbage_amount_becomes_nan() {
        let line: RawFixedLine =
            serde_json::from_str(r#"{"label": "X", "amount": {"nested": true}}"#).unwrap();
        assert!(line.amount.is_nan());
        assert!(line.active);
    }

    #[test]
    fn test_provision_defaults() {
        let provision: RawProvision = serde_json::from_str(r#"{"name": "Car"}"#).unwrap();
        assert_eq!(provision.percentage, 0.0);
        assert!(provision.is_active);
        assert!(provision.fixed_amount.is_none());
    }

    #[test]
    fn test_transaction_from_yaml() {
        let txn: RawTransaction = serde_yaml::from_str(
            "date_op: 2025-03-02\nlabel: Market\ncategory: Groceries\namount: -42.1\nis_expense: true\nexclude: false\ntags: [food]\n",
        )
        .unwrap();
        assert_eq!(txn.date_op, "2025-03-02");
        assert_eq!(txn.amount, -42.1);
        assert!(txn.is_expense);
        assert_eq!(txn.tags, vec!["food".to_string()]);
    }
}
