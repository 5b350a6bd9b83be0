//! YAML Export functionality

use crate::error::{BudgetError, BudgetResult};
use serde::Serialize;
use std::io::Write;

/// Write any serializable report as YAML, preceded by a header comment
pub fn export_yaml<T: Serialize, W: Write>(value: &T, writer: &mut W) -> BudgetResult<()> {
    writeln!(writer, "# Household budget report")
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# Amounts are in cents.").map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, value).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FinancialRatios;
    use crate::models::Money;

    #[test]
    fn test_yaml_export() {
        let ratios = FinancialRatios::calculate(
            Money::from_major(5000.0),
            Money::from_major(3000.0),
            Money::from_major(250.0),
            Money::from_major(5000.0),
        );

        let mut out = Vec::new();
        export_yaml(&ratios, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# Household budget report"));
        assert!(text.contains("savings_rate: 40.0"));
        assert!(text.contains("tier: excellent"));
    }

    #[test]
    fn test_yaml_parses_back() {
        let ratios = FinancialRatios::calculate(
            Money::from_major(4000.0),
            Money::from_major(3800.0),
            Money::zero(),
            Money::from_major(4000.0),
        );

        let mut out = Vec::new();
        export_yaml(&ratios, &mut out).unwrap();
        let parsed: FinancialRatios = serde_yaml::from_str(&String::from_utf8(out).unwrap()).unwrap();
        assert_eq!(parsed, ratios);
    }
}
