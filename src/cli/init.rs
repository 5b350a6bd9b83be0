//! `init` and `config` commands
//!
//! First-run setup: creates the configuration directory, default settings
//! and a starter scenario to edit.

use tracing::info;

use crate::config::{BudgetPaths, Settings};
use crate::error::BudgetResult;

/// Starter scenario written by `init`
pub const SAMPLE_SCENARIO: &str = r#"{
  "config": {
    "member1": "Member 1",
    "member2": "Member 2",
    "rev1": 2500,
    "rev2": 2000,
    "split_mode": "revenus"
  },
  "fixed_lines": [
    { "label": "Rent", "amount": 1100, "freq": "mensuelle" },
    { "label": "Home insurance", "amount": 240, "freq": "annuelle" },
    { "label": "Water", "amount": 90, "freq": "trimestrielle", "split_mode": "50/50" }
  ],
  "provisions": [
    { "name": "Emergency fund", "percentage": 5, "base_calculation": "total" },
    { "name": "Holidays", "base_calculation": "fixed", "fixed_amount": 150 }
  ],
  "transactions": [],
  "account_balance": 0,
  "debt_payments": 0
}
"#;

/// Create directories, settings and the starter scenario; existing files are kept
pub fn handle_init_command(paths: &BudgetPaths, settings: &Settings) -> BudgetResult<()> {
    println!("Initializing household budget at: {}", paths.base_dir().display());
    paths.ensure_directories()?;

    if !paths.is_initialized() {
        settings.save(paths)?;
    }

    let scenario = paths.default_scenario();
    if scenario.exists() {
        println!("Keeping existing scenario: {}", scenario.display());
    } else {
        std::fs::write(&scenario, SAMPLE_SCENARIO)?;
        info!(path = %scenario.display(), "wrote starter scenario");
        println!("Starter scenario written to: {}", scenario.display());
    }

    println!("Initialization complete!");
    println!();
    println!("Edit the scenario, then run 'household summary'.");
    Ok(())
}

/// Show paths and settings
pub fn handle_config_command(paths: &BudgetPaths, settings: &Settings) -> BudgetResult<()> {
    println!("Household Budget Configuration");
    println!("==============================");
    println!("Base directory:    {}", paths.base_dir().display());
    println!("Settings file:     {}", paths.settings_file().display());
    println!("Scenarios:         {}", paths.scenarios_dir().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Output format:   {:?}", settings.output_format);
    println!(
        "  Default scenario: {}",
        settings.resolve_scenario(None, paths).display()
    );
    Ok(())
}
