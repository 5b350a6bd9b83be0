//! Path management for the household budget CLI
//!
//! ## Path Resolution Order
//!
//! 1. `HOUSEHOLD_BUDGET_DIR` environment variable (if set)
//! 2. The platform configuration directory (`~/.config/household-budget` on
//!    Linux, `~/Library/Application Support/household-budget` on macOS,
//!    `%APPDATA%\household-budget` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BudgetError;

/// Environment variable overriding the base directory
pub const BASE_DIR_ENV: &str = "HOUSEHOLD_BUDGET_DIR";

/// Manages all paths used by the CLI
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Create a new BudgetPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = if let Ok(custom) = std::env::var(BASE_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the directory where scenario files are kept by default
    pub fn scenarios_dir(&self) -> PathBuf {
        self.base_dir.join("scenarios")
    }

    /// Get the default scenario path
    pub fn default_scenario(&self) -> PathBuf {
        self.scenarios_dir().join("household.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.scenarios_dir()).map_err(|e| {
            BudgetError::Io(format!("Failed to create scenarios directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if the CLI has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    ProjectDirs::from("", "", "household-budget")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BudgetError::Config("Could not determine a home directory".into()))
}
