//! User settings for MoneyCount
//!
//! Manages display and bookkeeping preferences: currency symbol, the
//! accumulated-savings boundary, backup policy and log level.

use serde::{Deserialize, Serialize};

use super::paths::MoneyCountPaths;
use crate::error::MoneyCountError;
use crate::services::SavingsBound;

/// User settings for MoneyCount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether accumulated savings include the viewed month
    #[serde(default)]
    pub savings_bound: SavingsBound,

    /// Copy the ledger file to the backup directory before each save
    #[serde(default = "default_backup_on_save")]
    pub backup_on_save: bool,

    /// Number of backups to keep
    #[serde(default = "default_backup_retention")]
    pub backup_retention: usize,

    /// Default tracing level when `MONEYCOUNT_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_backup_on_save() -> bool {
    true
}

fn default_backup_retention() -> usize {
    10
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            savings_bound: SavingsBound::default(),
            backup_on_save: default_backup_on_save(),
            backup_retention: default_backup_retention(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &MoneyCountPaths) -> Result<Self, MoneyCountError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| MoneyCountError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| MoneyCountError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MoneyCountPaths) -> Result<(), MoneyCountError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            MoneyCountError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| MoneyCountError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
