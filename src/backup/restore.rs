//! Backup restoration for MoneyCount
//!
//! Validates a backup as a ledger document before it replaces the ledger
//! file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::{MoneyCountError, MoneyCountResult};
use crate::storage::{write_json_atomic, LedgerDocument};

/// Handles restoring from backups
pub struct RestoreManager {
    ledger_file: PathBuf,
}

impl RestoreManager {
    /// Create a new RestoreManager
    pub fn new(ledger_file: PathBuf) -> Self {
        Self { ledger_file }
    }

    /// Replace the ledger file with the contents of a backup
    ///
    /// The current ledger is left untouched if the backup does not parse.
    pub fn restore_from_file(&self, backup_path: &Path) -> MoneyCountResult<RestoreResult> {
        let document = read_backup(backup_path)?;
        write_json_atomic(&self.ledger_file, &document)?;

        let result = RestoreResult::from_document(&document);
        info!(
            backup = %backup_path.display(),
            months = result.months,
            "restored ledger from backup"
        );
        Ok(result)
    }

    /// Validate a backup file without restoring it
    pub fn validate_backup(&self, backup_path: &Path) -> MoneyCountResult<RestoreResult> {
        read_backup(backup_path).map(|document| RestoreResult::from_document(&document))
    }
}

fn read_backup(path: &Path) -> MoneyCountResult<LedgerDocument> {
    if !path.exists() {
        return Err(MoneyCountError::Backup(format!(
            "Backup not found: {}",
            path.display()
        )));
    }
    LedgerDocument::read(path).map_err(|e| {
        MoneyCountError::Backup(format!("{} is not a valid backup: {}", path.display(), e))
    })
}

/// What a backup holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreResult {
    /// Schema version of the backup
    pub schema_version: u32,
    /// When the backed-up ledger was saved
    pub saved_at: DateTime<Utc>,
    /// Number of monthly records
    pub months: usize,
    /// Number of expenses across all months
    pub expenses: usize,
}

impl RestoreResult {
    fn from_document(document: &LedgerDocument) -> Self {
        Self {
            schema_version: document.schema_version,
            saved_at: document.saved_at,
            months: document.ledger.len(),
            expenses: document
                .ledger
                .records()
                .map(|record| record.expense_count())
                .sum(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} month(s), {} expense(s), saved {}",
            self.months,
            self.expenses,
            self.saved_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
