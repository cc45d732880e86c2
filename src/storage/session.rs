//! Scoped access to the persisted ledger
//!
//! A `LedgerSession` loads the ledger once, hands it out for mutation and
//! writes it back exactly once: on `commit()`, or from `Drop` if the session
//! goes away with unsaved changes.

use tracing::{debug, error, info};

use crate::backup::BackupManager;
use crate::error::MoneyCountResult;
use crate::models::Ledger;

use super::ledger::LedgerRepository;

/// Owns the loaded ledger for the duration of one command
pub struct LedgerSession {
    repository: LedgerRepository,
    backups: Option<BackupManager>,
    ledger: Ledger,
    baseline: Ledger,
    committed: bool,
}

impl LedgerSession {
    /// Load the ledger, starting empty if there is nothing usable on disk
    pub fn open(repository: LedgerRepository) -> MoneyCountResult<Self> {
        let ledger = repository.load()?.unwrap_or_default();
        Ok(Self {
            repository,
            backups: None,
            baseline: ledger.clone(),
            ledger,
            committed: false,
        })
    }

    /// Back up the previous ledger file before writing a new one
    pub fn with_backups(mut self, backups: BackupManager) -> Self {
        self.backups = Some(backups);
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Whether the ledger differs from what was loaded
    pub fn is_dirty(&self) -> bool {
        self.ledger != self.baseline
    }

    pub fn repository(&self) -> &LedgerRepository {
        &self.repository
    }

    /// Save pending changes and close the session
    pub fn commit(mut self) -> MoneyCountResult<()> {
        self.committed = true;
        self.flush()
    }

    fn flush(&mut self) -> MoneyCountResult<()> {
        if !self.is_dirty() {
            debug!("ledger unchanged, nothing to save");
            return Ok(());
        }

        if let Some(backups) = &self.backups {
            if let Some(path) = backups.create_backup_with_retention()?.0 {
                info!(backup = %path.display(), "backed up ledger before save");
            }
        }

        self.repository.save(&self.ledger)?;
        self.baseline = self.ledger.clone();
        Ok(())
    }
}

impl Drop for LedgerSession {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Err(err) = self.flush() {
            error!(
                path = %self.repository.path().display(),
                error = %err,
                "failed to save ledger on exit"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Month};
    use crate::services::BudgetService;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn january() -> Month {
        Month::new(2025, 1).unwrap()
    }

    fn repo_in(temp_dir: &TempDir) -> (LedgerRepository, PathBuf) {
        let path = temp_dir.path().join("data").join("ledger.json");
        (LedgerRepository::new(path.clone()), path)
    }

    #[test]
    fn test_commit_persists_changes() {
        let temp_dir = TempDir::new().unwrap();
        let (repo, _) = repo_in(&temp_dir);

        let mut session = LedgerSession::open(repo.clone()).unwrap();
        {
            let mut service = BudgetService::open(session.ledger_mut(), january());
            service.set_income(Money::from_units(1500)).unwrap();
        }
        assert!(session.is_dirty());
        session.commit().unwrap();

        let reopened = LedgerSession::open(repo).unwrap();
        let record = reopened.ledger().get_record(january()).unwrap();
        assert_eq!(record.income(), Money::from_units(1500));
        assert!(!reopened.is_dirty());
    }

    #[test]
    fn test_drop_without_commit_still_saves() {
        let temp_dir = TempDir::new().unwrap();
        let (repo, path) = repo_in(&temp_dir);

        {
            let mut session = LedgerSession::open(repo.clone()).unwrap();
            let mut service = BudgetService::open(session.ledger_mut(), january());
            service
                .add_expense("Groceries", Money::from_units(80), false)
                .unwrap();
        }

        assert!(path.exists());
        let ledger = repo.load().unwrap().unwrap();
        assert_eq!(ledger.get_record(january()).unwrap().expense_count(), 1);
    }

    #[test]
    fn test_read_only_session_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let (repo, path) = repo_in(&temp_dir);

        let session = LedgerSession::open(repo).unwrap();
        assert!(session.ledger().is_empty());
        session.commit().unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_backup_taken_before_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let (repo, _) = repo_in(&temp_dir);
        let backup_dir = temp_dir.path().join("backups");

        let mut first = LedgerSession::open(repo.clone()).unwrap();
        BudgetService::open(first.ledger_mut(), january());
        first.commit().unwrap();

        let manager = BackupManager::new(backup_dir.clone(), repo.path().to_path_buf(), 5);
        let mut second = LedgerSession::open(repo).unwrap().with_backups(manager.clone());
        BudgetService::open(second.ledger_mut(), january().next());
        second.commit().unwrap();

        assert_eq!(manager.list_backups().unwrap().len(), 1);
    }
}
