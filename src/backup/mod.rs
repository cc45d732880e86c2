//! Backup system for MoneyCount
//!
//! Provides rolling backups of the ledger file with a retention count and
//! restore functionality.
//!
//! Backups are byte-for-byte copies of `data/ledger.json` named
//! `ledger-YYYYMMDD-HHMMSS-mmm.json`. Restoring re-validates the copy as a
//! ledger document before it replaces the live file.
//!
//! # Example
//!
//! ```rust,ignore
//! use moneycount::backup::{BackupManager, RestoreManager};
//! use moneycount::config::{MoneyCountPaths, Settings};
//!
//! let paths = MoneyCountPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let backups = BackupManager::from_settings(&paths, &settings);
//!
//! let (created, _deleted) = backups.create_backup_with_retention()?;
//!
//! if let Some(path) = created {
//!     let result = RestoreManager::new(paths.ledger_file()).restore_from_file(&path)?;
//!     println!("{}", result.summary());
//! }
//! ```

mod manager;
mod restore;

pub use manager::{BackupInfo, BackupManager};
pub use restore::{RestoreManager, RestoreResult};
