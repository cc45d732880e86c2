//! Backup manager for MoneyCount
//!
//! Keeps rolling timestamped copies of the ledger file with a retention
//! count.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{MoneyCountPaths, Settings};
use crate::error::{MoneyCountError, MoneyCountResult};

const BACKUP_PREFIX: &str = "ledger-";
const BACKUP_SUFFIX: &str = ".json";

/// Metadata about a backup
#[derive(Debug, Clone, Serialize)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Manages backup creation and retention
#[derive(Debug, Clone)]
pub struct BackupManager {
    backup_dir: PathBuf,
    ledger_file: PathBuf,
    retention: usize,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(backup_dir: PathBuf, ledger_file: PathBuf, retention: usize) -> Self {
        Self {
            backup_dir,
            ledger_file,
            retention,
        }
    }

    /// Build a manager from the resolved paths and settings
    pub fn from_settings(paths: &MoneyCountPaths, settings: &Settings) -> Self {
        Self::new(
            paths.backup_dir(),
            paths.ledger_file(),
            settings.backup_retention,
        )
    }

    /// Copy the current ledger file into the backup directory
    ///
    /// Returns `None` when there is no ledger file yet.
    pub fn create_backup(&self) -> MoneyCountResult<Option<PathBuf>> {
        if !self.ledger_file.exists() {
            debug!("no ledger file to back up");
            return Ok(None);
        }

        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            MoneyCountError::Backup(format!("Failed to create backup directory: {}", e))
        })?;

        let now = Utc::now();
        let filename = backup_filename(now);
        let backup_path = self.backup_dir.join(&filename);

        fs::copy(&self.ledger_file, &backup_path)
            .map_err(|e| MoneyCountError::Backup(format!("Failed to write backup file: {}", e)))?;

        info!(backup = %filename, "created backup");
        Ok(Some(backup_path))
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> MoneyCountResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.backup_dir).map_err(|e| {
            MoneyCountError::Backup(format!("Failed to read backup directory: {}", e))
        })?;

        let mut backups = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                MoneyCountError::Backup(format!("Failed to read directory entry: {}", e))
            })?;
            if let Some(info) = parse_backup_info(&entry.path()) {
                backups.push(info);
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(backups)
    }

    /// Delete backups beyond the retention count, oldest first
    pub fn enforce_retention(&self) -> MoneyCountResult<Vec<PathBuf>> {
        let mut deleted = Vec::new();

        for backup in self.list_backups()?.into_iter().skip(self.retention) {
            fs::remove_file(&backup.path).map_err(|e| {
                MoneyCountError::Backup(format!("Failed to delete old backup: {}", e))
            })?;
            debug!(backup = %backup.filename, "removed old backup");
            deleted.push(backup.path);
        }

        Ok(deleted)
    }

    /// Create a backup and then enforce the retention count
    pub fn create_backup_with_retention(
        &self,
    ) -> MoneyCountResult<(Option<PathBuf>, Vec<PathBuf>)> {
        let backup_path = self.create_backup()?;
        let deleted = self.enforce_retention()?;
        Ok((backup_path, deleted))
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    pub fn ledger_file(&self) -> &Path {
        &self.ledger_file
    }

    /// Resolve a backup given either a bare filename or a path
    pub fn resolve(&self, name: &str) -> PathBuf {
        let candidate = PathBuf::from(name);
        if candidate.components().count() > 1 || candidate.is_absolute() {
            candidate
        } else {
            self.backup_dir.join(candidate)
        }
    }

    /// Get the most recent backup
    pub fn get_latest_backup(&self) -> MoneyCountResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }
}

fn backup_filename(at: DateTime<Utc>) -> String {
    format!(
        "{}{}-{:03}{}",
        BACKUP_PREFIX,
        at.format("%Y%m%d-%H%M%S"),
        at.timestamp_subsec_millis(),
        BACKUP_SUFFIX
    )
}

fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();
    let stamp = filename
        .strip_prefix(BACKUP_PREFIX)?
        .strip_suffix(BACKUP_SUFFIX)?;
    let created_at = parse_backup_timestamp(stamp)?;
    let size_bytes = fs::metadata(path).ok()?.len();

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes,
    })
}

/// Parse `YYYYMMDD-HHMMSS-mmm` (milliseconds optional)
fn parse_backup_timestamp(stamp: &str) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = stamp.split('-').collect();
    let (date_part, time_part, millis) = match parts.as_slice() {
        [date, time] => (*date, *time, 0),
        [date, time, millis] => (*date, *time, millis.parse().ok()?),
        _ => return None,
    };

    if date_part.len() != 8 || time_part.len() != 6 {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(
        date_part[0..4].parse().ok()?,
        date_part[4..6].parse().ok()?,
        date_part[6..8].parse().ok()?,
    )?;
    let time = NaiveTime::from_hms_milli_opt(
        time_part[0..2].parse().ok()?,
        time_part[2..4].parse().ok()?,
        time_part[4..6].parse().ok()?,
        millis,
    )?;

    Some(DateTime::from_naive_utc_and_offset(
        NaiveDateTime::new(date, time),
        Utc,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use tempfile::TempDir;

    fn create_test_manager(retention: usize) -> (BackupManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let ledger_file = temp_dir.path().join("data").join("ledger.json");
        fs::create_dir_all(ledger_file.parent().unwrap()).unwrap();
        fs::write(&ledger_file, "{}").unwrap();

        let manager = BackupManager::new(temp_dir.path().join("backups"), ledger_file, retention);
        (manager, temp_dir)
    }

    fn plant_backup(manager: &BackupManager, stamp: &str) -> PathBuf {
        fs::create_dir_all(manager.backup_dir()).unwrap();
        let path = manager.backup_dir().join(format!("ledger-{}.json", stamp));
        fs::write(&path, "{}").unwrap();
        path
    }

    #[test]
    fn test_create_backup_copies_ledger() {
        let (manager, _temp) = create_test_manager(3);

        let backup_path = manager.create_backup().unwrap().unwrap();
        assert!(backup_path.exists());
        assert!(backup_path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("ledger-"));
        assert_eq!(fs::read_to_string(&backup_path).unwrap(), "{}");
    }

    #[test]
    fn test_no_ledger_no_backup() {
        let temp_dir = TempDir::new().unwrap();
        let manager = BackupManager::new(
            temp_dir.path().join("backups"),
            temp_dir.path().join("missing.json"),
            3,
        );

        assert!(manager.create_backup().unwrap().is_none());
        assert!(manager.list_backups().unwrap().is_empty());
    }

    #[test]
    fn test_list_backups_newest_first() {
        let (manager, _temp) = create_test_manager(3);
        plant_backup(&manager, "20250101-090000-000");
        plant_backup(&manager, "20250301-090000-000");
        plant_backup(&manager, "20250201-090000-000");
        fs::write(manager.backup_dir().join("notes.txt"), "ignored").unwrap();

        let backups = manager.list_backups().unwrap();
        let names: Vec<_> = backups.iter().map(|b| b.filename.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "ledger-20250301-090000-000.json",
                "ledger-20250201-090000-000.json",
                "ledger-20250101-090000-000.json",
            ]
        );
    }

    #[test]
    fn test_retention_keeps_newest() {
        let (manager, _temp) = create_test_manager(2);
        let oldest = plant_backup(&manager, "20250101-090000-000");
        let middle = plant_backup(&manager, "20250102-090000-000");
        plant_backup(&manager, "20250103-090000-000");
        plant_backup(&manager, "20250104-090000-000");

        let deleted = manager.enforce_retention().unwrap();
        assert_eq!(deleted.len(), 2);
        assert!(!oldest.exists());
        assert!(!middle.exists());
        assert_eq!(manager.list_backups().unwrap().len(), 2);
    }

    #[test]
    fn test_create_backup_with_retention() {
        let (manager, _temp) = create_test_manager(1);
        plant_backup(&manager, "20200101-000000-000");

        let (created, deleted) = manager.create_backup_with_retention().unwrap();

        let created = created.unwrap();
        assert!(created.exists());
        assert_eq!(deleted.len(), 1);
        assert_eq!(manager.get_latest_backup().unwrap().unwrap().path, created);
    }

    #[test]
    fn test_parse_backup_timestamp() {
        let timestamp = parse_backup_timestamp("20251127-143022").unwrap();
        assert_eq!(timestamp.year(), 2025);
        assert_eq!(timestamp.month(), 11);
        assert_eq!(timestamp.day(), 27);

        let timestamp = parse_backup_timestamp("20251127-143022-456").unwrap();
        assert_eq!(timestamp.hour(), 14);
        assert_eq!(timestamp.timestamp_subsec_millis(), 456);

        assert!(parse_backup_timestamp("2025-11-27").is_none());
        assert!(parse_backup_timestamp("20251340-143022").is_none());
    }

    #[test]
    fn test_resolve_bare_name_and_path() {
        let (manager, temp) = create_test_manager(3);
        assert_eq!(
            manager.resolve("ledger-20250101-090000-000.json"),
            manager.backup_dir().join("ledger-20250101-090000-000.json")
        );

        let elsewhere = temp.path().join("elsewhere.json");
        assert_eq!(manager.resolve(elsewhere.to_str().unwrap()), elsewhere);
    }
}
