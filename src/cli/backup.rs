//! Backup CLI commands
//!
//! Implements CLI commands for backup management. These run without an
//! open ledger session so a restore is never overwritten on exit.

use clap::Subcommand;
use std::path::PathBuf;

use crate::backup::{BackupManager, RestoreManager};
use crate::config::{MoneyCountPaths, Settings};
use crate::error::{MoneyCountError, MoneyCountResult};

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create a new backup of the ledger file
    Create,

    /// List all available backups
    List {
        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Restore the ledger from a backup
    Restore {
        /// Backup filename or path (use 'latest' for most recent)
        backup: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a backup command
pub fn handle_backup_command(
    paths: &MoneyCountPaths,
    settings: &Settings,
    cmd: BackupCommands,
) -> MoneyCountResult<()> {
    let manager = BackupManager::from_settings(paths, settings);

    match cmd {
        BackupCommands::Create => match manager.create_backup_with_retention()? {
            (Some(backup_path), deleted) => {
                println!("Backup created: {}", backup_path.display());
                if !deleted.is_empty() {
                    println!("Removed {} old backup(s).", deleted.len());
                }
            }
            (None, _) => {
                println!("Nothing to back up yet: no ledger has been saved.");
            }
        },

        BackupCommands::List { verbose } => {
            let backups = manager.list_backups()?;

            if backups.is_empty() {
                println!("No backups found.");
                println!("Create one with: moneycount backup create");
                return Ok(());
            }

            println!("Available Backups");
            println!("=================");
            println!();

            for (i, backup) in backups.iter().enumerate() {
                let age = chrono::Utc::now().signed_duration_since(backup.created_at);

                if verbose {
                    println!(
                        "{}. {}\n   Created: {}\n   Size: {}\n   Age: {}\n",
                        i + 1,
                        backup.filename,
                        backup.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                        format_size(backup.size_bytes),
                        format_duration(age),
                    );
                } else {
                    println!(
                        "  {}. {} ({} ago, {})",
                        i + 1,
                        backup.filename,
                        format_duration(age),
                        format_size(backup.size_bytes),
                    );
                }
            }

            println!();
            println!("Total: {} backup(s)", backups.len());
        }

        BackupCommands::Restore { backup, force } => {
            let backup_path = resolve_backup_path(&manager, &backup)?;
            let restore_manager = RestoreManager::new(paths.ledger_file());
            let validation = restore_manager.validate_backup(&backup_path)?;

            println!("Backup: {}", backup_path.display());
            println!("Contents: {}", validation.summary());
            println!();

            if !force {
                println!("WARNING: This will overwrite the current ledger!");
                println!("To proceed, run again with --force flag:");
                println!("  moneycount backup restore {} --force", backup);
                return Ok(());
            }

            if let Some(pre_restore) = manager.create_backup()? {
                println!("Current ledger saved to: {}", pre_restore.display());
            }

            let result = restore_manager.restore_from_file(&backup_path)?;
            println!("Restore complete: {}", result.summary());
        }
    }

    Ok(())
}

/// Resolve a backup identifier to a full path
fn resolve_backup_path(manager: &BackupManager, backup: &str) -> MoneyCountResult<PathBuf> {
    if backup.eq_ignore_ascii_case("latest") {
        return manager
            .get_latest_backup()?
            .map(|b| b.path)
            .ok_or_else(|| MoneyCountError::Backup("No backups available".into()));
    }

    let path = manager.resolve(backup);
    if path.exists() {
        Ok(path)
    } else {
        Err(MoneyCountError::Backup(format!(
            "Backup not found: {}",
            backup
        )))
    }
}

/// Format a duration in human-readable form
fn format_duration(duration: chrono::Duration) -> String {
    let total_seconds = duration.num_seconds().max(0);

    if total_seconds < 60 {
        return format!("{}s", total_seconds);
    }

    let minutes = total_seconds / 60;
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }

    let days = hours / 24;
    if days < 30 {
        return format!("{}d", days);
    }

    format!("{}mo", days / 30)
}

/// Format a file size in human-readable form
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(chrono::Duration::seconds(42)), "42s");
        assert_eq!(format_duration(chrono::Duration::minutes(5)), "5m");
        assert_eq!(format_duration(chrono::Duration::hours(3)), "3h");
        assert_eq!(format_duration(chrono::Duration::days(2)), "2d");
        assert_eq!(format_duration(chrono::Duration::days(65)), "2mo");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
