//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod backup;
pub mod expense;
pub mod export;
pub mod income;
pub mod month;
pub mod recurring;

pub use backup::{handle_backup_command, BackupCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use month::{handle_chart, handle_history, handle_navigation, handle_show, Navigation};
pub use recurring::{handle_recurring_command, RecurringCommands};

use crate::error::{MoneyCountError, MoneyCountResult};
use crate::models::Money;

/// Parse a user-supplied amount such as "12.50", "12,50" or "€12"
pub fn parse_amount(input: &str) -> MoneyCountResult<Money> {
    Money::parse(input).map_err(|e| MoneyCountError::InvalidAmount(e.to_string()))
}
