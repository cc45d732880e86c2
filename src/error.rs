//! Custom error types for MoneyCount
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{ExpenseId, ExpenseValidationError, Money, Month};

/// The main error type for MoneyCount operations
#[derive(Error, Debug)]
pub enum MoneyCountError {
    /// An operation addressed a month that has no record
    #[error("No record for month {month}")]
    RecordNotFound { month: Month },

    /// An operation addressed an expense id absent from the targeted record
    #[error("Expense {id} not found in {month}")]
    ExpenseNotFound { id: ExpenseId, month: Month },

    /// Non-numeric, negative or oversized amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Backup and restore errors
    #[error("Backup error: {0}")]
    Backup(String),
}

impl MoneyCountError {
    /// Create a "record not found" error
    pub fn record_not_found(month: Month) -> Self {
        Self::RecordNotFound { month }
    }

    /// Create an "expense not found" error
    pub fn expense_not_found(id: ExpenseId, month: Month) -> Self {
        Self::ExpenseNotFound { id, month }
    }

    /// Create an "invalid amount" error for a negative figure
    pub fn negative_amount(what: &str, amount: Money) -> Self {
        Self::InvalidAmount(format!("{} cannot be negative: {}", what, amount))
    }

    /// Create an "invalid amount" error for a figure above [`Money::MAX_AMOUNT`]
    pub fn amount_too_large(what: &str, amount: Money) -> Self {
        Self::InvalidAmount(format!(
            "{} exceeds the maximum of {}: {}",
            what,
            Money::MAX_AMOUNT,
            amount
        ))
    }

    /// Check if this is a "not found" error of either kind
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RecordNotFound { .. } | Self::ExpenseNotFound { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidAmount(_))
    }
}

impl From<std::io::Error> for MoneyCountError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MoneyCountError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<ExpenseValidationError> for MoneyCountError {
    fn from(err: ExpenseValidationError) -> Self {
        match err {
            ExpenseValidationError::NegativeAmount(_)
            | ExpenseValidationError::AmountTooLarge(_) => Self::InvalidAmount(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}

/// Result type alias for MoneyCount operations
pub type MoneyCountResult<T> = Result<T, MoneyCountError>;
