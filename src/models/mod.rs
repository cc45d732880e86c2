//! Core data models for MoneyCount
//!
//! This module contains the data structures of the budgeting domain:
//! months, money amounts, expenses, monthly records and the ledger.

pub mod expense;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod month;
pub mod record;

pub use expense::{Expense, ExpenseKind, ExpenseValidationError};
pub use ids::{ExpenseId, IdCounter};
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use month::{Month, MonthParseError};
pub use record::MonthlyRecord;
