//! Display formatting for terminal output
//!
//! Tables for expenses and history, plus the summary panel and a text
//! chart. Every function takes the currency symbol from settings.

pub mod expense;
pub mod summary;

pub use expense::{format_expense_line, format_expense_table, status_label};
pub use summary::{format_chart, format_history, format_month_summary};
