//! Service layer for MoneyCount
//!
//! The service layer provides business logic on top of the models: month
//! navigation, recurring-expense propagation and cross-month figures.

pub mod budget;
pub mod summary;

pub use budget::{BudgetService, CurrentView, PropagationOutcome};
pub use summary::{ChartData, HistoryEntry, MonthSummary, SavingsBound, SummaryService};
