//! Summary service
//!
//! Read-only aggregation across monthly records: accumulated savings, the
//! all-history savings total, chart figures and per-month history.

use serde::{Deserialize, Serialize};

use crate::error::{MoneyCountError, MoneyCountResult};
use crate::models::{Ledger, Money, Month, MonthlyRecord};

/// Which months count toward accumulated savings relative to a reference month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsBound {
    /// Months up to and including the reference month
    #[default]
    Inclusive,
    /// Months strictly before the reference month
    Exclusive,
}

impl SavingsBound {
    /// Whether `month` is counted when accumulating up to `as_of`
    pub fn includes(&self, month: Month, as_of: Month) -> bool {
        match self {
            Self::Inclusive => month <= as_of,
            Self::Exclusive => month < as_of,
        }
    }
}

/// Figures of a single month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub month: Month,
    pub income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    pub unpaid_recurring: Money,
    pub expense_count: usize,
}

impl MonthSummary {
    pub fn from_record(record: &MonthlyRecord) -> Self {
        Self {
            month: record.month(),
            income: record.income(),
            total_expenses: record.total_expenses(),
            balance: record.balance(),
            unpaid_recurring: record.unpaid_recurring(),
            expense_count: record.expense_count(),
        }
    }
}

/// Data behind the expenses / income / balance chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub month: Month,
    pub expenses: Money,
    pub income: Money,
    pub balance: Money,
    /// Sum of balances across every recorded month
    pub total_savings: Money,
}

/// One row of the month-by-month history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub summary: MonthSummary,
    /// Balances summed from the first recorded month through this one
    pub running_savings: Money,
}

/// Service for cross-month figures
pub struct SummaryService<'a> {
    ledger: &'a Ledger,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Summary of a single month
    pub fn month_summary(&self, month: Month) -> MoneyCountResult<MonthSummary> {
        self.ledger
            .get_record(month)
            .map(MonthSummary::from_record)
            .ok_or_else(|| MoneyCountError::record_not_found(month))
    }

    /// Sum of balances over the months selected by `bound` relative to `as_of`
    pub fn accumulated_savings(&self, as_of: Month, bound: SavingsBound) -> Money {
        self.ledger
            .records()
            .filter(|record| bound.includes(record.month(), as_of))
            .map(MonthlyRecord::balance)
            .sum()
    }

    /// Sum of balances across every recorded month
    pub fn total_savings(&self) -> Money {
        self.ledger.records().map(MonthlyRecord::balance).sum()
    }

    /// Chart figures for one month plus the all-history savings total
    pub fn chart_data(&self, month: Month) -> MoneyCountResult<ChartData> {
        let record = self
            .ledger
            .get_record(month)
            .ok_or_else(|| MoneyCountError::record_not_found(month))?;

        Ok(ChartData {
            month,
            expenses: record.total_expenses(),
            income: record.income(),
            balance: record.balance(),
            total_savings: self.total_savings(),
        })
    }

    /// Every month in chronological order with running savings
    pub fn history(&self) -> Vec<HistoryEntry> {
        let mut running = Money::zero();
        self.ledger
            .records()
            .map(|record| {
                let summary = MonthSummary::from_record(record);
                running += summary.balance;
                HistoryEntry {
                    summary,
                    running_savings: running,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseId};

    fn month(m: u32) -> Month {
        Month::new(2025, m).unwrap()
    }

    /// Three months with balances 1000, 500 and -200
    fn sample_ledger() -> Ledger {
        let mut jan = MonthlyRecord::new(month(1), Money::from_units(2000));
        jan.add_expense(&Expense::new(ExpenseId::new(0), "Rent", Money::from_units(1000)));

        let mut feb = MonthlyRecord::new(month(2), Money::from_units(2000));
        feb.add_expense(&Expense::new(ExpenseId::new(1), "Rent", Money::from_units(1500)));
        feb.add_expense(&Expense::recurring(
            ExpenseId::new(2),
            "Netflix",
            Money::from_units(12),
            false,
        ));

        let mut mar = MonthlyRecord::new(month(3), Money::from_units(1000));
        mar.add_expense(&Expense::new(ExpenseId::new(3), "Car", Money::from_units(1200)));

        Ledger::from_records(vec![jan, feb, mar])
    }

    #[test]
    fn test_accumulated_savings_inclusive_counts_reference_month() {
        let ledger = sample_ledger();
        let service = SummaryService::new(&ledger);
        assert_eq!(
            service.accumulated_savings(month(2), SavingsBound::Inclusive),
            Money::from_units(1500)
        );
    }

    #[test]
    fn test_accumulated_savings_exclusive_skips_reference_month() {
        let ledger = sample_ledger();
        let service = SummaryService::new(&ledger);
        assert_eq!(
            service.accumulated_savings(month(2), SavingsBound::Exclusive),
            Money::from_units(1000)
        );
        assert_eq!(
            service.accumulated_savings(month(1), SavingsBound::Exclusive),
            Money::zero()
        );
    }

    #[test]
    fn test_accumulated_savings_before_any_record() {
        let ledger = sample_ledger();
        let service = SummaryService::new(&ledger);
        assert_eq!(
            service.accumulated_savings(Month::new(2024, 6).unwrap(), SavingsBound::Inclusive),
            Money::zero()
        );
    }

    #[test]
    fn test_chart_data_uses_all_history() {
        let ledger = sample_ledger();
        let service = SummaryService::new(&ledger);
        let chart = service.chart_data(month(1)).unwrap();

        assert_eq!(chart.expenses, Money::from_units(1000));
        assert_eq!(chart.income, Money::from_units(2000));
        assert_eq!(chart.balance, Money::from_units(1000));
        // Later months count too
        assert_eq!(chart.total_savings, Money::from_units(1300));
    }

    #[test]
    fn test_chart_data_missing_month() {
        let ledger = sample_ledger();
        let service = SummaryService::new(&ledger);
        assert!(matches!(
            service.chart_data(month(9)),
            Err(MoneyCountError::RecordNotFound { .. })
        ));
    }

    #[test]
    fn test_history_running_savings() {
        let ledger = sample_ledger();
        let service = SummaryService::new(&ledger);
        let history = service.history();

        let running: Vec<_> = history.iter().map(|h| h.running_savings).collect();
        assert_eq!(
            running,
            vec![
                Money::from_units(1000),
                Money::from_units(1500),
                Money::from_units(1300)
            ]
        );
        assert_eq!(history[1].summary.unpaid_recurring, Money::from_units(12));
    }
}
