//! CSV export
//!
//! Writes expenses and monthly summaries in a spreadsheet-friendly layout.
//! Amounts are plain decimals without a currency symbol.

use std::io::Write;

use serde::Serialize;

use crate::error::{MoneyCountError, MoneyCountResult};
use crate::models::Ledger;
use crate::services::SummaryService;

#[derive(Serialize)]
struct ExpenseRow {
    month: String,
    id: u64,
    name: String,
    kind: String,
    paid: String,
    amount: String,
    counted: bool,
}

#[derive(Serialize)]
struct SummaryRow {
    month: String,
    income: String,
    expenses: String,
    balance: String,
    running_savings: String,
}

fn export_error(err: impl std::fmt::Display) -> MoneyCountError {
    MoneyCountError::Export(err.to_string())
}

/// Export every expense of every month, one row each
pub fn export_expenses_csv<W: Write>(ledger: &Ledger, writer: W) -> MoneyCountResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in ledger.records() {
        for expense in record.expenses() {
            csv_writer
                .serialize(ExpenseRow {
                    month: record.month().to_string(),
                    id: expense.id.value(),
                    name: expense.name.clone(),
                    kind: expense.kind.to_string(),
                    paid: expense.paid().map(|p| p.to_string()).unwrap_or_default(),
                    amount: expense.amount.to_string(),
                    counted: expense.is_counted(),
                })
                .map_err(export_error)?;
        }
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}

/// Export one row per month with the running savings total
pub fn export_summary_csv<W: Write>(ledger: &Ledger, writer: W) -> MoneyCountResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for entry in SummaryService::new(ledger).history() {
        csv_writer
            .serialize(SummaryRow {
                month: entry.summary.month.to_string(),
                income: entry.summary.income.to_string(),
                expenses: entry.summary.total_expenses.to_string(),
                balance: entry.summary.balance.to_string(),
                running_savings: entry.running_savings.to_string(),
            })
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}
