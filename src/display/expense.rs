//! Expense display formatting
//!
//! Renders the expenses of one month as a table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{Expense, ExpenseKind};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Paid marker shown next to recurring expenses
pub fn status_label(expense: &Expense) -> &'static str {
    match expense.kind {
        ExpenseKind::Ordinary => "",
        ExpenseKind::Recurring { paid: true } => "paid",
        ExpenseKind::Recurring { paid: false } => "unpaid",
    }
}

/// Format the expenses of a month as a table
pub fn format_expense_table(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded for this month.".to_string();
    }

    let rows = expenses.iter().map(|expense| ExpenseRow {
        id: expense.id.to_string(),
        name: expense.name.clone(),
        kind: expense.kind.to_string(),
        status: status_label(expense),
        amount: expense.amount.format_with_symbol(currency),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .modify(Columns::new(4..), Alignment::right());
    table.to_string()
}

/// One-line description of an expense, used in command feedback
pub fn format_expense_line(expense: &Expense, currency: &str) -> String {
    let status = status_label(expense);
    if status.is_empty() {
        format!(
            "{} {} {}",
            expense.id,
            expense.name,
            expense.amount.format_with_symbol(currency)
        )
    } else {
        format!(
            "{} {} {} (recurring, {})",
            expense.id,
            expense.name,
            expense.amount.format_with_symbol(currency),
            status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_expense_table(&[], "€"),
            "No expenses recorded for this month."
        );
    }

    #[test]
    fn test_table_contents() {
        let expenses = vec![
            Expense::new(ExpenseId::new(0), "Rent", Money::from_units(700)),
            Expense::recurring(ExpenseId::new(1), "Netflix", Money::from_cents(1299), true),
        ];

        let table = format_expense_table(&expenses, "€");
        assert!(table.contains("ID"));
        assert!(table.contains("Rent"));
        assert!(table.contains("€700.00"));
        assert!(table.contains("Netflix"));
        assert!(table.contains("recurring"));
        assert!(table.contains("paid"));
    }

    #[test]
    fn test_expense_line() {
        let rent = Expense::new(ExpenseId::new(3), "Rent", Money::from_units(700));
        assert_eq!(format_expense_line(&rent, "$"), "#3 Rent $700.00");

        let gym = Expense::recurring(ExpenseId::new(4), "Gym", Money::from_units(30), false);
        assert_eq!(
            format_expense_line(&gym, "$"),
            "#4 Gym $30.00 (recurring, unpaid)"
        );
    }
}
