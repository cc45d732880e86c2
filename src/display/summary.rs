//! Month summary, chart and history formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Money;
use crate::services::{ChartData, CurrentView, HistoryEntry};

const BAR_WIDTH: usize = 40;

/// Format the summary panel of the month under the cursor
pub fn format_month_summary(view: &CurrentView, currency: &str) -> String {
    let summary = &view.summary;
    let mut output = String::new();

    output.push_str(&format!("{}\n", view.label));
    output.push_str(&format!("{}\n", "=".repeat(view.label.chars().count())));
    output.push_str(&format!(
        "Income:              {:>12}\n",
        summary.income.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Expenses:            {:>12}\n",
        summary.total_expenses.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Balance:             {:>12}\n",
        summary.balance.format_with_symbol(currency)
    ));
    if summary.unpaid_recurring.is_positive() {
        output.push_str(&format!(
            "Unpaid recurring:    {:>12}\n",
            summary.unpaid_recurring.format_with_symbol(currency)
        ));
    }
    output.push_str(&format!(
        "Accumulated savings: {:>12}\n",
        view.accumulated_savings.format_with_symbol(currency)
    ));

    output
}

/// Render expenses, income and balance of a month as horizontal bars
pub fn format_chart(chart: &ChartData, currency: &str) -> String {
    let bars = [
        ("Expenses", chart.expenses),
        ("Income", chart.income),
        ("Balance", chart.balance),
    ];
    let largest = bars
        .iter()
        .map(|(_, amount)| amount.cents().unsigned_abs())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    output.push_str(&format!("Chart for {}\n\n", chart.month.label()));

    for (label, amount) in bars {
        output.push_str(&format!(
            "{:<9} {:<width$} {}\n",
            label,
            bar(amount, largest),
            amount.format_with_symbol(currency),
            width = BAR_WIDTH
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "Total savings (all months): {}\n",
        chart.total_savings.format_with_symbol(currency)
    ));
    output
}

fn bar(amount: Money, largest: u64) -> String {
    if largest == 0 {
        return String::new();
    }
    let filled = (amount.cents().unsigned_abs() as u128 * BAR_WIDTH as u128 / largest as u128) as usize;
    let glyph = if amount.is_negative() { "░" } else { "█" };
    glyph.repeat(filled)
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Savings")]
    savings: String,
}

/// Format the month-by-month history as a table
pub fn format_history(entries: &[HistoryEntry], currency: &str) -> String {
    if entries.is_empty() {
        return "No months recorded yet.".to_string();
    }

    let rows = entries.iter().map(|entry| HistoryRow {
        month: entry.summary.month.to_string(),
        income: entry.summary.income.format_with_symbol(currency),
        expenses: entry.summary.total_expenses.format_with_symbol(currency),
        balance: entry.summary.balance.format_with_symbol(currency),
        savings: entry.running_savings.format_with_symbol(currency),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ledger, Month};
    use crate::services::{BudgetService, SavingsBound, SummaryService};

    fn household() -> Ledger {
        let mut ledger = Ledger::new();
        let mut service = BudgetService::open(&mut ledger, Month::new(2025, 1).unwrap());
        service.set_income(Money::from_units(2000)).unwrap();
        service
            .add_expense("Rent", Money::from_units(700), false)
            .unwrap();
        service
            .add_expense("Netflix", Money::from_units(12), true)
            .unwrap();
        ledger
    }

    #[test]
    fn test_month_summary_panel() {
        let mut ledger = household();
        let service = BudgetService::new(&mut ledger, Month::new(2025, 1).unwrap());
        let view = service.current_view(SavingsBound::Inclusive).unwrap();

        let panel = format_month_summary(&view, "€");
        assert!(panel.starts_with("January 2025\n============\n"));
        assert!(panel.contains("€2000.00"));
        assert!(panel.contains("€700.00"));
        assert!(panel.contains("€1300.00"));
        assert!(panel.contains("Unpaid recurring:"));
        assert!(panel.contains("€12.00"));
    }

    #[test]
    fn test_chart_bars_scale_to_largest() {
        let ledger = household();
        let chart = SummaryService::new(&ledger)
            .chart_data(Month::new(2025, 1).unwrap())
            .unwrap();

        let output = format_chart(&chart, "€");
        let income_line = output.lines().find(|l| l.starts_with("Income")).unwrap();
        assert_eq!(income_line.matches('█').count(), BAR_WIDTH);
        let expense_line = output.lines().find(|l| l.starts_with("Expenses")).unwrap();
        assert_eq!(expense_line.matches('█').count(), 14);
        assert!(output.contains("Total savings (all months): €1300.00"));
    }

    #[test]
    fn test_bar_handles_zero_and_negative() {
        assert_eq!(bar(Money::zero(), 0), "");
        assert_eq!(bar(Money::from_units(-50), 10000).chars().count(), 20);
        assert!(bar(Money::from_units(-50), 10000).starts_with('░'));
    }

    #[test]
    fn test_history_table() {
        let ledger = household();
        let history = SummaryService::new(&ledger).history();

        let table = format_history(&history, "€");
        assert!(table.contains("2025-01"));
        assert!(table.contains("Savings"));
        assert_eq!(format_history(&[], "€"), "No months recorded yet.");
    }
}
