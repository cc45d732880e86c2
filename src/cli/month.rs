//! Month-level CLI commands
//!
//! `show`, `next`, `prev`, `history` and `chart`.

use crate::config::Settings;
use crate::display::{format_chart, format_expense_table, format_history, format_month_summary};
use crate::error::MoneyCountResult;
use crate::models::Ledger;
use crate::services::{BudgetService, PropagationOutcome, SummaryService};

/// Direction of a `next` / `prev` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Prev,
}

/// Print the summary panel and expense table of the cursor month
pub fn handle_show(service: &BudgetService<'_>, settings: &Settings) -> MoneyCountResult<()> {
    let view = service.current_view(settings.savings_bound)?;
    let expenses = service.current_expenses()?;

    println!("{}", format_month_summary(&view, &settings.currency_symbol));
    println!("{}", format_expense_table(&expenses, &settings.currency_symbol));
    Ok(())
}

/// Move the cursor one month and show where it landed
pub fn handle_navigation(
    service: &mut BudgetService<'_>,
    settings: &Settings,
    direction: Navigation,
) -> MoneyCountResult<()> {
    let outcome = match direction {
        Navigation::Next => service.advance_month(),
        Navigation::Prev => service.retreat_month(),
    };

    report_propagation(service, &outcome);
    handle_show(service, settings)
}

fn report_propagation(service: &BudgetService<'_>, outcome: &PropagationOutcome) {
    if outcome.created_record {
        println!("Started {}.", service.current_month_label());
    }
    if !outcome.propagated.is_empty() {
        println!(
            "Carried over {} recurring expense(s) from {}: {}",
            outcome.propagated.len(),
            service.current_month().prev().label(),
            outcome.propagated.join(", ")
        );
    }
    if !outcome.is_noop() {
        println!();
    }
}

/// Print every recorded month with its running savings
pub fn handle_history(ledger: &Ledger, settings: &Settings) -> MoneyCountResult<()> {
    let summary = SummaryService::new(ledger);
    let history = summary.history();

    println!("{}", format_history(&history, &settings.currency_symbol));
    if !history.is_empty() {
        println!(
            "Total savings: {}",
            summary
                .total_savings()
                .format_with_symbol(&settings.currency_symbol)
        );
    }
    Ok(())
}

/// Print the bar chart of the cursor month
pub fn handle_chart(service: &BudgetService<'_>, settings: &Settings) -> MoneyCountResult<()> {
    let chart = service.chart_data(service.current_month())?;
    println!("{}", format_chart(&chart, &settings.currency_symbol));
    Ok(())
}
