//! Recurring expense CLI commands
//!
//! `pay` and `unpay` touch the selected month only; `edit` and `remove`
//! apply to the selected month and every later recorded month.

use clap::Subcommand;

use super::parse_amount;
use crate::config::Settings;
use crate::error::MoneyCountResult;
use crate::models::ExpenseId;
use crate::services::BudgetService;

/// Recurring expense subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Mark a recurring expense as paid this month
    Pay {
        /// Expense ID
        id: ExpenseId,
    },

    /// Mark a recurring expense as unpaid this month
    Unpay {
        /// Expense ID
        id: ExpenseId,
    },

    /// Change the amount from this month onward
    Edit {
        /// Expense ID
        id: ExpenseId,

        /// New amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Stop a recurring expense from this month onward
    #[command(alias = "rm")]
    Remove {
        /// Expense ID
        id: ExpenseId,
    },
}

/// Handle a recurring expense command
pub fn handle_recurring_command(
    service: &mut BudgetService<'_>,
    settings: &Settings,
    cmd: RecurringCommands,
) -> MoneyCountResult<()> {
    let currency = &settings.currency_symbol;
    let label = service.current_month_label();

    match cmd {
        RecurringCommands::Pay { id } => set_paid(service, currency, id, true)?,

        RecurringCommands::Unpay { id } => set_paid(service, currency, id, false)?,

        RecurringCommands::Edit { id, amount } => {
            let amount = parse_amount(&amount)?;
            let updated = service.edit_recurring_forward(id, amount)?;
            println!(
                "Set {} to {} from {} onward ({} month(s) updated)",
                id,
                amount.format_with_symbol(currency),
                label,
                updated
            );
        }

        RecurringCommands::Remove { id } => {
            let removed = service.remove_recurring_forward(id)?;
            println!(
                "Removed {} from {} onward ({} month(s) affected)",
                id, label, removed
            );
        }
    }

    Ok(())
}

fn set_paid(
    service: &mut BudgetService<'_>,
    currency: &str,
    id: ExpenseId,
    paid: bool,
) -> MoneyCountResult<()> {
    service.set_recurring_paid(id, paid)?;
    println!(
        "Marked {} as {} for {}",
        id,
        if paid { "paid" } else { "unpaid" },
        service.current_month_label()
    );
    println!(
        "Total expenses: {}",
        service.total_expenses()?.format_with_symbol(currency)
    );
    Ok(())
}
