//! Expense CLI commands
//!
//! All commands act on the selected month only.

use clap::Subcommand;

use super::parse_amount;
use crate::config::Settings;
use crate::display::{format_expense_line, format_expense_table};
use crate::error::MoneyCountResult;
use crate::models::ExpenseId;
use crate::services::BudgetService;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add an expense to the month
    Add {
        /// Expense name
        name: String,

        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Repeat this expense in the following months
        #[arg(short, long)]
        recurring: bool,
    },

    /// Change the amount of an expense in this month
    Edit {
        /// Expense ID (e.g., "3" or "#3")
        id: ExpenseId,

        /// New amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Remove an expense from this month
    #[command(alias = "rm")]
    Remove {
        /// Expense ID
        id: ExpenseId,
    },

    /// List the expenses of the month
    #[command(alias = "ls")]
    List,
}

/// Handle an expense command
pub fn handle_expense_command(
    service: &mut BudgetService<'_>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> MoneyCountResult<()> {
    let currency = &settings.currency_symbol;

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            recurring,
        } => {
            let amount = parse_amount(&amount)?;
            let id = service.add_expense(&name, amount, recurring)?;

            let record = service.current_record()?;
            if let Some(expense) = record.get_expense(id) {
                println!("Added {}", format_expense_line(expense, currency));
            }
            println!(
                "Total expenses for {}: {}",
                service.current_month_label(),
                record.total_expenses().format_with_symbol(currency)
            );
        }

        ExpenseCommands::Edit { id, amount } => {
            let amount = parse_amount(&amount)?;
            service.edit_expense_amount(id, amount)?;
            println!(
                "Updated expense {} to {}",
                id,
                amount.format_with_symbol(currency)
            );
        }

        ExpenseCommands::Remove { id } => {
            let removed = service.remove_expense(id)?;
            println!("Removed {}", format_expense_line(&removed, currency));
        }

        ExpenseCommands::List => {
            println!("Expenses for {}", service.current_month_label());
            println!(
                "{}",
                format_expense_table(&service.current_expenses()?, currency)
            );
            println!(
                "Total: {}",
                service.total_expenses()?.format_with_symbol(currency)
            );
        }
    }

    Ok(())
}
