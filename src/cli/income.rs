//! Income CLI commands

use clap::Subcommand;

use super::parse_amount;
use crate::config::Settings;
use crate::error::MoneyCountResult;
use crate::services::BudgetService;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the income of the month
    Set {
        /// Income amount (e.g., "2000" or "2000.00")
        amount: String,
    },

    /// Show the income of the month
    Show,
}

/// Handle an income command
pub fn handle_income_command(
    service: &mut BudgetService<'_>,
    settings: &Settings,
    cmd: IncomeCommands,
) -> MoneyCountResult<()> {
    let currency = &settings.currency_symbol;

    match cmd {
        IncomeCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            service.set_income(amount)?;
            println!(
                "Set income for {} to {}",
                service.current_month_label(),
                amount.format_with_symbol(currency)
            );
            println!(
                "Balance: {}",
                service.balance()?.format_with_symbol(currency)
            );
        }

        IncomeCommands::Show => {
            println!(
                "Income for {}: {}",
                service.current_month_label(),
                service.income()?.format_with_symbol(currency)
            );
        }
    }

    Ok(())
}
