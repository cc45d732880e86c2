use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use moneycount::backup::BackupManager;
use moneycount::cli::{
    handle_backup_command, handle_chart, handle_expense_command, handle_export_command,
    handle_history, handle_income_command, handle_navigation, handle_recurring_command,
    handle_show, BackupCommands, ExpenseCommands, ExportCommands, IncomeCommands, Navigation,
    RecurringCommands,
};
use moneycount::config::{MoneyCountPaths, Settings};
use moneycount::logging;
use moneycount::models::Month;
use moneycount::services::BudgetService;
use moneycount::storage::{LedgerRepository, LedgerSession};

#[derive(Parser)]
#[command(
    name = "moneycount",
    version,
    about = "Household budget tracker with monthly records and recurring expenses",
    long_about = "MoneyCount keeps one record per month: income, ordinary expenses and \
                  recurring expenses that carry over into the next month unpaid. \
                  Balances add up into accumulated savings."
)]
struct Cli {
    /// Month to work on (YYYY-MM); defaults to the current month
    #[arg(short, long, global = true, env = "MONEYCOUNT_MONTH")]
    month: Option<Month>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the summary and expenses of the month
    Show,

    /// Go to the following month and show it
    Next,

    /// Go to the previous month and show it
    Prev,

    /// Income of the month
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expenses of the month
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Recurring expenses
    #[command(subcommand, alias = "rec")]
    Recurring(RecurringCommands),

    /// Month-by-month totals and running savings
    History,

    /// Bar chart of expenses, income and balance for the month
    Chart,

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Backup management
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Write the default configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = MoneyCountPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    logging::init(&settings);

    let month = cli.month.unwrap_or_else(Month::current);
    let command = cli.command.unwrap_or(Commands::Show);
    debug!(%month, base_dir = %paths.base_dir().display(), "starting");

    match command {
        Commands::Init => {
            settings.save(&paths)?;
            println!("Initialized MoneyCount at: {}", paths.base_dir().display());
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Commands::Config => print_config(&paths, &settings),
        Commands::Backup(cmd) => handle_backup_command(&paths, &settings, cmd)?,
        command => run_with_ledger(&paths, &settings, month, command)?,
    }

    Ok(())
}

/// Load the ledger, run one command against it and save it once
fn run_with_ledger(
    paths: &MoneyCountPaths,
    settings: &Settings,
    month: Month,
    command: Commands,
) -> Result<()> {
    paths.ensure_directories()?;

    let mut session = LedgerSession::open(LedgerRepository::new(paths.ledger_file()))?;
    if settings.backup_on_save {
        session = session.with_backups(BackupManager::from_settings(paths, settings));
    }

    match command {
        Commands::History => handle_history(session.ledger(), settings)?,
        Commands::Export(cmd) => handle_export_command(session.ledger(), cmd)?,
        command => {
            let mut service = BudgetService::open(session.ledger_mut(), month);
            match command {
                Commands::Next => handle_navigation(&mut service, settings, Navigation::Next)?,
                Commands::Prev => handle_navigation(&mut service, settings, Navigation::Prev)?,
                Commands::Income(cmd) => handle_income_command(&mut service, settings, cmd)?,
                Commands::Expense(cmd) => handle_expense_command(&mut service, settings, cmd)?,
                Commands::Recurring(cmd) => {
                    handle_recurring_command(&mut service, settings, cmd)?
                }
                Commands::Chart => handle_chart(&service, settings)?,
                _ => handle_show(&service, settings)?,
            }
        }
    }

    session.commit()?;
    Ok(())
}

fn print_config(paths: &MoneyCountPaths, settings: &Settings) {
    println!("MoneyCount Configuration");
    println!("========================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Ledger file:      {}", paths.ledger_file().display());
    println!("Backup directory: {}", paths.backup_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:  {}", settings.currency_symbol);
    println!("  Savings bound:    {:?}", settings.savings_bound);
    println!("  Backup on save:   {}", settings.backup_on_save);
    println!("  Backup retention: {}", settings.backup_retention);
    println!("  Log level:        {}", settings.log_level);
}
