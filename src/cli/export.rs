//! CLI commands for data export
//!
//! Every export goes to stdout unless `--output` names a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::{MoneyCountError, MoneyCountResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml, export_summary_csv};
use crate::models::Ledger;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export every expense of every month to CSV
    Csv {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export one CSV row per month with running savings
    Summary {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the full ledger as JSON
    Json {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Single-line output instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Export the full ledger as YAML
    Yaml {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(ledger: &Ledger, cmd: ExportCommands) -> MoneyCountResult<()> {
    let (output, what) = match &cmd {
        ExportCommands::Csv { output } => (output.clone(), "expenses"),
        ExportCommands::Summary { output } => (output.clone(), "monthly summary"),
        ExportCommands::Json { output, .. } | ExportCommands::Yaml { output } => {
            (output.clone(), "ledger")
        }
    };

    let mut writer = open_output(output.as_deref())?;
    match cmd {
        ExportCommands::Csv { .. } => export_expenses_csv(ledger, &mut writer)?,
        ExportCommands::Summary { .. } => export_summary_csv(ledger, &mut writer)?,
        ExportCommands::Json { compact, .. } => {
            export_full_json(ledger, &mut writer, !compact)?;
            writeln!(writer).map_err(|e| MoneyCountError::Export(e.to_string()))?;
        }
        ExportCommands::Yaml { .. } => export_full_yaml(ledger, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| MoneyCountError::Export(e.to_string()))?;

    if let Some(path) = output {
        println!("Exported {} to: {}", what, path.display());
    }
    Ok(())
}

fn open_output(output: Option<&Path>) -> MoneyCountResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                MoneyCountError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
