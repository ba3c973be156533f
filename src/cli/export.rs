//! Export CLI commands

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml, export_income_csv};
use crate::storage::Storage;

/// Which ledger to write as CSV
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CsvLedger {
    Expenses,
    Income,
}

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Full export as JSON
    Json {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Single-line output
        #[arg(long)]
        compact: bool,
    },

    /// Full export as YAML
    Yaml {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Income or expenses as CSV
    Csv {
        #[arg(value_enum, default_value = "expenses")]
        ledger: CsvLedger,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> FinanceResult<()> {
    match cmd {
        ExportCommands::Json { output, compact } => {
            write_to(output.as_deref(), |w| export_full_json(storage, w, !compact))
        }
        ExportCommands::Yaml { output } => {
            write_to(output.as_deref(), |w| export_full_yaml(storage, w))
        }
        ExportCommands::Csv { ledger, output } => write_to(output.as_deref(), |w| match ledger {
            CsvLedger::Expenses => export_expenses_csv(storage, w),
            CsvLedger::Income => export_income_csv(storage, w),
        }),
    }
}

fn write_to<F>(output: Option<&Path>, export: F) -> FinanceResult<()>
where
    F: FnOnce(&mut dyn Write) -> FinanceResult<()>,
{
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FinanceError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export(&mut writer)?;
            writer
                .flush()
                .map_err(|e| FinanceError::Export(e.to_string()))?;
            eprintln!("Exported to {}", path.display());
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            export(&mut lock)
        }
    }
}
