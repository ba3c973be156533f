//! Income CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_income_list;
use crate::error::FinanceResult;
use crate::services::{IncomeService, RecordIncomeInput};
use crate::storage::Storage;

use super::{parse_amount, parse_date_or_today};

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record money received
    Add {
        /// Amount (e.g. "50000" or "50,000.00")
        amount: String,
        /// Date received (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Where it came from (e.g. "Salary")
        #[arg(short, long)]
        source: Option<String>,
        /// Free-form description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// List recorded income
    List,

    /// Delete an income entry
    Delete {
        /// Income ID
        id: String,
    },
}

pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> FinanceResult<()> {
    let service = IncomeService::new(storage);

    match cmd {
        IncomeCommands::Add {
            amount,
            date,
            source,
            description,
        } => {
            let entry = service.record(RecordIncomeInput {
                amount: parse_amount(&amount)?,
                date: parse_date_or_today(date.as_deref())?,
                description,
                category: source,
            })?;
            println!(
                "Recorded income of {} on {} ({})",
                entry.amount.format_with_symbol(&settings.currency_symbol),
                entry.date,
                entry.id
            );
        }

        IncomeCommands::List => {
            let entries = service.list()?;
            println!("{}", format_income_list(&entries, &settings.currency_symbol));
        }

        IncomeCommands::Delete { id } => {
            let entry = service.delete(&id)?;
            println!("Deleted income '{}' ({})", entry.label(), entry.id);
        }
    }

    Ok(())
}
