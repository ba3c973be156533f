//! Preference commands

use clap::Subcommand;

use crate::config::paths::FinancePaths;
use crate::config::settings::{ReminderCadence, Settings};
use crate::error::{FinanceError, FinanceResult};

/// Preference subcommands
#[derive(Subcommand)]
pub enum PrefsCommands {
    /// Set how often to remind about the budget plan (off, weekly, monthly)
    Reminder { cadence: String },

    /// Hide a notice
    Dismiss { notice: String },

    /// Show a dismissed notice again
    Restore { notice: String },

    /// Set the currency symbol used for display
    Currency { symbol: String },
}

pub fn handle_prefs_command(
    paths: &FinancePaths,
    settings: &mut Settings,
    cmd: PrefsCommands,
) -> FinanceResult<()> {
    match cmd {
        PrefsCommands::Reminder { cadence } => {
            settings.budget_reminder = ReminderCadence::parse(&cadence).ok_or_else(|| {
                FinanceError::Validation(format!(
                    "Unknown reminder cadence '{}' (expected off, weekly or monthly)",
                    cadence
                ))
            })?;
            println!("Budget reminder set to {}", settings.budget_reminder);
        }

        PrefsCommands::Dismiss { notice } => {
            if settings.dismiss(&notice) {
                println!("Dismissed '{}'", notice.trim());
            } else {
                println!("'{}' was already dismissed", notice.trim());
            }
        }

        PrefsCommands::Restore { notice } => {
            if settings.restore(&notice) {
                println!("Restored '{}'", notice.trim());
            } else {
                println!("'{}' was not dismissed", notice.trim());
            }
        }

        PrefsCommands::Currency { symbol } => {
            let symbol = symbol.trim();
            if symbol.is_empty() || symbol.chars().count() > 4 {
                return Err(FinanceError::Validation(
                    "Currency symbol must be 1 to 4 characters".into(),
                ));
            }
            settings.currency_symbol = symbol.to_string();
            println!("Currency symbol set to {}", settings.currency_symbol);
        }
    }

    settings.save(paths)
}
