//! `fintrack summary`

use std::io::IsTerminal;

use chrono::{Local, NaiveDate};
use tracing::warn;

use crate::config::settings::Settings;
use crate::display::format_summary;
use crate::error::FinanceResult;
use crate::services::{BalanceService, BudgetService};
use crate::storage::Storage;

/// Notice shown when no budget plan exists
pub const BUDGET_REMINDER_NOTICE: &str = "budget-reminder";

pub fn handle_summary_command(storage: &Storage, settings: &mut Settings) -> FinanceResult<()> {
    let balance = BalanceService::new(storage);
    let summary = balance.summary()?;
    let spending = balance.spending_by_category()?;

    let color = std::io::stdout().is_terminal();
    print!(
        "{}",
        format_summary(&summary, &spending, &settings.currency_symbol, color)
    );

    let today = Local::now().date_naive();
    if should_remind(storage, settings, today)? {
        println!();
        println!(
            "Tip: you have no budget plan yet. Set one with `fintrack budget set --allocate Food=12000`."
        );
        println!(
            "     Hide this with `fintrack prefs dismiss {}`.",
            BUDGET_REMINDER_NOTICE
        );

        settings.budget_reminded_on = Some(today);
        if let Err(e) = settings.save(storage.paths()) {
            warn!(error = %e, "could not record budget reminder date");
        }
    }

    Ok(())
}

fn should_remind(storage: &Storage, settings: &Settings, today: NaiveDate) -> FinanceResult<bool> {
    if settings.is_dismissed(BUDGET_REMINDER_NOTICE) || !settings.budget_reminder_due(today) {
        return Ok(false);
    }
    Ok(BudgetService::new(storage).plan()?.is_empty())
}
