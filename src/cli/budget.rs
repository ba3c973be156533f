//! Budget plan CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_comparison, format_budget_plan};
use crate::error::{FinanceError, FinanceResult};
use crate::models::BudgetCategory;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Replace the budget plan
    Set {
        /// Allocation as CATEGORY=AMOUNT[@PERCENT], repeatable
        #[arg(short, long = "allocate", value_name = "CATEGORY=AMOUNT[@PCT]", required = true)]
        allocations: Vec<String>,
    },

    /// Show the budget plan
    Show,

    /// Compare the plan with actual spending
    Compare,

    /// Remove every allocation
    Clear,
}

pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { allocations } => {
            let rows = allocations
                .iter()
                .map(|spec| {
                    BudgetCategory::parse_spec(spec)
                        .map_err(|e| FinanceError::Validation(e.to_string()))
                })
                .collect::<FinanceResult<Vec<_>>>()?;
            let plan = service.save_plan(rows)?;
            println!("Saved budget plan with {} categories", plan.len());
            print!("{}", format_budget_plan(&plan, symbol));
        }

        BudgetCommands::Show => {
            println!("{}", format_budget_plan(&service.plan()?, symbol));
        }

        BudgetCommands::Compare => {
            let comparison = service.compare()?;
            let unplanned = service.unplanned_spending()?;
            println!(
                "{}",
                format_budget_comparison(&comparison, unplanned, symbol).trim_end()
            );
        }

        BudgetCommands::Clear => {
            service.clear()?;
            println!("Budget plan cleared");
        }
    }

    Ok(())
}
