//! Savings goal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_contribution, format_goal_details, format_goal_list};
use crate::error::FinanceResult;
use crate::models::Money;
use crate::services::{CreateGoalInput, GoalService, UpdateGoalInput};
use crate::storage::Storage;

use super::{parse_amount, parse_date, parse_date_or_today, parse_optional_amount, today};

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a savings goal
    Add {
        /// Goal title
        title: String,
        /// Amount to save
        #[arg(long)]
        target: String,
        /// Amount already saved
        #[arg(long)]
        current: Option<String>,
        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<String>,
    },

    /// List savings goals
    List,

    /// Show goal details
    Show {
        /// Goal title or ID
        goal: String,
    },

    /// Edit a goal
    Edit {
        /// Goal title or ID
        goal: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        target: Option<String>,
        #[arg(long)]
        current: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
        /// Remove the deadline
        #[arg(long, conflicts_with = "deadline")]
        clear_deadline: bool,
    },

    /// Move money into a goal (booked as a "Savings" expense)
    Contribute {
        /// Goal title or ID
        goal: String,
        /// Amount to contribute
        amount: String,
        /// Contribution date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete a goal
    Delete {
        /// Goal title or ID
        goal: String,
    },
}

pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> FinanceResult<()> {
    let service = GoalService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        GoalCommands::Add {
            title,
            target,
            current,
            deadline,
        } => {
            let goal = service.create(CreateGoalInput {
                title,
                target_amount: parse_amount(&target)?,
                current_amount: parse_optional_amount(current.as_deref())?.unwrap_or(Money::zero()),
                deadline: deadline.as_deref().map(parse_date).transpose()?,
            })?;
            println!("Added savings goal '{}' ({})", goal.title, goal.id);
        }

        GoalCommands::List => {
            let goals = service.list()?;
            println!("{}", format_goal_list(&goals, today(), symbol));
        }

        GoalCommands::Show { goal } => {
            let goal = service.find(&goal)?;
            print!("{}", format_goal_details(&goal, today(), symbol));
        }

        GoalCommands::Edit {
            goal,
            title,
            target,
            current,
            deadline,
            clear_deadline,
        } => {
            let updated = service.update(
                &goal,
                UpdateGoalInput {
                    title,
                    target_amount: parse_optional_amount(target.as_deref())?,
                    current_amount: parse_optional_amount(current.as_deref())?,
                    deadline: deadline.as_deref().map(parse_date).transpose()?,
                    clear_deadline,
                },
            )?;
            println!("Updated savings goal '{}'", updated.title);
        }

        GoalCommands::Contribute { goal, amount, date } => {
            let result = service.contribute(
                &goal,
                parse_amount(&amount)?,
                parse_date_or_today(date.as_deref())?,
            )?;
            println!("{}", format_contribution(&result, symbol));
        }

        GoalCommands::Delete { goal } => {
            let goal = service.delete(&goal)?;
            println!("Deleted savings goal '{}'", goal.title);
        }
    }

    Ok(())
}
