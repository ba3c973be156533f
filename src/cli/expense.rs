//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_category_list, format_expense_list};
use crate::error::{FinanceError, FinanceResult};
use crate::models::ExpenseCategory;
use crate::services::{BalanceService, ExpenseFilter, ExpenseService, RecordExpenseInput};
use crate::storage::Storage;

use super::{parse_amount, parse_date, parse_date_or_today};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense (refused if it exceeds the remaining balance)
    Add {
        /// Amount (e.g. "250" or "250.00")
        amount: String,
        /// What the money was spent on
        description: String,
        /// Category name (see `expense categories`)
        #[arg(short, long, default_value = "Other")]
        category: String,
        /// Date spent (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses
    List {
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Earliest date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Latest date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },

    /// Show expense categories with their colors and spending
    Categories,
}

pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> FinanceResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let expense = service.record(RecordExpenseInput {
                amount: parse_amount(&amount)?,
                date: parse_date_or_today(date.as_deref())?,
                description,
                category: ExpenseCategory::parse(&category),
            })?;
            let remaining = BalanceService::new(storage).remaining_balance()?;
            println!(
                "Recorded {} for '{}' under {} ({})",
                expense.amount.format_with_symbol(symbol),
                expense.description,
                expense.category,
                expense.id
            );
            println!("Remaining balance: {}", remaining.format_with_symbol(symbol));
        }

        ExpenseCommands::List {
            category,
            from,
            to,
            limit,
        } => {
            let mut filter = ExpenseFilter::new();
            if let Some(category) = category {
                filter = filter.category(ExpenseCategory::parse(&category));
            }
            filter.start_date = from.as_deref().map(parse_date).transpose()?;
            filter.end_date = to.as_deref().map(parse_date).transpose()?;
            if let (Some(start), Some(end)) = (filter.start_date, filter.end_date) {
                if start > end {
                    return Err(FinanceError::Validation(
                        "--from must not be after --to".into(),
                    ));
                }
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let expenses = service.list(&filter)?;
            println!("{}", format_expense_list(&expenses, symbol));
        }

        ExpenseCommands::Delete { id } => {
            let expense = service.delete(&id)?;
            println!(
                "Deleted expense '{}' ({})",
                expense.description, expense.id
            );
            if !expense.source.is_manual() {
                println!("Note: the linked loan or goal was not changed.");
            }
        }

        ExpenseCommands::Categories => {
            let spending = BalanceService::new(storage).spending_by_category()?;
            println!("{}", format_category_list(&spending, symbol));
        }
    }

    Ok(())
}
