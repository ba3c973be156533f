//! Loan CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_loan_details, format_loan_list, format_loan_payment};
use crate::error::FinanceResult;
use crate::services::{CreateLoanInput, LoanService, UpdateLoanInput};
use crate::storage::Storage;

use super::{parse_amount, parse_date_or_today, parse_optional_amount, today};

/// Loan subcommands
#[derive(Subcommand)]
pub enum LoanCommands {
    /// Add a loan
    Add {
        /// Loan title
        title: String,
        /// Original loan amount
        #[arg(long)]
        total: String,
        /// Amount still owed (defaults to the total)
        #[arg(long)]
        remaining: Option<String>,
        /// Monthly installment
        #[arg(long)]
        monthly: String,
        /// Day of the month the installment is due (1-31)
        #[arg(long)]
        due_day: u32,
    },

    /// List loans
    List,

    /// Show loan details
    Show {
        /// Loan title or ID
        loan: String,
    },

    /// Edit a loan
    Edit {
        /// Loan title or ID
        loan: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        total: Option<String>,
        #[arg(long)]
        remaining: Option<String>,
        #[arg(long)]
        monthly: Option<String>,
        #[arg(long)]
        due_day: Option<u32>,
    },

    /// Record a payment (booked as a "Loans" expense)
    Pay {
        /// Loan title or ID
        loan: String,
        /// Amount paid (defaults to the monthly installment)
        amount: Option<String>,
        /// Payment date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete a loan
    Delete {
        /// Loan title or ID
        loan: String,
    },
}

pub fn handle_loan_command(
    storage: &Storage,
    settings: &Settings,
    cmd: LoanCommands,
) -> FinanceResult<()> {
    let service = LoanService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        LoanCommands::Add {
            title,
            total,
            remaining,
            monthly,
            due_day,
        } => {
            let loan = service.create(CreateLoanInput {
                title,
                total_amount: parse_amount(&total)?,
                remaining_amount: parse_optional_amount(remaining.as_deref())?,
                monthly_payment: parse_amount(&monthly)?,
                due_day,
                today: today(),
            })?;
            println!("Added loan '{}' ({})", loan.title, loan.id);
            println!("First payment due {}", loan.next_payment_date);
        }

        LoanCommands::List => {
            let loans = service.list()?;
            println!("{}", format_loan_list(&loans, symbol));
        }

        LoanCommands::Show { loan } => {
            let loan = service.find(&loan)?;
            print!("{}", format_loan_details(&loan, symbol));
        }

        LoanCommands::Edit {
            loan,
            title,
            total,
            remaining,
            monthly,
            due_day,
        } => {
            let updated = service.update(
                &loan,
                UpdateLoanInput {
                    title,
                    total_amount: parse_optional_amount(total.as_deref())?,
                    remaining_amount: parse_optional_amount(remaining.as_deref())?,
                    monthly_payment: parse_optional_amount(monthly.as_deref())?,
                    due_day,
                },
            )?;
            println!("Updated loan '{}'", updated.title);
        }

        LoanCommands::Pay { loan, amount, date } => {
            let amount = match amount {
                Some(amount) => parse_amount(&amount)?,
                None => service.find(&loan)?.monthly_payment,
            };
            let payment = service.pay(&loan, amount, parse_date_or_today(date.as_deref())?)?;
            println!("{}", format_loan_payment(&payment, symbol));
        }

        LoanCommands::Delete { loan } => {
            let loan = service.delete(&loan)?;
            println!("Deleted loan '{}'", loan.title);
        }
    }

    Ok(())
}
