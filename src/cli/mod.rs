//! CLI command handlers
//!
//! Each submodule defines the clap subcommands for one area and a handler
//! that calls into the service layer and prints the result.

pub mod audit;
pub mod budget;
pub mod expense;
pub mod export;
pub mod goal;
pub mod income;
pub mod loan;
pub mod prefs;
pub mod profile;
pub mod summary;

pub use audit::handle_audit_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use loan::{handle_loan_command, LoanCommands};
pub use prefs::{handle_prefs_command, PrefsCommands};
pub use profile::{handle_profile_command, ProfileCommands};
pub use summary::handle_summary_command;

use chrono::{Local, NaiveDate};

use crate::error::{FinanceError, FinanceResult};
use crate::models::Money;

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a user-entered amount such as "1,250.50" or "₹500"
pub fn parse_amount(input: &str) -> FinanceResult<Money> {
    Money::parse(input)
        .map_err(|e| FinanceError::Validation(format!("Invalid amount '{}': {}", input, e)))
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(input: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        FinanceError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", input))
    })
}

/// Parse an optional date, falling back to today
pub fn parse_date_or_today(input: Option<&str>) -> FinanceResult<NaiveDate> {
    input.map(parse_date).unwrap_or_else(|| Ok(today()))
}

fn parse_optional_amount(input: Option<&str>) -> FinanceResult<Option<Money>> {
    input.map(parse_amount).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,250.50").unwrap(), Money::from_rupees_paise(1_250, 50));
        assert!(parse_amount("abc").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-02-28").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert!(parse_date("28/02/2025").is_err());
        assert_eq!(parse_date_or_today(None).unwrap(), today());
    }

    #[test]
    fn test_parse_optional_amount() {
        assert_eq!(parse_optional_amount(None).unwrap(), None);
        assert_eq!(
            parse_optional_amount(Some("10")).unwrap(),
            Some(Money::from_rupees(10))
        );
    }
}
