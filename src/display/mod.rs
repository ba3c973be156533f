//! Terminal output for the CLI

pub mod budget;
pub mod format;
pub mod goal;
pub mod ledger;
pub mod loan;
pub mod summary;

pub use budget::{format_budget_comparison, format_budget_plan};
pub use goal::{format_contribution, format_goal_details, format_goal_list};
pub use ledger::{format_category_list, format_expense_list, format_income_list};
pub use loan::{format_loan_details, format_loan_list, format_loan_payment};
pub use summary::format_summary;
