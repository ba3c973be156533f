//! Service layer for the finance tracker
//!
//! Services hold the business rules on top of the storage layer:
//! validation, the balance gate, and operations that touch several ledgers.

pub mod balance;
pub mod budget;
pub mod expense;
pub mod goal;
pub mod income;
pub mod loan;
pub mod profile;

pub use balance::{BalanceService, BalanceSummary, CategorySpending};
pub use budget::{BudgetComparison, BudgetService};
pub use expense::{ExpenseFilter, ExpenseService, RecordExpenseInput};
pub use goal::{CreateGoalInput, GoalContribution, GoalService, UpdateGoalInput};
pub use income::{IncomeService, RecordIncomeInput};
pub use loan::{CreateLoanInput, LoanPayment, LoanService, UpdateLoanInput};
pub use profile::{ProfileService, AVATAR_EXTENSIONS};

/// Trimmed optional text, with blank input treated as absent
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
