//! Core data models for the finance tracker
//!
//! This module contains the data structures of the personal finance domain:
//! income, expenses, loans, savings goals and the budget plan.

pub mod budget;
pub mod category;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod income;
pub mod loan;
pub mod money;
pub mod profile;

pub use budget::{validate_plan, BudgetCategory, BudgetValidationError};
pub use category::ExpenseCategory;
pub use expense::{ExpenseEntry, ExpenseSource};
pub use goal::SavingGoal;
pub use ids::{ExpenseId, GoalId, IncomeId, LoanId, UserId};
pub use income::IncomeEntry;
pub use loan::Loan;
pub use money::Money;
pub use profile::Profile;
