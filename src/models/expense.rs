//! Expense entry model
//!
//! Expenses are either entered by the user or generated as a side effect of
//! a loan payment or savings goal contribution.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::{ExpenseId, GoalId, LoanId};
use super::money::Money;

/// Where an expense came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ExpenseSource {
    /// Entered by the user
    #[default]
    Manual,
    /// Generated by a payment against a loan
    LoanPayment(LoanId),
    /// Generated by a contribution to a savings goal
    GoalContribution(GoalId),
}

impl ExpenseSource {
    pub fn is_manual(&self) -> bool {
        matches!(self, Self::Manual)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
    EmptyDescription,
    DescriptionTooLong(usize),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Expense amount must be positive"),
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::DescriptionTooLong(len) => write!(
                f,
                "Expense description too long ({} characters, max 200)",
                len
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A single expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: ExpenseId,
    pub amount: Money,
    pub date: NaiveDate,
    pub description: String,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub source: ExpenseSource,
    pub created_at: DateTime<Utc>,
}

impl ExpenseEntry {
    /// Create a new user-entered expense
    pub fn new(
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
        category: ExpenseCategory,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            date,
            description: description.into(),
            category,
            source: ExpenseSource::Manual,
            created_at: Utc::now(),
        }
    }

    /// Expense generated by a loan payment
    pub fn loan_payment(loan_id: LoanId, loan_title: &str, amount: Money, date: NaiveDate) -> Self {
        let mut expense = Self::new(
            amount,
            date,
            format!("Loan payment: {}", loan_title),
            ExpenseCategory::Loans,
        );
        expense.source = ExpenseSource::LoanPayment(loan_id);
        expense
    }

    /// Expense generated by a savings goal contribution
    pub fn goal_contribution(
        goal_id: GoalId,
        goal_title: &str,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        let mut expense = Self::new(
            amount,
            date,
            format!("Savings contribution: {}", goal_title),
            ExpenseCategory::Savings,
        );
        expense.source = ExpenseSource::GoalContribution(goal_id);
        expense
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }
        if description.chars().count() > 200 {
            return Err(ExpenseValidationError::DescriptionTooLong(
                description.chars().count(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for ExpenseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.description, self.amount, self.category
        )
    }
}
