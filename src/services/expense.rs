//! Expense service
//!
//! New expenses are gated on the remaining balance: an expense larger than
//! what is left of recorded income is refused without touching the ledger.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{FinanceError, FinanceResult, Record};
use crate::models::{ExpenseCategory, ExpenseEntry, Money};
use crate::storage::Storage;

use super::balance::BalanceService;

/// Options for filtering expense listings
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub category: Option<ExpenseCategory>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: ExpenseCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn accepts(&self, expense: &ExpenseEntry) -> bool {
        self.category.as_ref().map_or(true, |c| &expense.category == c)
            && self.start_date.map_or(true, |d| expense.date >= d)
            && self.end_date.map_or(true, |d| expense.date <= d)
    }
}

/// Input for recording an expense
#[derive(Debug, Clone)]
pub struct RecordExpenseInput {
    pub amount: Money,
    pub date: NaiveDate,
    pub description: String,
    pub category: ExpenseCategory,
}

pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an expense if the remaining balance covers it
    pub fn record(&self, input: RecordExpenseInput) -> FinanceResult<ExpenseEntry> {
        let expense = ExpenseEntry::new(
            input.amount,
            input.date,
            input.description.trim(),
            input.category,
        );
        expense
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        BalanceService::new(self.storage)
            .ensure_affordable(expense.amount)
            .inspect_err(|e| info!(amount = %expense.amount, "expense refused: {}", e))?;

        self.storage
            .atomically(|s| s.expenses.upsert(expense.clone()))?;

        self.storage.log_create(&expense);
        info!(id = %expense.id, category = %expense.category, "expense recorded");

        Ok(expense)
    }

    /// Expenses matching `filter`, newest first
    pub fn list(&self, filter: &ExpenseFilter) -> FinanceResult<Vec<ExpenseEntry>> {
        let mut expenses: Vec<_> = match &filter.category {
            Some(category) => self.storage.expenses.get_by_category(category)?,
            None => self.storage.expenses.get_all()?,
        };
        expenses.retain(|e| filter.accepts(e));
        if let Some(limit) = filter.limit {
            expenses.truncate(limit);
        }
        Ok(expenses)
    }

    pub fn total(&self) -> FinanceResult<Money> {
        self.storage.expenses.total()
    }

    pub fn find(&self, identifier: &str) -> FinanceResult<ExpenseEntry> {
        self.storage
            .expenses
            .find(identifier)?
            .ok_or_else(|| FinanceError::not_found(Record::Expense, identifier))
    }

    /// Delete one expense and return it. Deleting a loan payment or goal
    /// contribution does not touch the loan or goal.
    pub fn delete(&self, identifier: &str) -> FinanceResult<ExpenseEntry> {
        let expense = self.find(identifier)?;

        self.storage.atomically(|s| s.expenses.delete(expense.id))?;

        self.storage.log_delete(&expense);

        Ok(expense)
    }
}
