//! Expense repository
//!
//! In-memory table of expenses with category lookups, persisted as part of
//! the ledger snapshot.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{ExpenseCategory, ExpenseEntry, ExpenseId, Money};

use super::{checked_total, read_lock_error, single_match, write_lock_error};

/// Repository for expenses
#[derive(Default)]
pub struct ExpenseRepository {
    expenses: RwLock<HashMap<ExpenseId, ExpenseEntry>>,
}

impl ExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the table contents (used when loading and rolling back)
    pub fn replace_all(&self, list: Vec<ExpenseEntry>) -> Result<(), FinanceError> {
        let mut expenses = self.expenses.write().map_err(write_lock_error)?;
        expenses.clear();
        expenses.extend(list.into_iter().map(|e| (e.id, e)));
        Ok(())
    }

    /// All expenses, newest date first
    pub fn get_all(&self) -> Result<Vec<ExpenseEntry>, FinanceError> {
        let expenses = self.expenses.read().map_err(read_lock_error)?;
        let mut list: Vec<_> = expenses.values().cloned().collect();
        sort_newest_first(&mut list);
        Ok(list)
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<ExpenseEntry>, FinanceError> {
        let expenses = self.expenses.read().map_err(read_lock_error)?;
        Ok(expenses.get(&id).cloned())
    }

    /// Find an expense by full or short ID
    pub fn find(&self, identifier: &str) -> Result<Option<ExpenseEntry>, FinanceError> {
        let expenses = self.expenses.read().map_err(read_lock_error)?;
        single_match(
            identifier,
            expenses.values().filter(|e| e.id.matches(identifier)).collect(),
        )
    }

    pub fn get_by_category(
        &self,
        category: &ExpenseCategory,
    ) -> Result<Vec<ExpenseEntry>, FinanceError> {
        let expenses = self.expenses.read().map_err(read_lock_error)?;
        let mut list: Vec<_> = expenses
            .values()
            .filter(|e| &e.category == category)
            .cloned()
            .collect();
        sort_newest_first(&mut list);
        Ok(list)
    }

    pub fn upsert(&self, expense: ExpenseEntry) -> Result<(), FinanceError> {
        let mut expenses = self.expenses.write().map_err(write_lock_error)?;
        expenses.insert(expense.id, expense);
        Ok(())
    }

    pub fn delete(&self, id: ExpenseId) -> Result<Option<ExpenseEntry>, FinanceError> {
        let mut expenses = self.expenses.write().map_err(write_lock_error)?;
        Ok(expenses.remove(&id))
    }

    /// Sum of all expenses
    pub fn total(&self) -> Result<Money, FinanceError> {
        let expenses = self.expenses.read().map_err(read_lock_error)?;
        checked_total("Total spending", expenses.values().map(|e| e.amount))
    }

    /// Sum of expenses per category
    pub fn totals_by_category(&self) -> Result<HashMap<ExpenseCategory, Money>, FinanceError> {
        let expenses = self.expenses.read().map_err(read_lock_error)?;
        let mut totals: HashMap<ExpenseCategory, Money> = HashMap::new();
        for expense in expenses.values() {
            let slot = totals.entry(expense.category.clone()).or_default();
            *slot = checked_total("Category spending", [*slot, expense.amount])?;
        }
        Ok(totals)
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        let expenses = self.expenses.read().map_err(read_lock_error)?;
        Ok(expenses.len())
    }
}

fn sort_newest_first(list: &mut [ExpenseEntry]) {
    list.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(rupees: i64, day: u32, category: ExpenseCategory) -> ExpenseEntry {
        ExpenseEntry::new(
            Money::from_rupees(rupees),
            NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
            "Test",
            category,
        )
    }

    #[test]
    fn test_totals() {
        let repo = ExpenseRepository::new();
        repo.upsert(expense(100, 1, ExpenseCategory::Food)).unwrap();
        repo.upsert(expense(50, 2, ExpenseCategory::Food)).unwrap();
        repo.upsert(expense(300, 3, ExpenseCategory::Housing)).unwrap();

        assert_eq!(repo.total().unwrap(), Money::from_rupees(450));
        let by_cat = repo.totals_by_category().unwrap();
        assert_eq!(by_cat[&ExpenseCategory::Food], Money::from_rupees(150));
        assert_eq!(by_cat[&ExpenseCategory::Housing], Money::from_rupees(300));
    }

    #[test]
    fn test_by_category() {
        let repo = ExpenseRepository::new();
        repo.upsert(expense(100, 1, ExpenseCategory::Food)).unwrap();
        repo.upsert(expense(300, 20, ExpenseCategory::Housing)).unwrap();

        let housing = repo.get_by_category(&ExpenseCategory::Housing).unwrap();
        assert_eq!(housing.len(), 1);
        assert_eq!(housing[0].amount, Money::from_rupees(300));
    }

    #[test]
    fn test_short_prefix_shared_by_two_ids_is_ambiguous() {
        let repo = ExpenseRepository::new();
        let mut first = expense(10, 1, ExpenseCategory::Food);
        let mut second = expense(20, 2, ExpenseCategory::Food);
        first.id = serde_json::from_str("\"abcd0000-0000-4000-8000-000000000000\"").unwrap();
        second.id = serde_json::from_str("\"abcd1111-0000-4000-8000-000000000000\"").unwrap();
        repo.upsert(first).unwrap();
        repo.upsert(second).unwrap();

        assert!(repo.find("abcd").unwrap_err().is_validation());
        assert_eq!(repo.find("abcd1").unwrap().unwrap().amount, Money::from_rupees(20));
        assert_eq!(repo.find("exp-abcd0000").unwrap().unwrap().amount, Money::from_rupees(10));
    }

    #[test]
    fn test_delete_removes_only_target() {
        let repo = ExpenseRepository::new();
        let keep = expense(100, 1, ExpenseCategory::Food);
        let remove = expense(200, 2, ExpenseCategory::Food);
        let (keep_id, remove_id) = (keep.id, remove.id);
        repo.upsert(keep).unwrap();
        repo.upsert(remove).unwrap();

        repo.delete(remove_id).unwrap();
        assert!(repo.get(keep_id).unwrap().is_some());
        assert!(repo.get(remove_id).unwrap().is_none());
    }
}
