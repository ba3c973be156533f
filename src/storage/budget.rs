//! Budget plan repository
//!
//! Holds the current allocation rows. The plan is only ever replaced as a
//! whole; there is no per-row update.

use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{BudgetCategory, Money};

use super::{checked_total, read_lock_error, write_lock_error};

/// Repository for the budget plan
#[derive(Default)]
pub struct BudgetRepository {
    rows: RwLock<Vec<BudgetCategory>>,
}

impl BudgetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every row. Categories missing from `rows` are dropped.
    pub fn replace_all(&self, rows: Vec<BudgetCategory>) -> Result<(), FinanceError> {
        let mut current = self.rows.write().map_err(write_lock_error)?;
        *current = rows;
        Ok(())
    }

    pub fn get_all(&self) -> Result<Vec<BudgetCategory>, FinanceError> {
        let rows = self.rows.read().map_err(read_lock_error)?;
        Ok(rows.clone())
    }

    pub fn total(&self) -> Result<Money, FinanceError> {
        let rows = self.rows.read().map_err(read_lock_error)?;
        checked_total("Total allocated", rows.iter().map(|r| r.amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;

    #[test]
    fn test_replace_drops_missing_categories() {
        let repo = BudgetRepository::new();
        repo.replace_all(vec![
            BudgetCategory::new(ExpenseCategory::Food, Money::from_rupees(100)),
            BudgetCategory::new(ExpenseCategory::Housing, Money::from_rupees(200)),
        ])
        .unwrap();
        assert_eq!(repo.total().unwrap(), Money::from_rupees(300));

        repo.replace_all(vec![BudgetCategory::new(
            ExpenseCategory::Shopping,
            Money::from_rupees(50),
        )])
        .unwrap();

        let rows = repo.get_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, ExpenseCategory::Shopping);
    }
}
