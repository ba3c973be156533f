//! Budget allocation service
//!
//! The plan is a set of per-category spending targets. It is saved as a
//! whole and compared against what was actually spent.

use std::collections::HashMap;

use tracing::info;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{validate_plan, BudgetCategory, ExpenseCategory, Money};
use crate::storage::{checked_total, Storage};

/// Planned against actual for one category
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetComparison {
    pub category: ExpenseCategory,
    pub allocated: Money,
    pub spent: Money,
    /// `allocated - spent`, negative when over budget
    pub remaining: Money,
}

impl BudgetComparison {
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Share of the allocation already spent
    pub fn percent_used(&self) -> f64 {
        self.spent.percent_of(self.allocated)
    }
}

pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Replace the whole plan with `rows`
    pub fn save_plan(&self, rows: Vec<BudgetCategory>) -> FinanceResult<Vec<BudgetCategory>> {
        validate_plan(&rows).map_err(|e| FinanceError::Validation(e.to_string()))?;

        let before = self.storage.budget.get_all()?;
        self.storage
            .atomically(|s| s.budget.replace_all(rows.clone()))?;

        self.storage.log_update(&before, &rows);
        info!(categories = rows.len(), "budget plan saved");

        Ok(rows)
    }

    pub fn plan(&self) -> FinanceResult<Vec<BudgetCategory>> {
        self.storage.budget.get_all()
    }

    pub fn total_allocated(&self) -> FinanceResult<Money> {
        self.storage.budget.total()
    }

    /// Allocated vs spent for every planned category, in plan order
    pub fn compare(&self) -> FinanceResult<Vec<BudgetComparison>> {
        let spent: HashMap<ExpenseCategory, Money> = self.storage.expenses.totals_by_category()?;

        Ok(self
            .plan()?
            .into_iter()
            .map(|row| {
                let spent = spent.get(&row.category).copied().unwrap_or_default();
                BudgetComparison {
                    remaining: row.amount - spent,
                    allocated: row.amount,
                    category: row.category,
                    spent,
                }
            })
            .collect())
    }

    /// Spending in categories that have no allocation
    pub fn unplanned_spending(&self) -> FinanceResult<Money> {
        let plan = self.plan()?;
        let unplanned = self
            .storage
            .expenses
            .totals_by_category()?
            .into_iter()
            .filter(|(category, _)| !plan.iter().any(|row| &row.category == category))
            .map(|(_, amount)| amount);
        checked_total("Unplanned spending", unplanned)
    }

    pub fn clear(&self) -> FinanceResult<()> {
        self.save_plan(Vec::new()).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinancePaths;
    use crate::models::ExpenseEntry;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn row(category: ExpenseCategory, rupees: i64) -> BudgetCategory {
        BudgetCategory::new(category, Money::from_rupees(rupees))
    }

    #[test]
    fn test_save_replaces_whole_plan() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service
            .save_plan(vec![
                row(ExpenseCategory::Food, 12_000),
                row(ExpenseCategory::Housing, 15_000),
            ])
            .unwrap();
        assert_eq!(service.total_allocated().unwrap(), Money::from_rupees(27_000));

        service
            .save_plan(vec![row(ExpenseCategory::Entertainment, 2_000)])
            .unwrap();

        let plan = service.plan().unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].category, ExpenseCategory::Entertainment);
    }

    #[test]
    fn test_save_rejects_invalid_rows() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        service.save_plan(vec![row(ExpenseCategory::Food, 100)]).unwrap();

        let dupes = vec![row(ExpenseCategory::Food, 1), row(ExpenseCategory::Food, 2)];
        assert!(service.save_plan(dupes).unwrap_err().is_validation());

        let pct = vec![row(ExpenseCategory::Food, 1).with_percentage(150.0)];
        assert!(service.save_plan(pct).unwrap_err().is_validation());

        assert_eq!(service.plan().unwrap(), vec![row(ExpenseCategory::Food, 100)]);
    }

    #[test]
    fn test_compare_against_spending() {
        let (_temp_dir, storage) = create_test_storage();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        storage
            .expenses
            .upsert(ExpenseEntry::new(
                Money::from_rupees(1_500),
                date,
                "Dinner",
                ExpenseCategory::Food,
            ))
            .unwrap();
        storage
            .expenses
            .upsert(ExpenseEntry::new(
                Money::from_rupees(300),
                date,
                "Cinema",
                ExpenseCategory::Entertainment,
            ))
            .unwrap();

        let service = BudgetService::new(&storage);
        service
            .save_plan(vec![
                row(ExpenseCategory::Food, 1_000),
                row(ExpenseCategory::Housing, 5_000),
            ])
            .unwrap();

        let comparison = service.compare().unwrap();
        assert_eq!(comparison.len(), 2);
        assert!(comparison[0].is_over_budget());
        assert_eq!(comparison[0].remaining, Money::from_rupees(-500));
        assert!((comparison[0].percent_used() - 150.0).abs() < 1e-9);
        assert_eq!(comparison[1].spent, Money::zero());
        assert_eq!(service.unplanned_spending().unwrap(), Money::from_rupees(300));
    }

    #[test]
    fn test_custom_category_spending_matches_any_case() {
        let (_temp_dir, storage) = create_test_storage();
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        storage
            .expenses
            .upsert(ExpenseEntry::new(
                Money::from_rupees(400),
                date,
                "Vegetables",
                ExpenseCategory::parse("groceries"),
            ))
            .unwrap();

        let service = BudgetService::new(&storage);
        service
            .save_plan(vec![row(ExpenseCategory::parse("Groceries"), 1_000)])
            .unwrap();

        assert_eq!(service.compare().unwrap()[0].spent, Money::from_rupees(400));
        assert!(service.unplanned_spending().unwrap().is_zero());
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        service.save_plan(vec![row(ExpenseCategory::Food, 100)]).unwrap();
        service.clear().unwrap();
        assert!(service.plan().unwrap().is_empty());
    }
}
