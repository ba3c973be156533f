//! Balance aggregation
//!
//! Every figure is recomputed from the ledgers on each call.

use crate::error::{FinanceError, FinanceResult};
use crate::models::{ExpenseCategory, Money};
use crate::storage::{checked_total, Storage};

/// Dashboard totals across all ledgers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BalanceSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    /// Part of `total_expenses` booked under Loans
    pub loan_payments: Money,
    /// Part of `total_expenses` booked under Savings
    pub savings_contributions: Money,
    /// `total_expenses` without loan payments and savings contributions
    pub everyday_spending: Money,
    /// `total_income - total_expenses`
    pub remaining_balance: Money,
    /// Sum of every loan's remaining amount
    pub outstanding_debt: Money,
    /// Sum of every goal's current amount
    pub total_saved: Money,
}

impl BalanceSummary {
    pub fn is_overspent(&self) -> bool {
        self.remaining_balance.is_negative()
    }
}

/// Total spent in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: ExpenseCategory,
    pub color: &'static str,
    pub amount: Money,
    /// Share of all expenses (0-100)
    pub share: f64,
}

pub struct BalanceService<'a> {
    storage: &'a Storage,
}

impl<'a> BalanceService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn summary(&self) -> FinanceResult<BalanceSummary> {
        let total_income = self.storage.income.total()?;
        let by_category = self.storage.expenses.totals_by_category()?;
        let total_expenses = checked_total("Total spending", by_category.values().copied())?;

        let loan_payments = by_category
            .get(&ExpenseCategory::Loans)
            .copied()
            .unwrap_or_default();
        let savings_contributions = by_category
            .get(&ExpenseCategory::Savings)
            .copied()
            .unwrap_or_default();

        let outstanding_debt = checked_total(
            "Outstanding debt",
            self.storage.loans.get_all()?.iter().map(|l| l.remaining_amount),
        )?;

        Ok(BalanceSummary {
            total_income,
            total_expenses,
            loan_payments,
            savings_contributions,
            everyday_spending: total_expenses - loan_payments - savings_contributions,
            remaining_balance: total_income - total_expenses,
            outstanding_debt,
            total_saved: self.storage.goals.total_saved()?,
        })
    }

    /// Total income minus total expenses
    pub fn remaining_balance(&self) -> FinanceResult<Money> {
        Ok(self.storage.income.total()? - self.storage.expenses.total()?)
    }

    /// Reject `amount` if it exceeds the remaining balance, or if there is
    /// no positive balance to spend from.
    pub fn ensure_affordable(&self, amount: Money) -> FinanceResult<()> {
        let available = self.remaining_balance()?;
        if amount > available || !available.is_positive() {
            return Err(FinanceError::InsufficientBalance {
                requested: amount,
                available,
            });
        }
        Ok(())
    }

    /// Spending per category, largest first
    pub fn spending_by_category(&self) -> FinanceResult<Vec<CategorySpending>> {
        let by_category = self.storage.expenses.totals_by_category()?;
        let total = checked_total("Total spending", by_category.values().copied())?;

        let mut rows: Vec<_> = by_category
            .into_iter()
            .map(|(category, amount)| CategorySpending {
                color: category.color(),
                share: amount.percent_of(total),
                category,
                amount,
            })
            .collect();
        rows.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.name().cmp(b.category.name()))
        });
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinancePaths;
    use crate::models::{ExpenseEntry, IncomeEntry, Loan, SavingGoal};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn expense(rupees: i64, category: ExpenseCategory) -> ExpenseEntry {
        ExpenseEntry::new(Money::from_rupees(rupees), date(), "test", category)
    }

    #[test]
    fn test_summary_breakdown() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .income
            .upsert(IncomeEntry::new(Money::from_rupees(50_000), date()))
            .unwrap();
        storage.expenses.upsert(expense(10_000, ExpenseCategory::Food)).unwrap();
        storage.expenses.upsert(expense(2_000, ExpenseCategory::Loans)).unwrap();
        storage.expenses.upsert(expense(600, ExpenseCategory::Savings)).unwrap();
        storage
            .loans
            .upsert(
                Loan::new(
                    "Car",
                    Money::from_rupees(12_000),
                    Money::from_rupees(10_000),
                    Money::from_rupees(2_000),
                    5,
                    date(),
                )
                .unwrap(),
            )
            .unwrap();
        storage
            .goals
            .upsert(
                SavingGoal::new("Trip", Money::from_rupees(5_000), Money::from_rupees(600), None)
                    .unwrap(),
            )
            .unwrap();

        let summary = BalanceService::new(&storage).summary().unwrap();
        assert_eq!(summary.total_income, Money::from_rupees(50_000));
        assert_eq!(summary.total_expenses, Money::from_rupees(12_600));
        assert_eq!(summary.loan_payments, Money::from_rupees(2_000));
        assert_eq!(summary.savings_contributions, Money::from_rupees(600));
        assert_eq!(summary.everyday_spending, Money::from_rupees(10_000));
        assert_eq!(summary.remaining_balance, Money::from_rupees(37_400));
        assert_eq!(summary.outstanding_debt, Money::from_rupees(10_000));
        assert_eq!(summary.total_saved, Money::from_rupees(600));
        assert!(!summary.is_overspent());
    }

    #[test]
    fn test_remaining_is_income_minus_expenses() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .income
            .upsert(IncomeEntry::new(Money::from_rupees(300), date()))
            .unwrap();
        storage.expenses.upsert(expense(120, ExpenseCategory::Food)).unwrap();
        storage.expenses.upsert(expense(80, ExpenseCategory::Personal)).unwrap();

        let service = BalanceService::new(&storage);
        assert_eq!(service.remaining_balance().unwrap(), Money::from_rupees(100));
        assert_eq!(service.summary().unwrap().remaining_balance, Money::from_rupees(100));
    }

    #[test]
    fn test_summary_reports_totals_too_large_to_add() {
        let (_temp_dir, storage) = create_test_storage();
        for _ in 0..2 {
            storage
                .income
                .upsert(IncomeEntry::new(Money::from_paise(i64::MAX / 2 + 1), date()))
                .unwrap();
        }

        let service = BalanceService::new(&storage);
        assert!(service.summary().unwrap_err().is_validation());
        assert!(service.remaining_balance().unwrap_err().is_validation());
    }

    #[test]
    fn test_ensure_affordable() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BalanceService::new(&storage);

        let err = service.ensure_affordable(Money::from_rupees(100)).unwrap_err();
        assert!(matches!(
            err,
            FinanceError::InsufficientBalance { available, .. } if available.is_zero()
        ));

        storage
            .income
            .upsert(IncomeEntry::new(Money::from_rupees(100), date()))
            .unwrap();
        assert!(service.ensure_affordable(Money::from_rupees(100)).is_ok());
        assert!(service.ensure_affordable(Money::from_paise(10_001)).is_err());
    }

    #[test]
    fn test_spending_by_category_sorted() {
        let (_temp_dir, storage) = create_test_storage();
        storage.expenses.upsert(expense(100, ExpenseCategory::Food)).unwrap();
        storage.expenses.upsert(expense(300, ExpenseCategory::Housing)).unwrap();
        storage.expenses.upsert(expense(100, ExpenseCategory::Food)).unwrap();

        let rows = BalanceService::new(&storage).spending_by_category().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, ExpenseCategory::Housing);
        assert_eq!(rows[1].amount, Money::from_rupees(200));
        assert!((rows[0].share - 60.0).abs() < 1e-9);
        assert_eq!(rows[1].color, ExpenseCategory::Food.color());
    }
}
