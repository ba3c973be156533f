//! Income service

use chrono::NaiveDate;
use tracing::info;

use crate::error::{FinanceError, FinanceResult, Record};
use crate::models::{IncomeEntry, Money};
use crate::storage::Storage;

use super::non_empty;

/// Input for recording income
#[derive(Debug, Clone)]
pub struct RecordIncomeInput {
    pub amount: Money,
    pub date: NaiveDate,
    pub description: Option<String>,
    /// Where the money came from, e.g. "Salary"
    pub category: Option<String>,
}

pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn record(&self, input: RecordIncomeInput) -> FinanceResult<IncomeEntry> {
        let mut entry = IncomeEntry::new(input.amount, input.date);
        entry.description = non_empty(input.description);
        entry.category = non_empty(input.category);

        entry
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage
            .atomically(|s| s.income.upsert(entry.clone()))?;

        self.storage.log_create(&entry);
        info!(id = %entry.id, amount = %entry.amount, "income recorded");

        Ok(entry)
    }

    /// All income, newest first
    pub fn list(&self) -> FinanceResult<Vec<IncomeEntry>> {
        self.storage.income.get_all()
    }

    pub fn total(&self) -> FinanceResult<Money> {
        self.storage.income.total()
    }

    pub fn find(&self, identifier: &str) -> FinanceResult<IncomeEntry> {
        self.storage
            .income
            .find(identifier)?
            .ok_or_else(|| FinanceError::not_found(Record::Income, identifier))
    }

    /// Delete one entry and return it
    pub fn delete(&self, identifier: &str) -> FinanceResult<IncomeEntry> {
        let entry = self.find(identifier)?;

        self.storage.atomically(|s| s.income.delete(entry.id))?;

        self.storage.log_delete(&entry);

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinancePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn input(rupees: i64, day: u32) -> RecordIncomeInput {
        RecordIncomeInput {
            amount: Money::from_rupees(rupees),
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            description: None,
            category: Some("Salary".into()),
        }
    }

    #[test]
    fn test_record_and_total() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        service.record(input(50_000, 1)).unwrap();
        service.record(input(5_000, 15)).unwrap();

        assert_eq!(service.total().unwrap(), Money::from_rupees(55_000));
        let list = service.list().unwrap();
        assert_eq!(list[0].amount, Money::from_rupees(5_000));
        assert!(storage.is_initialized());
    }

    #[test]
    fn test_record_rejects_non_positive() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        let err = service.record(input(0, 1)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.income.count().unwrap(), 0);
    }

    #[test]
    fn test_blank_description_dropped() {
        let (_temp_dir, storage) = create_test_storage();
        let mut record = input(10, 1);
        record.description = Some("   ".into());

        let entry = IncomeService::new(&storage).record(record).unwrap();
        assert!(entry.description.is_none());
        assert_eq!(entry.label(), "Salary");
    }

    #[test]
    fn test_delete_removes_only_that_entry() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);
        let keep = service.record(input(100, 1)).unwrap();
        let gone = service.record(input(200, 2)).unwrap();

        service.delete(&gone.id.to_string()).unwrap();

        let list = service.list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, keep.id);
        assert!(service.delete(&gone.id.to_string()).unwrap_err().is_not_found());
    }
}
