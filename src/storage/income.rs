//! Income repository
//!
//! In-memory table of income entries, persisted as part of the ledger snapshot.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{IncomeEntry, IncomeId, Money};

use super::{checked_total, read_lock_error, single_match, write_lock_error};

/// Repository for income entries
#[derive(Default)]
pub struct IncomeRepository {
    entries: RwLock<HashMap<IncomeId, IncomeEntry>>,
}

impl IncomeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the table contents (used when loading and rolling back)
    pub fn replace_all(&self, list: Vec<IncomeEntry>) -> Result<(), FinanceError> {
        let mut entries = self.entries.write().map_err(write_lock_error)?;
        entries.clear();
        entries.extend(list.into_iter().map(|e| (e.id, e)));
        Ok(())
    }

    /// All entries, newest date first
    pub fn get_all(&self) -> Result<Vec<IncomeEntry>, FinanceError> {
        let entries = self.entries.read().map_err(read_lock_error)?;
        let mut list: Vec<_> = entries.values().cloned().collect();
        list.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(list)
    }

    pub fn get(&self, id: IncomeId) -> Result<Option<IncomeEntry>, FinanceError> {
        let entries = self.entries.read().map_err(read_lock_error)?;
        Ok(entries.get(&id).cloned())
    }

    /// Find an entry by full or short ID
    pub fn find(&self, identifier: &str) -> Result<Option<IncomeEntry>, FinanceError> {
        let entries = self.entries.read().map_err(read_lock_error)?;
        single_match(
            identifier,
            entries.values().filter(|e| e.id.matches(identifier)).collect(),
        )
    }

    pub fn upsert(&self, entry: IncomeEntry) -> Result<(), FinanceError> {
        let mut entries = self.entries.write().map_err(write_lock_error)?;
        entries.insert(entry.id, entry);
        Ok(())
    }

    pub fn delete(&self, id: IncomeId) -> Result<Option<IncomeEntry>, FinanceError> {
        let mut entries = self.entries.write().map_err(write_lock_error)?;
        Ok(entries.remove(&id))
    }

    /// Sum of all income
    pub fn total(&self) -> Result<Money, FinanceError> {
        let entries = self.entries.read().map_err(read_lock_error)?;
        checked_total("Total income", entries.values().map(|e| e.amount))
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        let entries = self.entries.read().map_err(read_lock_error)?;
        Ok(entries.len())
    }
}
