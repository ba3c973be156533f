//! Loan repository

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{Loan, LoanId};

use super::{read_lock_error, single_match, write_lock_error};

/// Repository for loans
#[derive(Default)]
pub struct LoanRepository {
    loans: RwLock<HashMap<LoanId, Loan>>,
}

impl LoanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the table contents (used when loading and rolling back)
    pub fn replace_all(&self, list: Vec<Loan>) -> Result<(), FinanceError> {
        let mut loans = self.loans.write().map_err(write_lock_error)?;
        loans.clear();
        loans.extend(list.into_iter().map(|l| (l.id, l)));
        Ok(())
    }

    /// All loans ordered by next payment date
    pub fn get_all(&self) -> Result<Vec<Loan>, FinanceError> {
        let loans = self.loans.read().map_err(read_lock_error)?;
        let mut list: Vec<_> = loans.values().cloned().collect();
        list.sort_by(|a, b| {
            a.next_payment_date
                .cmp(&b.next_payment_date)
                .then_with(|| a.title.cmp(&b.title))
        });
        Ok(list)
    }

    pub fn get(&self, id: LoanId) -> Result<Option<Loan>, FinanceError> {
        let loans = self.loans.read().map_err(read_lock_error)?;
        Ok(loans.get(&id).cloned())
    }

    /// Find a loan by ID or by title (case-insensitive)
    pub fn find(&self, identifier: &str) -> Result<Option<Loan>, FinanceError> {
        let loans = self.loans.read().map_err(read_lock_error)?;
        let identifier = identifier.trim();
        let by_title: Vec<_> = loans
            .values()
            .filter(|l| l.title.eq_ignore_ascii_case(identifier))
            .collect();
        if !by_title.is_empty() {
            return single_match(identifier, by_title);
        }
        single_match(
            identifier,
            loans.values().filter(|l| l.id.matches(identifier)).collect(),
        )
    }

    /// Whether another loan already uses `title` (case-insensitive)
    pub fn title_taken(&self, title: &str, except: Option<LoanId>) -> Result<bool, FinanceError> {
        let loans = self.loans.read().map_err(read_lock_error)?;
        let title = title.trim();
        Ok(loans
            .values()
            .any(|l| Some(l.id) != except && l.title.eq_ignore_ascii_case(title)))
    }

    pub fn upsert(&self, loan: Loan) -> Result<(), FinanceError> {
        let mut loans = self.loans.write().map_err(write_lock_error)?;
        loans.insert(loan.id, loan);
        Ok(())
    }

    pub fn delete(&self, id: LoanId) -> Result<Option<Loan>, FinanceError> {
        let mut loans = self.loans.write().map_err(write_lock_error)?;
        Ok(loans.remove(&id))
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        let loans = self.loans.read().map_err(read_lock_error)?;
        Ok(loans.len())
    }
}
