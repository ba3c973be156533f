//! Storage layer for the finance tracker
//!
//! Every ledger table lives in memory behind its own repository and is
//! persisted together as one JSON snapshot (`data/ledger.json`). A commit
//! rewrites the whole snapshot atomically, so operations touching several
//! tables (a loan payment and the expense it generates) land together or
//! not at all.

pub mod budget;
pub mod expenses;
pub mod file_io;
pub mod goals;
pub mod income;
pub mod init;
pub mod loans;
pub mod profile;

pub use budget::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use income::IncomeRepository;
pub use init::{initialize_storage, needs_initialization};
pub use loans::LoanRepository;
pub use profile::ProfileStore;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::audit::{AuditEntry, AuditLogger, Audited};
use crate::config::paths::FinancePaths;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{BudgetCategory, ExpenseEntry, IncomeEntry, Loan, Money, SavingGoal};

/// Current ledger snapshot schema version
pub const LEDGER_SCHEMA_VERSION: u32 = 1;

/// On-disk shape of the ledger snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerData {
    #[serde(default)]
    pub schema_version: u32,
    #[serde(default)]
    pub income: Vec<IncomeEntry>,
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
    #[serde(default)]
    pub loans: Vec<Loan>,
    #[serde(default)]
    pub saving_goals: Vec<SavingGoal>,
    #[serde(default)]
    pub budget_categories: Vec<BudgetCategory>,
}

pub(crate) fn read_lock_error<E: std::fmt::Display>(e: E) -> FinanceError {
    FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
}

pub(crate) fn write_lock_error<E: std::fmt::Display>(e: E) -> FinanceError {
    FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
}

/// Sum a ledger column, failing instead of wrapping
pub(crate) fn checked_total<I>(what: &str, amounts: I) -> Result<Money, FinanceError>
where
    I: IntoIterator<Item = Money>,
{
    Money::checked_sum(amounts).ok_or_else(|| {
        FinanceError::Validation(format!("{} is too large to total", what))
    })
}

/// The one record a user reference points at. More than one hit is an error
/// so a short prefix never picks an arbitrary record.
pub(crate) fn single_match<T: Clone>(
    reference: &str,
    mut hits: Vec<&T>,
) -> Result<Option<T>, FinanceError> {
    match hits.len() {
        0 | 1 => Ok(hits.pop().cloned()),
        n => Err(FinanceError::Validation(format!(
            "Ambiguous reference '{}': it matches {} records, use a longer ID",
            reference.trim(),
            n
        ))),
    }
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinancePaths,
    audit: AuditLogger,
    pub income: IncomeRepository,
    pub expenses: ExpenseRepository,
    pub loans: LoanRepository,
    pub goals: GoalRepository,
    pub budget: BudgetRepository,
    pub profile: ProfileStore,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: FinancePaths) -> Result<Self, FinanceError> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            income: IncomeRepository::new(),
            expenses: ExpenseRepository::new(),
            loans: LoanRepository::new(),
            goals: GoalRepository::new(),
            budget: BudgetRepository::new(),
            profile: ProfileStore::new(paths.profile_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &FinancePaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load every ledger from disk. A failure leaves nothing half-loaded.
    pub fn load_all(&mut self) -> Result<(), FinanceError> {
        let data: LedgerData = read_json(self.paths.ledger_file())?;
        if data.schema_version > LEDGER_SCHEMA_VERSION {
            return Err(FinanceError::Storage(format!(
                "Ledger schema version {} is newer than supported version {}",
                data.schema_version, LEDGER_SCHEMA_VERSION
            )));
        }
        self.profile.load()?;
        self.restore(data)?;
        debug!("ledger loaded from {}", self.paths.ledger_file().display());
        Ok(())
    }

    /// Capture the current contents of every table
    pub fn snapshot(&self) -> Result<LedgerData, FinanceError> {
        Ok(LedgerData {
            schema_version: LEDGER_SCHEMA_VERSION,
            income: self.income.get_all()?,
            expenses: self.expenses.get_all()?,
            loans: self.loans.get_all()?,
            saving_goals: self.goals.get_all()?,
            budget_categories: self.budget.get_all()?,
        })
    }

    /// Put every table back to the contents of `data`
    pub fn restore(&self, data: LedgerData) -> Result<(), FinanceError> {
        self.income.replace_all(data.income)?;
        self.expenses.replace_all(data.expenses)?;
        self.loans.replace_all(data.loans)?;
        self.goals.replace_all(data.saving_goals)?;
        self.budget.replace_all(data.budget_categories)?;
        Ok(())
    }

    /// Write the current state of every table to disk in one atomic write
    pub fn commit(&self) -> Result<(), FinanceError> {
        let data = self.snapshot()?;
        write_json_atomic(self.paths.ledger_file(), &data).inspect_err(|e| {
            error!(error = %e, "failed to write ledger snapshot");
        })
    }

    /// Run `op` against the in-memory tables and commit the result.
    ///
    /// If `op` fails or the commit fails, every table is restored to its
    /// state before `op` ran and the error is returned.
    pub fn atomically<T, F>(&self, op: F) -> FinanceResult<T>
    where
        F: FnOnce(&Storage) -> FinanceResult<T>,
    {
        let before = self.snapshot()?;

        match op(self).and_then(|value| self.commit().map(|_| value)) {
            Ok(value) => Ok(value),
            Err(e) => {
                if let Err(restore_err) = self.restore(before) {
                    error!(error = %restore_err, "failed to roll back in-memory ledger");
                }
                Err(e)
            }
        }
    }

    /// Check if the ledger file has been created
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Record a new record in the audit log
    pub fn log_create<T: Audited + ?Sized>(&self, record: &T) {
        self.write_audit(AuditEntry::created(record));
    }

    /// Record a change, with a field-level diff, in the audit log
    pub fn log_update<T: Audited + ?Sized>(&self, before: &T, after: &T) {
        self.write_audit(AuditEntry::updated(before, after));
    }

    /// Record a removed record in the audit log
    pub fn log_delete<T: Audited + ?Sized>(&self, record: &T) {
        self.write_audit(AuditEntry::deleted(record));
    }

    // The audit trail is written after the ledger commit; a failure here
    // must not report an already-committed change as failed.
    fn write_audit(&self, entry: AuditEntry) {
        if let Err(e) = self.audit.log(&entry) {
            warn!(error = %e, kind = %entry.kind, "failed to write audit entry");
        }
    }
}
