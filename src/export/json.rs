//! Full JSON export

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{BudgetCategory, ExpenseEntry, IncomeEntry, Loan, Profile, SavingGoal};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything in the data directory except the audit log and avatars
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    pub income: Vec<IncomeEntry>,
    pub expenses: Vec<ExpenseEntry>,
    pub loans: Vec<Loan>,
    pub saving_goals: Vec<SavingGoal>,
    pub budget_categories: Vec<BudgetCategory>,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub income_count: usize,
    pub expense_count: usize,
    pub loan_count: usize,
    pub goal_count: usize,
    /// Earliest income or expense date
    pub earliest_entry: Option<NaiveDate>,
    /// Latest income or expense date
    pub latest_entry: Option<NaiveDate>,
}

impl FullExport {
    pub fn from_storage(storage: &Storage) -> FinanceResult<Self> {
        let ledger = storage.snapshot()?;

        let dates = ledger
            .income
            .iter()
            .map(|i| i.date)
            .chain(ledger.expenses.iter().map(|e| e.date));
        let (earliest_entry, latest_entry) = dates.fold((None, None), |(lo, hi), d| {
            (
                Some(lo.map_or(d, |lo: NaiveDate| lo.min(d))),
                Some(hi.map_or(d, |hi: NaiveDate| hi.max(d))),
            )
        });

        let metadata = ExportMetadata {
            income_count: ledger.income.len(),
            expense_count: ledger.expenses.len(),
            loan_count: ledger.loans.len(),
            goal_count: ledger.saving_goals.len(),
            earliest_entry,
            latest_entry,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            profile: storage.profile.get()?,
            income: ledger.income,
            expenses: ledger.expenses,
            loans: ledger.loans,
            saving_goals: ledger.saving_goals,
            budget_categories: ledger.budget_categories,
            metadata,
        })
    }
}

/// Write the full export as JSON
pub fn export_full_json<W: Write + ?Sized>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    let export = FullExport::from_storage(storage)?;

    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    result.map_err(|e| FinanceError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))
}
