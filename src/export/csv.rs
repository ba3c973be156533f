//! CSV export of income and expenses

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{ExpenseSource, Money};
use crate::storage::Storage;

fn export_err<E: std::fmt::Display>(e: E) -> FinanceError {
    FinanceError::Export(e.to_string())
}

/// Plain decimal amount without currency symbol
fn decimal(amount: Money) -> String {
    amount.format_with_symbol("")
}

pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: W) -> FinanceResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["ID", "Date", "Category", "Description", "Amount", "Source", "Linked ID"])
        .map_err(export_err)?;

    for expense in storage.expenses.get_all()? {
        let (source, linked) = match expense.source {
            ExpenseSource::Manual => ("manual", String::new()),
            ExpenseSource::LoanPayment(id) => ("loan_payment", id.as_uuid().to_string()),
            ExpenseSource::GoalContribution(id) => ("goal_contribution", id.as_uuid().to_string()),
        };
        csv.write_record([
            expense.id.as_uuid().to_string(),
            expense.date.to_string(),
            expense.category.name().to_string(),
            expense.description,
            decimal(expense.amount),
            source.to_string(),
            linked,
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)
}

pub fn export_income_csv<W: Write>(storage: &Storage, writer: W) -> FinanceResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["ID", "Date", "Source", "Description", "Amount"])
        .map_err(export_err)?;

    for entry in storage.income.get_all()? {
        csv.write_record([
            entry.id.as_uuid().to_string(),
            entry.date.to_string(),
            entry.category.unwrap_or_default(),
            entry.description.unwrap_or_default(),
            decimal(entry.amount),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)
}
