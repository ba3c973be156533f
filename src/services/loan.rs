//! Loan service
//!
//! A payment reduces the loan, moves its due date forward and books a
//! matching "Loans" expense. Both changes are committed in one write.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{FinanceError, FinanceResult, Record};
use crate::models::{ExpenseEntry, Loan, Money};
use crate::storage::Storage;

use super::balance::BalanceService;

/// Input for creating a loan
#[derive(Debug, Clone)]
pub struct CreateLoanInput {
    pub title: String,
    pub total_amount: Money,
    /// Defaults to the total when not given
    pub remaining_amount: Option<Money>,
    pub monthly_payment: Money,
    pub due_day: u32,
    /// Date the first due date is computed from
    pub today: NaiveDate,
}

/// Fields to change on an existing loan
#[derive(Debug, Clone, Default)]
pub struct UpdateLoanInput {
    pub title: Option<String>,
    pub total_amount: Option<Money>,
    pub remaining_amount: Option<Money>,
    pub monthly_payment: Option<Money>,
    pub due_day: Option<u32>,
}

impl UpdateLoanInput {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.total_amount.is_none()
            && self.remaining_amount.is_none()
            && self.monthly_payment.is_none()
            && self.due_day.is_none()
    }
}

/// Outcome of a loan payment
#[derive(Debug, Clone)]
pub struct LoanPayment {
    pub loan: Loan,
    pub expense: ExpenseEntry,
    /// Amount taken off the loan (capped at what was owed)
    pub applied: Money,
    pub paid_off: bool,
}

pub struct LoanService<'a> {
    storage: &'a Storage,
}

impl<'a> LoanService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(&self, input: CreateLoanInput) -> FinanceResult<Loan> {
        let loan = Loan::new(
            input.title.trim(),
            input.total_amount,
            input.remaining_amount.unwrap_or(input.total_amount),
            input.monthly_payment,
            input.due_day,
            input.today,
        )
        .map_err(|e| FinanceError::Validation(e.to_string()))?;
        if self.storage.loans.title_taken(&loan.title, None)? {
            return Err(FinanceError::duplicate(Record::Loan, loan.title));
        }

        self.storage.atomically(|s| s.loans.upsert(loan.clone()))?;

        self.storage.log_create(&loan);
        info!(id = %loan.id, next = %loan.next_payment_date, "loan created");

        Ok(loan)
    }

    /// Edit a loan in place. Payments should go through [`Self::pay`].
    pub fn update(&self, identifier: &str, input: UpdateLoanInput) -> FinanceResult<Loan> {
        if input.is_empty() {
            return Err(FinanceError::Validation("Nothing to update".into()));
        }

        let before = self.find(identifier)?;
        let mut loan = before.clone();

        if let Some(title) = input.title {
            let title = title.trim();
            if self.storage.loans.title_taken(title, Some(loan.id))? {
                return Err(FinanceError::duplicate(Record::Loan, title));
            }
            loan.title = title.to_string();
        }
        if let Some(total) = input.total_amount {
            loan.total_amount = total;
        }
        if let Some(remaining) = input.remaining_amount {
            loan.remaining_amount = remaining;
        }
        if let Some(monthly) = input.monthly_payment {
            loan.monthly_payment = monthly;
        }
        if let Some(due_day) = input.due_day {
            loan.set_due_day(due_day)
                .map_err(|e| FinanceError::Validation(e.to_string()))?;
        }
        loan.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        loan.updated_at = chrono::Utc::now();

        self.storage.atomically(|s| s.loans.upsert(loan.clone()))?;

        self.storage.log_update(&before, &loan);

        Ok(loan)
    }

    /// Record a payment against a loan
    pub fn pay(&self, identifier: &str, amount: Money, date: NaiveDate) -> FinanceResult<LoanPayment> {
        if !amount.is_positive() {
            return Err(FinanceError::Validation(
                "Payment amount must be positive".into(),
            ));
        }

        let before = self.find(identifier)?;
        BalanceService::new(self.storage)
            .ensure_affordable(amount)
            .inspect_err(|e| info!(amount = %amount, "loan payment refused: {}", e))?;

        if before.is_paid_off() {
            return Err(FinanceError::Validation(format!(
                "Loan '{}' is already paid off",
                before.title
            )));
        }

        let mut loan = before.clone();
        let applied = loan.apply_payment(amount);
        let expense = ExpenseEntry::loan_payment(loan.id, &loan.title, applied, date);

        self.storage.atomically(|s| {
            s.loans.upsert(loan.clone())?;
            s.expenses.upsert(expense.clone())
        })?;

        self.storage.log_update(&before, &loan);
        self.storage.log_create(&expense);

        let paid_off = loan.is_paid_off();
        info!(id = %loan.id, applied = %applied, paid_off, "loan payment recorded");

        Ok(LoanPayment {
            loan,
            expense,
            applied,
            paid_off,
        })
    }

    /// Delete a loan. Payments already booked as expenses stay.
    pub fn delete(&self, identifier: &str) -> FinanceResult<Loan> {
        let loan = self.find(identifier)?;

        self.storage.atomically(|s| s.loans.delete(loan.id))?;

        self.storage.log_delete(&loan);

        Ok(loan)
    }

    /// All loans by next payment date
    pub fn list(&self) -> FinanceResult<Vec<Loan>> {
        self.storage.loans.get_all()
    }

    /// Find a loan by title or ID
    pub fn find(&self, identifier: &str) -> FinanceResult<Loan> {
        self.storage
            .loans
            .find(identifier)?
            .ok_or_else(|| FinanceError::not_found(Record::Loan, identifier))
    }
}
