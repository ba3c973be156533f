//! Loan model
//!
//! A loan tracks an outstanding debt repaid in monthly installments on a
//! fixed day of the month.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::LoanId;
use super::money::Money;

/// Validation errors for loans
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoanValidationError {
    EmptyTitle,
    NonPositiveTotal,
    NegativeRemaining,
    RemainingExceedsTotal,
    NonPositiveMonthlyPayment,
    InvalidDueDay(u32),
}

impl fmt::Display for LoanValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Loan title cannot be empty"),
            Self::NonPositiveTotal => write!(f, "Loan total amount must be positive"),
            Self::NegativeRemaining => write!(f, "Loan remaining amount cannot be negative"),
            Self::RemainingExceedsTotal => {
                write!(f, "Loan remaining amount cannot exceed the total amount")
            }
            Self::NonPositiveMonthlyPayment => write!(f, "Monthly payment must be positive"),
            Self::InvalidDueDay(day) => {
                write!(f, "Due day must be between 1 and 31 (got {})", day)
            }
        }
    }
}

impl std::error::Error for LoanValidationError {}

/// A loan being repaid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub title: String,
    pub total_amount: Money,
    pub remaining_amount: Money,
    pub monthly_payment: Money,
    /// Day of month the installment is due (1-31, clamped to short months)
    pub due_day: u32,
    pub next_payment_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Loan {
    /// Create a new loan. The first payment date is the next occurrence of
    /// `due_day` on or after `today`.
    pub fn new(
        title: impl Into<String>,
        total_amount: Money,
        remaining_amount: Money,
        monthly_payment: Money,
        due_day: u32,
        today: NaiveDate,
    ) -> Result<Self, LoanValidationError> {
        let next_payment_date =
            first_due_date(today, due_day).ok_or(LoanValidationError::InvalidDueDay(due_day))?;
        let now = Utc::now();
        let loan = Self {
            id: LoanId::new(),
            title: title.into(),
            total_amount,
            remaining_amount,
            monthly_payment,
            due_day,
            next_payment_date,
            created_at: now,
            updated_at: now,
        };
        loan.validate()?;
        Ok(loan)
    }

    /// Validate the loan
    pub fn validate(&self) -> Result<(), LoanValidationError> {
        if self.title.trim().is_empty() {
            return Err(LoanValidationError::EmptyTitle);
        }
        if !self.total_amount.is_positive() {
            return Err(LoanValidationError::NonPositiveTotal);
        }
        if self.remaining_amount.is_negative() {
            return Err(LoanValidationError::NegativeRemaining);
        }
        if self.remaining_amount > self.total_amount {
            return Err(LoanValidationError::RemainingExceedsTotal);
        }
        if !self.monthly_payment.is_positive() {
            return Err(LoanValidationError::NonPositiveMonthlyPayment);
        }
        if !(1..=31).contains(&self.due_day) {
            return Err(LoanValidationError::InvalidDueDay(self.due_day));
        }
        Ok(())
    }

    /// Apply a payment. The remaining amount is clamped at zero and the next
    /// payment date moves one month forward. Returns the amount actually
    /// applied to the balance.
    pub fn apply_payment(&mut self, amount: Money) -> Money {
        let applied = amount.min(self.remaining_amount);
        self.remaining_amount -= applied;
        if let Some(next) = advance_due_date(self.next_payment_date, self.due_day) {
            self.next_payment_date = next;
        }
        self.updated_at = Utc::now();
        applied
    }

    /// Change the due day and realign the next payment date to it
    pub fn set_due_day(&mut self, due_day: u32) -> Result<(), LoanValidationError> {
        let date = self.next_payment_date;
        let realigned = due_date_in_month(date.year(), date.month(), due_day)
            .ok_or(LoanValidationError::InvalidDueDay(due_day))?;
        self.due_day = due_day;
        self.next_payment_date = realigned;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn is_paid_off(&self) -> bool {
        self.remaining_amount.is_zero()
    }

    /// Total repaid so far
    pub fn paid_amount(&self) -> Money {
        self.total_amount - self.remaining_amount
    }

    /// Percentage of the loan repaid (0-100)
    pub fn progress_percent(&self) -> f64 {
        self.paid_amount().percent_of(self.total_amount)
    }

    /// Number of monthly installments left at the current payment size
    pub fn installments_left(&self) -> i64 {
        let monthly = self.monthly_payment.paise();
        if monthly <= 0 {
            return 0;
        }
        (self.remaining_amount.paise() + monthly - 1) / monthly
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} of {} remaining)",
            self.title, self.remaining_amount, self.total_amount
        )
    }
}

/// Number of days in the given month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

/// The due date in a given month, clamping `due_day` to the month's length
pub fn due_date_in_month(year: i32, month: u32, due_day: u32) -> Option<NaiveDate> {
    if !(1..=31).contains(&due_day) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, due_day.min(days_in_month(year, month)))
}

/// First occurrence of `due_day` on or after `today`
pub fn first_due_date(today: NaiveDate, due_day: u32) -> Option<NaiveDate> {
    let this_month = due_date_in_month(today.year(), today.month(), due_day)?;
    if this_month >= today {
        Some(this_month)
    } else {
        advance_due_date(this_month, due_day)
    }
}

/// The due date one month after `current`
pub fn advance_due_date(current: NaiveDate, due_day: u32) -> Option<NaiveDate> {
    let (year, month) = if current.month() == 12 {
        (current.year() + 1, 1)
    } else {
        (current.year(), current.month() + 1)
    };
    due_date_in_month(year, month, due_day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_loan() -> Loan {
        Loan::new(
            "Bike loan",
            Money::from_rupees(12_000),
            Money::from_rupees(12_000),
            Money::from_rupees(2_000),
            5,
            ymd(2025, 1, 3),
        )
        .unwrap()
    }

    #[test]
    fn test_first_due_date() {
        assert_eq!(first_due_date(ymd(2025, 1, 3), 5), Some(ymd(2025, 1, 5)));
        assert_eq!(first_due_date(ymd(2025, 1, 5), 5), Some(ymd(2025, 1, 5)));
        assert_eq!(first_due_date(ymd(2025, 1, 6), 5), Some(ymd(2025, 2, 5)));
        assert_eq!(first_due_date(ymd(2025, 12, 20), 5), Some(ymd(2026, 1, 5)));
        assert_eq!(first_due_date(ymd(2025, 1, 1), 0), None);
    }

    #[test]
    fn test_advance_clamps_short_months() {
        assert_eq!(advance_due_date(ymd(2025, 1, 31), 31), Some(ymd(2025, 2, 28)));
        assert_eq!(advance_due_date(ymd(2025, 2, 28), 31), Some(ymd(2025, 3, 31)));
        assert_eq!(advance_due_date(ymd(2024, 1, 30), 30), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 12), 31);
        assert_eq!(days_in_month(2025, 4), 30);
    }

    #[test]
    fn test_apply_payment() {
        let mut loan = sample_loan();
        let applied = loan.apply_payment(Money::from_rupees(2_000));

        assert_eq!(applied, Money::from_rupees(2_000));
        assert_eq!(loan.remaining_amount, Money::from_rupees(10_000));
        assert_eq!(loan.next_payment_date, ymd(2025, 2, 5));
        assert_eq!(loan.installments_left(), 5);
    }

    #[test]
    fn test_overpayment_clamps_to_zero() {
        let mut loan = sample_loan();
        loan.remaining_amount = Money::from_rupees(1_500);

        let applied = loan.apply_payment(Money::from_rupees(2_000));
        assert_eq!(applied, Money::from_rupees(1_500));
        assert!(loan.is_paid_off());
        assert!(!loan.remaining_amount.is_negative());
        assert!((loan.progress_percent() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validation() {
        let today = ymd(2025, 1, 1);
        let rupees = Money::from_rupees;

        assert_eq!(
            Loan::new(" ", rupees(10), rupees(10), rupees(1), 5, today).unwrap_err(),
            LoanValidationError::EmptyTitle
        );
        assert_eq!(
            Loan::new("A", rupees(10), rupees(11), rupees(1), 5, today).unwrap_err(),
            LoanValidationError::RemainingExceedsTotal
        );
        assert_eq!(
            Loan::new("A", rupees(10), rupees(10), Money::zero(), 5, today).unwrap_err(),
            LoanValidationError::NonPositiveMonthlyPayment
        );
        assert_eq!(
            Loan::new("A", rupees(10), rupees(10), rupees(1), 32, today).unwrap_err(),
            LoanValidationError::InvalidDueDay(32)
        );
    }

    #[test]
    fn test_set_due_day_realigns_date() {
        let mut loan = sample_loan();
        loan.set_due_day(20).unwrap();
        assert_eq!(loan.due_day, 20);
        assert_eq!(loan.next_payment_date, ymd(2025, 1, 20));
        assert!(loan.set_due_day(40).is_err());
        assert_eq!(loan.due_day, 20);
    }
}
