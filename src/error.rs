//! Error types for the finance tracker
//!
//! Input and business-rule failures (`Validation`, `NotFound`,
//! `InsufficientBalance`) are raised before anything is written. The rest
//! come from the data directory or an export target.

use std::fmt;

use thiserror::Error;

use crate::models::Money;

/// Kinds of record a lookup can miss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    Income,
    Expense,
    Loan,
    Goal,
    Profile,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Record::Income => "Income entry",
            Record::Expense => "Expense",
            Record::Loan => "Loan",
            Record::Goal => "Savings goal",
            Record::Profile => "Profile",
        })
    }
}

#[derive(Error, Debug)]
pub enum FinanceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// Bad user input or a record that breaks a model rule
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{record} not found: {reference}")]
    NotFound { record: Record, reference: String },

    /// Loan or goal title already in use
    #[error("{record} already exists: {name}")]
    Duplicate { record: Record, name: String },

    /// Remaining balance can't cover an expense, loan payment or contribution
    #[error("Insufficient balance: need {requested}, have {available}")]
    InsufficientBalance { requested: Money, available: Money },

    #[error("Export error: {0}")]
    Export(String),

    /// Ledger snapshot could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FinanceError {
    pub fn not_found(record: Record, reference: impl Into<String>) -> Self {
        Self::NotFound {
            record,
            reference: reference.into(),
        }
    }

    pub fn duplicate(record: Record, name: impl Into<String>) -> Self {
        Self::Duplicate {
            record,
            name: name.into(),
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

pub type FinanceResult<T> = Result<T, FinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_record() {
        let err = FinanceError::not_found(Record::Goal, "Trip");
        assert_eq!(err.to_string(), "Savings goal not found: Trip");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_duplicate_names_the_title() {
        let err = FinanceError::duplicate(Record::Loan, "Car");
        assert_eq!(err.to_string(), "Loan already exists: Car");
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_insufficient_balance_shows_both_amounts() {
        let err = FinanceError::InsufficientBalance {
            requested: Money::from_rupees(100),
            available: Money::zero(),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance: need ₹100.00, have ₹0.00"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: FinanceError = io_err.into();
        assert!(matches!(err, FinanceError::Io(_)));
    }
}
