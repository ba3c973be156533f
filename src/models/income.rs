//! Income entry model
//!
//! An income entry records money received. Entries are immutable once
//! recorded; corrections are made by deleting and re-recording.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::IncomeId;
use super::money::Money;

/// Validation errors for income entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NonPositiveAmount,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Income amount must be positive"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// A single income entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeEntry {
    pub id: IncomeId,
    pub amount: Money,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Source of the income (e.g. "Salary", "Freelance")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl IncomeEntry {
    /// Create a new income entry
    pub fn new(amount: Money, date: NaiveDate) -> Self {
        Self {
            id: IncomeId::new(),
            amount,
            date,
            description: None,
            category: None,
            created_at: Utc::now(),
        }
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if !self.amount.is_positive() {
            return Err(IncomeValidationError::NonPositiveAmount);
        }
        Ok(())
    }

    /// Short label for audit entries and listings
    pub fn label(&self) -> String {
        match (&self.description, &self.category) {
            (Some(d), _) if !d.is_empty() => d.clone(),
            (_, Some(c)) if !c.is_empty() => c.clone(),
            _ => format!("Income on {}", self.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_new_income_entry() {
        let income = IncomeEntry::new(Money::from_rupees(50_000), date());
        assert_eq!(income.amount, Money::from_rupees(50_000));
        assert!(income.description.is_none());
        assert!(income.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_and_negative() {
        let zero = IncomeEntry::new(Money::zero(), date());
        assert_eq!(zero.validate(), Err(IncomeValidationError::NonPositiveAmount));

        let negative = IncomeEntry::new(Money::from_paise(-100), date());
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_label() {
        let mut income = IncomeEntry::new(Money::from_rupees(10), date());
        assert_eq!(income.label(), "Income on 2025-01-01");
        income.category = Some("Salary".into());
        assert_eq!(income.label(), "Salary");
        income.description = Some("January pay".into());
        assert_eq!(income.label(), "January pay");
    }
}
