//! Budget allocation model
//!
//! A budget plan assigns a planned spending amount to each category. It is
//! independent from recorded expenses and is always saved as a whole.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::category::ExpenseCategory;
use super::money::Money;

/// Planned spending for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub category: ExpenseCategory,
    pub amount: Money,
    /// Share of income the user intends for this category, if given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

impl BudgetCategory {
    pub fn new(category: ExpenseCategory, amount: Money) -> Self {
        Self {
            category,
            amount,
            percentage: None,
        }
    }

    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.percentage = Some(percentage);
        self
    }

    /// Parse a `CATEGORY=AMOUNT[@PERCENT]` allocation spec
    ///
    /// ```
    /// use finance_tracker::models::{BudgetCategory, ExpenseCategory, Money};
    /// let row = BudgetCategory::parse_spec("Food=12000@30").unwrap();
    /// assert_eq!(row.category, ExpenseCategory::Food);
    /// assert_eq!(row.amount, Money::from_rupees(12_000));
    /// assert_eq!(row.percentage, Some(30.0));
    /// ```
    pub fn parse_spec(spec: &str) -> Result<Self, BudgetValidationError> {
        let invalid = || BudgetValidationError::InvalidSpec(spec.to_string());

        let (category, rest) = spec.split_once('=').ok_or_else(invalid)?;
        if category.trim().is_empty() {
            return Err(invalid());
        }

        let (amount, percentage) = match rest.split_once('@') {
            Some((amount, pct)) => {
                let pct: f64 = pct
                    .trim()
                    .trim_end_matches('%')
                    .parse()
                    .map_err(|_| invalid())?;
                (amount, Some(pct))
            }
            None => (rest, None),
        };

        let amount = Money::parse(amount).map_err(|_| invalid())?;
        Ok(Self {
            category: ExpenseCategory::parse(category),
            amount,
            percentage,
        })
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeAmount(
                self.category.name().to_string(),
            ));
        }
        if let Some(pct) = self.percentage {
            if !(0.0..=100.0).contains(&pct) {
                return Err(BudgetValidationError::PercentageOutOfRange(pct));
            }
        }
        Ok(())
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percentage {
            Some(pct) => write!(f, "{}: {} ({:.0}%)", self.category, self.amount, pct),
            None => write!(f, "{}: {}", self.category, self.amount),
        }
    }
}

/// Validate a complete plan: every row valid, each category at most once
pub fn validate_plan(rows: &[BudgetCategory]) -> Result<(), BudgetValidationError> {
    let mut seen = HashSet::new();
    for row in rows {
        row.validate()?;
        if !seen.insert(&row.category) {
            return Err(BudgetValidationError::DuplicateCategory(
                row.category.name().to_string(),
            ));
        }
    }
    Ok(())
}

/// Validation errors for budget plans
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetValidationError {
    NegativeAmount(String),
    PercentageOutOfRange(f64),
    DuplicateCategory(String),
    InvalidSpec(String),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(cat) => write!(f, "Allocation for '{}' cannot be negative", cat),
            Self::PercentageOutOfRange(pct) => {
                write!(f, "Percentage must be between 0 and 100 (got {})", pct)
            }
            Self::DuplicateCategory(cat) => {
                write!(f, "Category '{}' is allocated more than once", cat)
            }
            Self::InvalidSpec(spec) => write!(
                f,
                "Invalid allocation '{}'. Use CATEGORY=AMOUNT or CATEGORY=AMOUNT@PERCENT",
                spec
            ),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
