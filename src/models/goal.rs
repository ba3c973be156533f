//! Savings goal model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyTitle,
    NonPositiveTarget,
    NegativeCurrent,
    AlreadyReached,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Goal title cannot be empty"),
            Self::NonPositiveTarget => write!(f, "Goal target amount must be positive"),
            Self::NegativeCurrent => write!(f, "Goal current amount cannot be negative"),
            Self::AlreadyReached => {
                write!(f, "Current amount must be less than the target amount")
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingGoal {
    pub id: GoalId,
    pub title: String,
    pub target_amount: Money,
    pub current_amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SavingGoal {
    /// Create a new goal. A goal that starts at or above its target is rejected.
    pub fn new(
        title: impl Into<String>,
        target_amount: Money,
        current_amount: Money,
        deadline: Option<NaiveDate>,
    ) -> Result<Self, GoalValidationError> {
        let now = Utc::now();
        let goal = Self {
            id: GoalId::new(),
            title: title.into(),
            target_amount,
            current_amount,
            deadline,
            created_at: now,
            updated_at: now,
        };
        goal.validate()?;
        if goal.is_complete() {
            return Err(GoalValidationError::AlreadyReached);
        }
        Ok(goal)
    }

    /// Validate field ranges (completion is allowed here; edits may record it)
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.title.trim().is_empty() {
            return Err(GoalValidationError::EmptyTitle);
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget);
        }
        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent);
        }
        Ok(())
    }

    /// Add a contribution. The target does not cap the amount saved.
    pub fn contribute(&mut self, amount: Money) {
        self.current_amount += amount;
        self.updated_at = Utc::now();
    }

    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Amount still needed (zero once complete)
    pub fn remaining(&self) -> Money {
        if self.is_complete() {
            Money::zero()
        } else {
            self.target_amount - self.current_amount
        }
    }

    /// Progress towards the target, may exceed 100 after overshoot
    pub fn progress_percent(&self) -> f64 {
        self.current_amount.percent_of(self.target_amount)
    }

    /// Whether the deadline has passed without reaching the target
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_complete() && self.deadline.is_some_and(|d| d < today)
    }
}

impl fmt::Display for SavingGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} of {})",
            self.title, self.current_amount, self.target_amount
        )
    }
}
