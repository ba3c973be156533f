//! Savings goal service

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::error::{FinanceError, FinanceResult, Record};
use crate::models::{ExpenseEntry, Money, SavingGoal};
use crate::storage::Storage;

use super::balance::BalanceService;

/// Input for creating a savings goal
#[derive(Debug, Clone)]
pub struct CreateGoalInput {
    pub title: String,
    pub target_amount: Money,
    pub current_amount: Money,
    pub deadline: Option<NaiveDate>,
}

/// Fields to change on an existing goal
#[derive(Debug, Clone, Default)]
pub struct UpdateGoalInput {
    pub title: Option<String>,
    pub target_amount: Option<Money>,
    pub current_amount: Option<Money>,
    pub deadline: Option<NaiveDate>,
    pub clear_deadline: bool,
}

impl UpdateGoalInput {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.target_amount.is_none()
            && self.current_amount.is_none()
            && self.deadline.is_none()
            && !self.clear_deadline
    }
}

/// Outcome of a contribution
#[derive(Debug, Clone)]
pub struct GoalContribution {
    pub goal: SavingGoal,
    pub expense: ExpenseEntry,
    /// The contribution reached (or passed) the target
    pub completed: bool,
}

pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(&self, input: CreateGoalInput) -> FinanceResult<SavingGoal> {
        let goal = SavingGoal::new(
            input.title.trim(),
            input.target_amount,
            input.current_amount,
            input.deadline,
        )
        .map_err(|e| FinanceError::Validation(e.to_string()))?;
        if self.storage.goals.title_taken(&goal.title, None)? {
            return Err(FinanceError::duplicate(Record::Goal, goal.title));
        }

        self.storage.atomically(|s| s.goals.upsert(goal.clone()))?;

        self.storage.log_create(&goal);
        info!(id = %goal.id, "savings goal created");

        Ok(goal)
    }

    pub fn update(&self, identifier: &str, input: UpdateGoalInput) -> FinanceResult<SavingGoal> {
        if input.is_empty() {
            return Err(FinanceError::Validation("Nothing to update".into()));
        }

        let before = self.find(identifier)?;
        let mut goal = before.clone();

        if let Some(title) = input.title {
            let title = title.trim();
            if self.storage.goals.title_taken(title, Some(goal.id))? {
                return Err(FinanceError::duplicate(Record::Goal, title));
            }
            goal.title = title.to_string();
        }
        if let Some(target) = input.target_amount {
            goal.target_amount = target;
        }
        if let Some(current) = input.current_amount {
            goal.current_amount = current;
        }
        if input.clear_deadline {
            goal.deadline = None;
        } else if input.deadline.is_some() {
            goal.deadline = input.deadline;
        }
        goal.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        goal.updated_at = Utc::now();

        self.storage.atomically(|s| s.goals.upsert(goal.clone()))?;

        self.storage.log_update(&before, &goal);

        Ok(goal)
    }

    /// Move money into a goal. The contribution is booked as a "Savings"
    /// expense in the same write. The final contribution may overshoot the
    /// target; a goal that is already complete takes no more.
    pub fn contribute(
        &self,
        identifier: &str,
        amount: Money,
        date: NaiveDate,
    ) -> FinanceResult<GoalContribution> {
        if !amount.is_positive() {
            return Err(FinanceError::Validation(
                "Contribution amount must be positive".into(),
            ));
        }

        let before = self.find(identifier)?;
        BalanceService::new(self.storage)
            .ensure_affordable(amount)
            .inspect_err(|e| info!(amount = %amount, "goal contribution refused: {}", e))?;

        if before.is_complete() {
            return Err(FinanceError::Validation(format!(
                "Savings goal '{}' is already complete",
                before.title
            )));
        }

        let mut goal = before.clone();
        goal.contribute(amount);
        let expense = ExpenseEntry::goal_contribution(goal.id, &goal.title, amount, date);

        self.storage.atomically(|s| {
            s.goals.upsert(goal.clone())?;
            s.expenses.upsert(expense.clone())
        })?;

        self.storage.log_update(&before, &goal);
        self.storage.log_create(&expense);

        let completed = goal.is_complete();
        info!(id = %goal.id, amount = %amount, completed, "goal contribution recorded");

        Ok(GoalContribution {
            goal,
            expense,
            completed,
        })
    }

    /// Delete a goal. Contributions already booked as expenses stay.
    pub fn delete(&self, identifier: &str) -> FinanceResult<SavingGoal> {
        let goal = self.find(identifier)?;

        self.storage.atomically(|s| s.goals.delete(goal.id))?;

        self.storage.log_delete(&goal);

        Ok(goal)
    }

    pub fn list(&self) -> FinanceResult<Vec<SavingGoal>> {
        self.storage.goals.get_all()
    }

    /// Find a goal by title or ID
    pub fn find(&self, identifier: &str) -> FinanceResult<SavingGoal> {
        self.storage
            .goals
            .find(identifier)?
            .ok_or_else(|| FinanceError::not_found(Record::Goal, identifier))
    }
}
