//! Savings goal repository

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{GoalId, Money, SavingGoal};

use super::{checked_total, read_lock_error, single_match, write_lock_error};

/// Repository for savings goals
#[derive(Default)]
pub struct GoalRepository {
    goals: RwLock<HashMap<GoalId, SavingGoal>>,
}

impl GoalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the table contents (used when loading and rolling back)
    pub fn replace_all(&self, list: Vec<SavingGoal>) -> Result<(), FinanceError> {
        let mut goals = self.goals.write().map_err(write_lock_error)?;
        goals.clear();
        goals.extend(list.into_iter().map(|g| (g.id, g)));
        Ok(())
    }

    /// All goals; open goals first, then by deadline, then by title
    pub fn get_all(&self) -> Result<Vec<SavingGoal>, FinanceError> {
        let goals = self.goals.read().map_err(read_lock_error)?;
        let mut list: Vec<_> = goals.values().cloned().collect();
        list.sort_by(|a, b| {
            a.is_complete()
                .cmp(&b.is_complete())
                .then_with(|| match (a.deadline, b.deadline) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                })
                .then_with(|| a.title.cmp(&b.title))
        });
        Ok(list)
    }

    pub fn get(&self, id: GoalId) -> Result<Option<SavingGoal>, FinanceError> {
        let goals = self.goals.read().map_err(read_lock_error)?;
        Ok(goals.get(&id).cloned())
    }

    /// Find a goal by ID or by title (case-insensitive)
    pub fn find(&self, identifier: &str) -> Result<Option<SavingGoal>, FinanceError> {
        let goals = self.goals.read().map_err(read_lock_error)?;
        let identifier = identifier.trim();
        let by_title: Vec<_> = goals
            .values()
            .filter(|g| g.title.eq_ignore_ascii_case(identifier))
            .collect();
        if !by_title.is_empty() {
            return single_match(identifier, by_title);
        }
        single_match(
            identifier,
            goals.values().filter(|g| g.id.matches(identifier)).collect(),
        )
    }

    /// Whether another goal already uses `title` (case-insensitive)
    pub fn title_taken(&self, title: &str, except: Option<GoalId>) -> Result<bool, FinanceError> {
        let goals = self.goals.read().map_err(read_lock_error)?;
        let title = title.trim();
        Ok(goals
            .values()
            .any(|g| Some(g.id) != except && g.title.eq_ignore_ascii_case(title)))
    }

    pub fn upsert(&self, goal: SavingGoal) -> Result<(), FinanceError> {
        let mut goals = self.goals.write().map_err(write_lock_error)?;
        goals.insert(goal.id, goal);
        Ok(())
    }

    pub fn delete(&self, id: GoalId) -> Result<Option<SavingGoal>, FinanceError> {
        let mut goals = self.goals.write().map_err(write_lock_error)?;
        Ok(goals.remove(&id))
    }

    /// Sum of the current amount across all goals
    pub fn total_saved(&self) -> Result<Money, FinanceError> {
        let goals = self.goals.read().map_err(read_lock_error)?;
        checked_total("Total saved", goals.values().map(|g| g.current_amount))
    }
}
