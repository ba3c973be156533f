//! Audit trail records

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::diff::generate_diff;
use super::subject::Audited;

/// What happened to the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Created,
    Updated,
    Deleted,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Action::Created => "created",
            Action::Updated => "updated",
            Action::Deleted => "deleted",
        })
    }
}

/// Ledger record kinds recorded in the trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Income,
    Expense,
    Loan,
    SavingGoal,
    BudgetPlan,
    Profile,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            EntityType::Income => "income",
            EntityType::Expense => "expense",
            EntityType::Loan => "loan",
            EntityType::SavingGoal => "goal",
            EntityType::BudgetPlan => "budget",
            EntityType::Profile => "profile",
        })
    }
}

/// One line of `audit.log`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub at: DateTime<Utc>,
    pub action: Action,
    pub kind: EntityType,
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// `field: old -> new` pairs, updates only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    fn for_record<T: Audited + ?Sized>(action: Action, record: &T) -> Self {
        Self {
            at: Utc::now(),
            action,
            kind: T::ENTITY_TYPE,
            id: record.audit_id(),
            label: record.audit_label(),
            before: None,
            after: None,
            changes: None,
        }
    }

    pub fn created<T: Audited + ?Sized>(record: &T) -> Self {
        let mut entry = Self::for_record(Action::Created, record);
        entry.after = serde_json::to_value(record).ok();
        entry
    }

    /// The label and ID are taken from `after`
    pub fn updated<T: Audited + ?Sized>(before: &T, after: &T) -> Self {
        let mut entry = Self::for_record(Action::Updated, after);
        entry.before = serde_json::to_value(before).ok();
        entry.after = serde_json::to_value(after).ok();
        entry.changes = match (&entry.before, &entry.after) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };
        entry
    }

    pub fn deleted<T: Audited + ?Sized>(record: &T) -> Self {
        let mut entry = Self::for_record(Action::Deleted, record);
        entry.before = serde_json::to_value(record).ok();
        entry
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:<7} {:<7} {}",
            self.at.format("%Y-%m-%d %H:%M"),
            self.kind,
            self.action,
            self.id
        )?;
        if let Some(label) = &self.label {
            write!(f, " '{}'", label)?;
        }
        if let Some(changes) = &self.changes {
            write!(f, "\n    {}", changes)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetCategory, ExpenseCategory, IncomeEntry, Money, SavingGoal};
    use chrono::NaiveDate;

    fn goal() -> SavingGoal {
        SavingGoal::new(
            "Bike",
            Money::from_rupees(6_000),
            Money::from_rupees(4_500),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_kind_and_label_come_from_record() {
        let goal = goal();
        let entry = AuditEntry::created(&goal);

        assert_eq!(entry.action, Action::Created);
        assert_eq!(entry.kind, EntityType::SavingGoal);
        assert_eq!(entry.id, goal.id.to_string());
        assert_eq!(entry.label.as_deref(), Some("Bike"));
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_update_records_changed_fields() {
        let before = goal();
        let mut after = before.clone();
        after.contribute(Money::from_rupees(600));

        let entry = AuditEntry::updated(&before, &after);
        let changes = entry.changes.unwrap();
        assert!(changes.contains("current_amount: ₹4500.00 -> ₹5100.00"));
    }

    #[test]
    fn test_delete_keeps_last_state() {
        let income = IncomeEntry::new(
            Money::from_rupees(100),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        let entry = AuditEntry::deleted(&income);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_budget_plan_is_one_record() {
        let rows = vec![BudgetCategory::new(
            ExpenseCategory::Food,
            Money::from_rupees(8_000),
        )];
        let entry = AuditEntry::updated(&Vec::new(), &rows);
        assert_eq!(entry.kind, EntityType::BudgetPlan);
        assert_eq!(entry.id, "budget-plan");
        assert!(entry.label.is_none());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&EntityType::SavingGoal).unwrap();
        assert_eq!(json, "\"saving_goal\"");
    }

    #[test]
    fn test_display_line() {
        let expense = crate::models::ExpenseEntry::new(
            Money::from_rupees(250),
            NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            "Groceries",
            ExpenseCategory::Food,
        );
        let line = AuditEntry::created(&expense).to_string();
        assert!(line.contains("expense"));
        assert!(line.contains("created"));
        assert!(line.ends_with("'Groceries'"));
    }
}
