//! Ledger records that can appear in the audit trail

use serde::Serialize;

use crate::models::{BudgetCategory, ExpenseEntry, IncomeEntry, Loan, Profile, SavingGoal};

use super::entry::EntityType;

/// A record the audit trail knows how to identify
pub trait Audited: Serialize {
    const ENTITY_TYPE: EntityType;

    fn audit_id(&self) -> String;

    /// Human label shown next to the ID
    fn audit_label(&self) -> Option<String> {
        None
    }
}

impl Audited for IncomeEntry {
    const ENTITY_TYPE: EntityType = EntityType::Income;

    fn audit_id(&self) -> String {
        self.id.to_string()
    }

    fn audit_label(&self) -> Option<String> {
        Some(self.label())
    }
}

impl Audited for ExpenseEntry {
    const ENTITY_TYPE: EntityType = EntityType::Expense;

    fn audit_id(&self) -> String {
        self.id.to_string()
    }

    fn audit_label(&self) -> Option<String> {
        Some(self.description.clone())
    }
}

impl Audited for Loan {
    const ENTITY_TYPE: EntityType = EntityType::Loan;

    fn audit_id(&self) -> String {
        self.id.to_string()
    }

    fn audit_label(&self) -> Option<String> {
        Some(self.title.clone())
    }
}

impl Audited for SavingGoal {
    const ENTITY_TYPE: EntityType = EntityType::SavingGoal;

    fn audit_id(&self) -> String {
        self.id.to_string()
    }

    fn audit_label(&self) -> Option<String> {
        Some(self.title.clone())
    }
}

impl Audited for Profile {
    const ENTITY_TYPE: EntityType = EntityType::Profile;

    fn audit_id(&self) -> String {
        self.id.to_string()
    }

    fn audit_label(&self) -> Option<String> {
        Some(self.display_name.clone())
    }
}

/// The budget plan is audited as one record
impl Audited for Vec<BudgetCategory> {
    const ENTITY_TYPE: EntityType = EntityType::BudgetPlan;

    fn audit_id(&self) -> String {
        "budget-plan".to_string()
    }
}
