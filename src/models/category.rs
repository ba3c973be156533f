//! Expense category registry
//!
//! A fixed set of spending categories, each with a display color, plus an
//! escape hatch for free-form category names typed by the user.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Fallback color for categories without a dedicated entry
const OTHER_COLOR: &str = "#9E9E9E";

/// A spending category
///
/// Custom names compare case-insensitively, so `groceries` and `Groceries`
/// are one category that keeps the spelling it was first given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExpenseCategory {
    Food,
    Transportation,
    Housing,
    Utilities,
    Entertainment,
    Healthcare,
    Shopping,
    Education,
    Personal,
    /// Generated by loan payments
    Loans,
    /// Generated by savings goal contributions
    Savings,
    Other,
    /// A user-supplied category outside the registry
    Custom(String),
}

impl ExpenseCategory {
    /// All registry categories in display order
    pub fn all() -> &'static [ExpenseCategory] {
        &[
            Self::Food,
            Self::Transportation,
            Self::Housing,
            Self::Utilities,
            Self::Entertainment,
            Self::Healthcare,
            Self::Shopping,
            Self::Education,
            Self::Personal,
            Self::Loans,
            Self::Savings,
            Self::Other,
        ]
    }

    /// Parse a category name (case-insensitive). Unknown names become `Custom`.
    pub fn parse(name: &str) -> Self {
        let trimmed = name.trim();
        Self::all()
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .cloned()
            .unwrap_or_else(|| {
                if trimmed.is_empty() {
                    Self::Other
                } else {
                    Self::Custom(trimmed.to_string())
                }
            })
    }

    /// Display name
    pub fn name(&self) -> &str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Shopping => "Shopping",
            Self::Education => "Education",
            Self::Personal => "Personal",
            Self::Loans => "Loans",
            Self::Savings => "Savings",
            Self::Other => "Other",
            Self::Custom(name) => name,
        }
    }

    /// Hex display color for charts and tables
    pub fn color(&self) -> &'static str {
        match self {
            Self::Food => "#FF6384",
            Self::Transportation => "#36A2EB",
            Self::Housing => "#FFCE56",
            Self::Utilities => "#4BC0C0",
            Self::Entertainment => "#9966FF",
            Self::Healthcare => "#FF9F40",
            Self::Shopping => "#E91E63",
            Self::Education => "#3F51B5",
            Self::Personal => "#8BC34A",
            Self::Loans => "#F44336",
            Self::Savings => "#4CAF50",
            Self::Other | Self::Custom(_) => OTHER_COLOR,
        }
    }

    /// Position in the registry, custom names last
    fn rank(&self) -> usize {
        match self {
            Self::Custom(_) => Self::all().len(),
            known => Self::all()
                .iter()
                .position(|c| c.name() == known.name())
                .unwrap_or_default(),
        }
    }

    fn folded_name(&self) -> Option<String> {
        match self {
            Self::Custom(name) => Some(name.to_lowercase()),
            _ => None,
        }
    }

    /// Categories reserved for expenses generated by loan payments and
    /// goal contributions
    pub fn is_synthetic(&self) -> bool {
        matches!(self, Self::Loans | Self::Savings)
    }
}

impl PartialEq for ExpenseCategory {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ExpenseCategory {}

impl Hash for ExpenseCategory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        self.folded_name().hash(state);
    }
}

impl PartialOrd for ExpenseCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExpenseCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.folded_name().cmp(&other.folded_name()))
    }
}

impl Default for ExpenseCategory {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl From<String> for ExpenseCategory {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ExpenseCategory> for String {
    fn from(value: ExpenseCategory) -> Self {
        value.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_case_insensitive() {
        assert_eq!(ExpenseCategory::parse("food"), ExpenseCategory::Food);
        assert_eq!(ExpenseCategory::parse(" LOANS "), ExpenseCategory::Loans);
    }

    #[test]
    fn test_parse_custom() {
        let cat = ExpenseCategory::parse("Pet care");
        assert_eq!(cat, ExpenseCategory::Custom("Pet care".into()));
        assert_eq!(cat.color(), ExpenseCategory::Other.color());
        assert_eq!(ExpenseCategory::parse("  "), ExpenseCategory::Other);
    }

    #[test]
    fn test_every_registry_entry_has_distinct_name() {
        let names: std::collections::HashSet<_> =
            ExpenseCategory::all().iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), ExpenseCategory::all().len());
        assert!(ExpenseCategory::all().iter().all(|c| c.color().starts_with('#')));
    }

    #[test]
    fn test_synthetic() {
        assert!(ExpenseCategory::Loans.is_synthetic());
        assert!(ExpenseCategory::Savings.is_synthetic());
        assert!(!ExpenseCategory::Food.is_synthetic());
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&ExpenseCategory::Healthcare).unwrap();
        assert_eq!(json, "\"Healthcare\"");
        let custom: ExpenseCategory = serde_json::from_str("\"Gifts\"").unwrap();
        assert_eq!(custom, ExpenseCategory::Custom("Gifts".into()));
    }

    #[test]
    fn test_custom_names_ignore_case() {
        use std::collections::HashSet;

        let first = ExpenseCategory::parse("groceries");
        let second = ExpenseCategory::parse("Groceries");
        assert_eq!(first, second);
        assert_eq!(first.name(), "groceries");

        let set: HashSet<_> = [first, second, ExpenseCategory::parse("Gifts")].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(ExpenseCategory::Other < ExpenseCategory::parse("Aardvark"));
    }
}
