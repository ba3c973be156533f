//! Typed record IDs
//!
//! Each ledger gets its own UUID newtype so a loan ID can't be passed where
//! a goal ID is expected. IDs print in a short prefixed form (`loan-1a2b3c4d`)
//! and users may refer to records by that form or any unambiguous prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Shortest bare UUID prefix accepted as a reference
const MIN_PREFIX_LEN: usize = 4;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident => $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// True when `reference` is this ID's full UUID, its short
            /// display form, or a bare UUID prefix
            pub fn matches(&self, reference: &str) -> bool {
                let reference = reference.trim();
                let bare = reference.strip_prefix($tag).unwrap_or(reference);
                bare.len() >= MIN_PREFIX_LEN
                    && self.0.hyphenated().to_string().starts_with(&bare.to_ascii_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let simple = self.0.simple().to_string();
                write!(f, "{}{}", $tag, &simple[..8])
            }
        }
    };
}

define_id!(
    /// An income entry
    IncomeId => "inc-"
);
define_id!(
    /// An expense, manual or booked by a loan payment or goal contribution
    ExpenseId => "exp-"
);
define_id!(LoanId => "loan-");
define_id!(GoalId => "goal-");
define_id!(UserId => "usr-");
