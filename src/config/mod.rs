//! Configuration module for the finance tracker
//!
//! - Platform path resolution
//! - User preference persistence

pub mod paths;
pub mod settings;

pub use paths::FinancePaths;
pub use settings::{ReminderCadence, Settings};
