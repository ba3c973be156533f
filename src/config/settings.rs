//! User preferences
//!
//! Small, non-critical preferences such as the currency symbol and the
//! budget reminder cadence. The ledger never depends on these values.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::error::FinanceError;
use crate::models::money::DEFAULT_CURRENCY_SYMBOL;

/// How often to remind the user to review their budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReminderCadence {
    Off,
    Weekly,
    #[default]
    Monthly,
}

impl ReminderCadence {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "never" | "none" => Some(Self::Off),
            "weekly" | "week" => Some(Self::Weekly),
            "monthly" | "month" => Some(Self::Monthly),
            _ => None,
        }
    }

    /// First day a reminder shown on `shown` may appear again
    pub fn next_after(self, shown: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Off => None,
            Self::Weekly => shown.checked_add_days(Days::new(7)),
            Self::Monthly => shown.checked_add_months(Months::new(1)),
        }
    }
}

impl fmt::Display for ReminderCadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default)]
    pub budget_reminder: ReminderCadence,

    /// Day the budget reminder was last shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_reminded_on: Option<NaiveDate>,

    /// Notices the user has dismissed (e.g. "budget-reminder")
    #[serde(default)]
    pub dismissed_notices: BTreeSet<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            budget_reminder: ReminderCadence::default(),
            budget_reminded_on: None,
            dismissed_notices: BTreeSet::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| FinanceError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinanceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Mark a notice as dismissed. Returns false if it already was.
    pub fn dismiss(&mut self, notice: &str) -> bool {
        self.dismissed_notices.insert(notice.trim().to_string())
    }

    /// Bring a dismissed notice back. Returns false if it wasn't dismissed.
    pub fn restore(&mut self, notice: &str) -> bool {
        self.dismissed_notices.remove(notice.trim())
    }

    pub fn is_dismissed(&self, notice: &str) -> bool {
        self.dismissed_notices.contains(notice)
    }

    /// Whether the budget reminder cadence allows showing it on `today`
    pub fn budget_reminder_due(&self, today: NaiveDate) -> bool {
        match (self.budget_reminder, self.budget_reminded_on) {
            (ReminderCadence::Off, _) => false,
            (_, None) => true,
            (cadence, Some(shown)) => cadence.next_after(shown).is_some_and(|next| today >= next),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.budget_reminder, ReminderCadence::Monthly);
        assert!(settings.dismissed_notices.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.budget_reminder = ReminderCadence::Weekly;
        settings.dismiss("budget-reminder");
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.budget_reminder, ReminderCadence::Weekly);
        assert!(loaded.is_dismissed("budget-reminder"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "$"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_dismiss_and_restore() {
        let mut settings = Settings::default();
        assert!(settings.dismiss("welcome"));
        assert!(!settings.dismiss("welcome"));
        assert!(settings.restore("welcome"));
        assert!(!settings.restore("welcome"));
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekly_and_monthly_reminders_differ() {
        let mut settings = Settings::default();
        assert!(settings.budget_reminder_due(day(2025, 1, 31)));

        settings.budget_reminded_on = Some(day(2025, 1, 31));
        assert!(!settings.budget_reminder_due(day(2025, 2, 7)));
        assert!(!settings.budget_reminder_due(day(2025, 2, 27)));
        assert!(settings.budget_reminder_due(day(2025, 2, 28)));

        settings.budget_reminder = ReminderCadence::Weekly;
        assert!(!settings.budget_reminder_due(day(2025, 2, 6)));
        assert!(settings.budget_reminder_due(day(2025, 2, 7)));

        settings.budget_reminder = ReminderCadence::Off;
        settings.budget_reminded_on = None;
        assert!(!settings.budget_reminder_due(day(2025, 2, 7)));
    }

    #[test]
    fn test_reminder_date_survives_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.budget_reminded_on = Some(day(2025, 3, 1));
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.budget_reminded_on, Some(day(2025, 3, 1)));
    }

    #[test]
    fn test_reminder_parse() {
        assert_eq!(ReminderCadence::parse("Weekly"), Some(ReminderCadence::Weekly));
        assert_eq!(ReminderCadence::parse("never"), Some(ReminderCadence::Off));
        assert_eq!(ReminderCadence::parse("daily"), None);
    }
}
