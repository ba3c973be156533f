//! Personal finance tracker
//!
//! Records income, expenses, loans and savings goals, keeps a budget plan
//! per expense category, and reports the remaining balance (total income
//! minus total expenses). All data lives in a local directory as one JSON
//! ledger snapshot plus a profile file and an append-only audit log.
//!
//! # Architecture
//!
//! - `config`: paths and user settings
//! - `error`: the crate error type
//! - `models`: money, IDs, categories and the ledger records
//! - `storage`: in-memory repositories persisted as one atomic snapshot
//! - `services`: business rules, including the balance gate on spending
//! - `audit`: JSONL trail of every change
//! - `export`: JSON, YAML and CSV export
//! - `display` and `cli`: the `fintrack` command line
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::config::paths::FinancePaths;
//! use finance_tracker::services::BalanceService;
//! use finance_tracker::storage::Storage;
//!
//! let mut storage = Storage::new(FinancePaths::new()?)?;
//! storage.load_all()?;
//! let summary = BalanceService::new(&storage).summary()?;
//! println!("Remaining: {}", summary.remaining_balance);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber. Diagnostics go to stderr and
/// default to warnings; override with `RUST_LOG`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("finance_tracker=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
