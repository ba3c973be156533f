//! Audit trail for ledger changes
//!
//! Every committed create, update and delete is appended to `audit.log` as
//! one JSON object per line, with the entity's state before and after the
//! change. The trail is informational: ledger state never depends on it.

mod diff;
mod entry;
mod logger;
mod subject;

pub use diff::generate_diff;
pub use entry::{Action, AuditEntry, EntityType};
pub use logger::AuditLogger;
pub use subject::Audited;
