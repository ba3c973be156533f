//! `fintrack audit`

use crate::error::FinanceResult;
use crate::storage::Storage;

pub fn handle_audit_command(storage: &Storage, limit: usize) -> FinanceResult<()> {
    let entries = storage.audit().read_recent(limit)?;
    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in entries.iter().rev() {
        println!("{}", entry);
    }
    Ok(())
}
