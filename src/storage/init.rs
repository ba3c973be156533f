//! First-run setup of the data directory

use crate::config::paths::FinancePaths;
use crate::error::FinanceError;

use super::file_io::write_json_atomic;
use super::{LedgerData, LEDGER_SCHEMA_VERSION};

/// Create the directory layout and an empty ledger. An existing ledger is
/// left untouched.
pub fn initialize_storage(paths: &FinancePaths) -> Result<(), FinanceError> {
    paths.ensure_directories()?;

    if needs_initialization(paths) {
        let empty = LedgerData {
            schema_version: LEDGER_SCHEMA_VERSION,
            ..LedgerData::default()
        };
        write_json_atomic(paths.ledger_file(), &empty)?;
    }

    Ok(())
}

pub fn needs_initialization(paths: &FinancePaths) -> bool {
    !paths.ledger_file().exists()
}
