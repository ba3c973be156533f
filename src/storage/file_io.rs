//! JSON snapshot files
//!
//! Writes go to `<name>.json.tmp` beside the target, are synced, then
//! renamed over it. Readers see the old file or the new one, never a mix.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FinanceError;

fn io_failure(what: &str, path: &Path, e: impl std::fmt::Display) -> FinanceError {
    FinanceError::Storage(format!("{} {}: {}", what, path.display(), e))
}

/// Temp sibling used while `path` is being rewritten
fn staging_path(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

/// Load `path`; a missing file yields `T::default()`
pub fn read_json<T, P>(path: P) -> Result<T, FinanceError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(io_failure("Cannot open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| io_failure("Corrupt file", path, e))
}

/// Replace `path` with the pretty-printed JSON of `data`
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FinanceError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| io_failure("Cannot create directory", dir, e))?;
    }

    let staging = staging_path(path);
    let file = File::create(&staging).map_err(|e| io_failure("Cannot create", &staging, e))?;
    let mut out = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut out, data)
        .map_err(|e| io_failure("Cannot serialize", path, e))?;
    out.flush()
        .and_then(|_| out.get_ref().sync_all())
        .map_err(|e| io_failure("Cannot flush", &staging, e))?;

    if let Err(e) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(io_failure("Cannot replace", path, e));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomeEntry, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn salaries() -> Vec<IncomeEntry> {
        let day = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        vec![
            IncomeEntry::new(Money::from_rupees(40_000), day),
            IncomeEntry::new(Money::from_rupees(12_500), day),
        ]
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let rows: Vec<IncomeEntry> = read_json(temp.path().join("absent.json")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_written_rows_read_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data").join("income.json");

        let written = salaries();
        write_json_atomic(&path, &written).unwrap();

        let rows: Vec<IncomeEntry> = read_json(&path).unwrap();
        assert_eq!(rows, written);
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn test_blocked_rewrite_keeps_previous_contents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("income.json");
        write_json_atomic(&path, &salaries()).unwrap();

        fs::create_dir(staging_path(&path)).unwrap();
        assert!(write_json_atomic(&path, &Vec::<IncomeEntry>::new()).is_err());

        let rows: Vec<IncomeEntry> = read_json(&path).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_garbage_is_a_storage_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("income.json");
        fs::write(&path, "{ nope").unwrap();

        let result: Result<Vec<IncomeEntry>, _> = read_json(&path);
        assert!(matches!(result, Err(FinanceError::Storage(_))));
    }
}
