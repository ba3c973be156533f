//! Profile store
//!
//! The profile lives in its own file, outside the ledger snapshot.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::Profile;

use super::file_io::{read_json, write_json_atomic};
use super::{read_lock_error, write_lock_error};

pub struct ProfileStore {
    path: PathBuf,
    profile: RwLock<Option<Profile>>,
}

impl ProfileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            profile: RwLock::new(None),
        }
    }

    pub fn load(&self) -> Result<(), FinanceError> {
        let loaded: Option<Profile> = read_json(&self.path)?;
        *self.profile.write().map_err(write_lock_error)? = loaded;
        Ok(())
    }

    pub fn get(&self) -> Result<Option<Profile>, FinanceError> {
        Ok(self.profile.read().map_err(read_lock_error)?.clone())
    }

    /// Write `profile` to disk, then make it current. Memory is untouched
    /// if the write fails.
    pub fn save(&self, profile: Profile) -> Result<(), FinanceError> {
        let mut current = self.profile.write().map_err(write_lock_error)?;
        write_json_atomic(&self.path, &Some(&profile))?;
        *current = Some(profile);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.json");

        let store = ProfileStore::new(path.clone());
        store.load().unwrap();
        assert!(store.get().unwrap().is_none());

        store.save(Profile::new("Ravi")).unwrap();

        let reloaded = ProfileStore::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.get().unwrap().unwrap().display_name, "Ravi");
    }
}
