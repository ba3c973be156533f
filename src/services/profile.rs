//! Profile and avatar management
//!
//! Avatars are copied into the data directory's `avatars/` folder and the
//! profile keeps the path of the stored copy.

use std::path::{Path, PathBuf};

use crate::error::{FinanceError, FinanceResult, Record};
use crate::models::Profile;
use crate::storage::Storage;

use super::non_empty;

/// Image types accepted as avatars
pub const AVATAR_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn get(&self) -> FinanceResult<Option<Profile>> {
        self.storage.profile.get()
    }

    /// Create the profile, or update the given fields of the existing one.
    /// A display name is required when no profile exists yet.
    pub fn upsert(
        &self,
        display_name: Option<String>,
        email: Option<String>,
    ) -> FinanceResult<Profile> {
        let display_name = non_empty(display_name);
        let email = non_empty(email);

        let before = self.get()?;
        let mut profile = match (&before, display_name.clone()) {
            (Some(existing), _) => existing.clone(),
            (None, Some(name)) => Profile::new(name),
            (None, None) => {
                return Err(FinanceError::Validation(
                    "A display name is required to create a profile".into(),
                ))
            }
        };

        if let Some(name) = display_name {
            profile.display_name = name;
        }
        if email.is_some() {
            profile.email = email;
        }
        profile.validate().map_err(FinanceError::Validation)?;
        profile.touch();

        self.storage.profile.save(profile.clone())?;

        match &before {
            Some(before) => self.storage.log_update(before, &profile),
            None => self.storage.log_create(&profile),
        }

        Ok(profile)
    }

    /// Store a copy of `source` as the avatar and return the stored path
    pub fn set_avatar(&self, source: &Path) -> FinanceResult<PathBuf> {
        let before = self
            .get()?
            .ok_or_else(|| FinanceError::not_found(Record::Profile, "local"))?;

        let extension = avatar_extension(source)?;
        if !source.is_file() {
            return Err(FinanceError::Validation(format!(
                "Avatar file not found: {}",
                source.display()
            )));
        }

        let destination = self
            .storage
            .paths()
            .avatars_dir()
            .join(format!("{}.{}", before.id.as_uuid(), extension));

        std::fs::create_dir_all(self.storage.paths().avatars_dir())?;
        std::fs::copy(source, &destination).map_err(|e| {
            FinanceError::Io(format!(
                "Failed to copy avatar to {}: {}",
                destination.display(),
                e
            ))
        })?;

        let mut profile = before.clone();
        let previous = profile.avatar.replace(destination.clone());
        profile.touch();
        self.storage.profile.save(profile.clone())?;

        // A different extension leaves the old copy behind
        if let Some(old) = previous.filter(|old| old != &destination) {
            if let Err(e) = std::fs::remove_file(&old) {
                tracing::warn!(path = %old.display(), error = %e, "failed to remove old avatar");
            }
        }

        self.storage.log_update(&before, &profile);

        Ok(destination)
    }
}

fn avatar_extension(path: &Path) -> FinanceResult<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .filter(|ext| AVATAR_EXTENSIONS.contains(&ext.as_str()))
        .ok_or_else(|| {
            FinanceError::Validation(format!(
                "Unsupported avatar type: {} (expected one of {})",
                path.display(),
                AVATAR_EXTENSIONS.join(", ")
            ))
        })
}
