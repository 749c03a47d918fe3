//! Candidate profile persistence.
//!
//! One small JSON file standing in for the browser's local storage: loads are
//! best-effort (a missing or corrupt file reads as no profile), writes are
//! atomic enough for a single-user tool.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EngineError;

/// A candidate's saved contact card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub desired_role: String,
    pub saved_at: DateTime<Utc>,
}

impl CandidateProfile {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<String>,
        desired_role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone,
            desired_role: desired_role.into(),
            saved_at: Utc::now(),
        }
    }
}

/// Where profiles live. The engine ships a JSON file store; tests may
/// substitute an in-memory one.
pub trait ProfileStore {
    /// Returns the saved profile, or `None` when there is nothing usable.
    fn load(&self) -> Option<CandidateProfile>;
    fn save(&self, profile: &CandidateProfile) -> Result<(), EngineError>;
    /// Removes the saved profile. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), EngineError>;
}

/// Stores the profile as one pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self) -> Option<CandidateProfile> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Could not read profile at {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!(
                    "Ignoring corrupt profile at {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    fn save(&self, profile: &CandidateProfile) -> Result<(), EngineError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), EngineError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(EngineError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_profile() -> CandidateProfile {
        CandidateProfile::new(
            "Ana Souza",
            "ana.souza@example.com",
            Some("+55 11 91234-5678".to_string()),
            "Desenvolvedora Backend",
        )
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("profile.json"));

        let profile = sample_profile();
        store.save(&profile).unwrap();

        let loaded = store.load().expect("profile should load back");
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("does-not-exist.json"));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_load_corrupt_file_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{ this is not json").unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load().is_none(), "corrupt profile must read as empty");
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/deeper/profile.json"));

        store.save(&sample_profile()).unwrap();
        assert!(store.load().is_some());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("profile.json"));

        store.save(&sample_profile()).unwrap();
        store.clear().unwrap();
        assert!(store.load().is_none());

        // Clearing again must not error.
        store.clear().unwrap();
    }

    #[test]
    fn test_wire_shape_is_camel_case_and_omits_empty_phone() {
        let mut profile = sample_profile();
        profile.phone = None;

        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("desiredRole").is_some());
        assert!(json.get("savedAt").is_some());
        assert!(json.get("phone").is_none());
    }
}
