//! JSON snapshot persistence.
//!
//! A save file is a single pretty-printed `Snapshot`. Files without a
//! `version` key are browser exports and go through [`super::legacy`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use super::legacy::migrate_legacy;
use crate::core::constants::{SAVE_FILE_NAME, SAVE_FILE_VERSION};
use crate::core::game_state::Snapshot;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("save file is not valid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("save file version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u64, supported: u32 },

    #[error("could not determine a data directory for the save file")]
    NoSaveDirectory,
}

impl From<SaveError> for io::Error {
    fn from(err: SaveError) -> Self {
        match err {
            SaveError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

/// Directory holding the save file and the log file.
pub fn data_dir() -> Result<PathBuf, SaveError> {
    let project_dirs =
        ProjectDirs::from("", "", "cyborg-clicker").ok_or(SaveError::NoSaveDirectory)?;
    let dir = project_dirs.data_dir().to_path_buf();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Parses either a current snapshot or a legacy browser export.
pub fn parse_snapshot(json: &str) -> Result<Snapshot, SaveError> {
    let value: Value = serde_json::from_str(json)?;

    match value.get("version").map(Value::as_u64) {
        Some(Some(found)) if found > SAVE_FILE_VERSION as u64 => {
            Err(SaveError::UnsupportedVersion {
                found,
                supported: SAVE_FILE_VERSION,
            })
        }
        Some(_) => Ok(serde_json::from_value(value)?),
        None => {
            debug!("no version tag, treating save as a legacy export");
            migrate_legacy(value)
        }
    }
}

/// Reads and saves the snapshot file at a fixed path.
#[derive(Debug, Clone)]
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Uses `<data dir>/cyborg-clicker/save.json`.
    pub fn new() -> Result<Self, SaveError> {
        Ok(Self {
            save_path: data_dir()?.join(SAVE_FILE_NAME),
        })
    }

    pub fn with_path(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Writes the snapshot, replacing the previous file only once the new
    /// contents are fully on disk.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), SaveError> {
        if let Some(parent) = self.save_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(snapshot)?;
        let tmp_path = self.save_path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.save_path)?;

        debug!(path = %self.save_path.display(), "saved game");
        Ok(())
    }

    /// Loads the snapshot. A missing file is `Ok(None)`.
    pub fn load(&self) -> Result<Option<Snapshot>, SaveError> {
        let json = match fs::read_to_string(&self.save_path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let snapshot = parse_snapshot(&json)?;
        info!(
            path = %self.save_path.display(),
            level = snapshot.player.level,
            "loaded save"
        );
        Ok(Some(snapshot))
    }

    /// Where [`Self::set_aside`] moves an unreadable save.
    pub fn backup_path(&self) -> PathBuf {
        self.save_path.with_extension("json.bak")
    }

    /// Renames the current save file to [`Self::backup_path`], replacing any
    /// older backup.
    pub fn set_aside(&self) -> Result<PathBuf, SaveError> {
        let backup = self.backup_path();
        fs::rename(&self.save_path, &backup)?;
        info!(
            from = %self.save_path.display(),
            to = %backup.display(),
            "moved save aside"
        );
        Ok(backup)
    }

    /// Migrates a browser export into this save file.
    pub fn import(&self, legacy_path: &Path) -> Result<Snapshot, SaveError> {
        let json = fs::read_to_string(legacy_path)?;
        let snapshot = parse_snapshot(&json)?;
        self.save(&snapshot)?;
        info!(
            from = %legacy_path.display(),
            to = %self.save_path.display(),
            "imported save"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_state::GameState;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn test_manager() -> SaveManager {
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "cyborg-clicker-persistence-{}-{}",
            std::process::id(),
            test_id
        ));
        fs::create_dir_all(&dir).unwrap();
        SaveManager::with_path(dir.join(SAVE_FILE_NAME))
    }

    #[test]
    fn test_missing_file_loads_none() {
        let manager = test_manager();
        assert!(!manager.save_exists());
        assert!(manager.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let manager = test_manager();
        let mut state = GameState::new();
        state.player.credits = 1234;
        state.upgrades.damage.level = 3;
        let snapshot = state.snapshot(1_700_000_000_000);

        manager.save(&snapshot).unwrap();
        let loaded = manager.load().unwrap().unwrap();

        assert_eq!(loaded, snapshot);
        fs::remove_file(manager.path()).ok();
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let manager = test_manager();
        fs::write(manager.path(), "{ not json").unwrap();
        assert!(matches!(manager.load(), Err(SaveError::Json(_))));
    }

    #[test]
    fn test_set_aside_moves_file_to_backup() {
        let manager = test_manager();
        fs::write(manager.path(), "{ not json").unwrap();

        let backup = manager.set_aside().unwrap();

        assert_eq!(backup, manager.backup_path());
        assert!(!manager.save_exists());
        assert_eq!(fs::read_to_string(&backup).unwrap(), "{ not json");
        assert!(matches!(manager.set_aside(), Err(SaveError::Io(_))));
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let snapshot = GameState::new().snapshot(0);
        let mut value = serde_json::to_value(&snapshot).unwrap();
        value["version"] = Value::from(SAVE_FILE_VERSION + 1);

        let result = parse_snapshot(&value.to_string());

        assert!(matches!(
            result,
            Err(SaveError::UnsupportedVersion { found, supported })
                if found == (SAVE_FILE_VERSION + 1) as u64 && supported == SAVE_FILE_VERSION
        ));
    }

    #[test]
    fn test_saved_json_uses_type_and_lowercase_tags() {
        let snapshot = GameState::new().snapshot(0);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"version\":1"));
        assert!(json.contains("\"type\":\"weapon\""));
        assert!(json.contains("\"rarity\":\"common\""));
    }
}
