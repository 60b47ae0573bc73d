//! Value store implementations.
//!
//! [`JsonFileStore`] keeps every key in a single JSON object file and
//! rewrites the file on each save (write-through, no batching).
//! [`MemoryStore`] holds values in a map and is meant for tests and
//! ephemeral runs.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::ValueStore;
use crate::error::StorageError;

/// File-backed store: one JSON object, one entry per key.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl JsonFileStore {
    /// Open (or create) the store at the default location,
    /// `<data_dir>/planner.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory is unavailable or the
    /// existing file cannot be parsed.
    pub fn open_default() -> Result<Self, StorageError> {
        let path = super::data_dir()?.join("planner.json");
        Self::open(path)
    }

    /// Open (or create) a store at an explicit path.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Corrupt` if the file exists but is not a
    /// JSON object, and `StorageError::LoadFailed` on read failures.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => {
                let value: Value =
                    serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
                        key: path.display().to_string(),
                        message: e.to_string(),
                    })?;
                match value {
                    Value::Object(map) => map,
                    other => {
                        return Err(StorageError::Corrupt {
                            key: path.display().to_string(),
                            message: format!("expected a JSON object, got {other}"),
                        })
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => {
                return Err(StorageError::LoadFailed {
                    key: path.display().to_string(),
                    message: e.to_string(),
                })
            }
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, key: &str) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(&Value::Object(self.entries.clone()))
            .map_err(|e| StorageError::SaveFailed {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        std::fs::write(&self.path, content).map_err(|e| StorageError::SaveFailed {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}

impl ValueStore for JsonFileStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| StorageError::Corrupt {
                    key: key.to_string(),
                    message: e.to_string(),
                }),
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let value = serde_json::to_value(value).map_err(|e| StorageError::SaveFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.entries.insert(key.to_string(), value);
        self.flush(key)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush(key)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValueStore for MemoryStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| StorageError::Corrupt {
                    key: key.to_string(),
                    message: e.to_string(),
                }),
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let value = serde_json::to_value(value).map_err(|e| StorageError::SaveFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::keys;
    use tempfile::TempDir;

    #[test]
    fn absent_key_loads_as_none() {
        let store = MemoryStore::new();
        let loaded: Option<Vec<String>> = store.load(keys::COMPLETED_SESSIONS).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn file_store_round_trips_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("planner.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store
            .save(keys::DAILY_HOURS, &"2.5".to_string())
            .unwrap();
        store
            .save(keys::COMPLETED_SESSIONS, &vec!["2026-03-02-1".to_string()])
            .unwrap();

        // Reopen from disk: the write must already be visible.
        let reopened = JsonFileStore::open(&path).unwrap();
        let hours: Option<String> = reopened.load(keys::DAILY_HOURS).unwrap();
        assert_eq!(hours.as_deref(), Some("2.5"));
        let sessions: Option<Vec<String>> = reopened.load(keys::COMPLETED_SESSIONS).unwrap();
        assert_eq!(sessions.unwrap(), vec!["2026-03-02-1".to_string()]);
    }

    #[test]
    fn remove_deletes_key_and_tolerates_absence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("planner.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.save(keys::EXAM_DATE, &"2026-06-01".to_string()).unwrap();
        store.remove(keys::EXAM_DATE).unwrap();
        store.remove(keys::EXAM_DATE).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        let date: Option<String> = reopened.load(keys::EXAM_DATE).unwrap();
        assert!(date.is_none());
    }

    #[test]
    fn corrupt_file_is_reported_not_discarded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("planner.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }

    #[test]
    fn corrupt_value_under_key_is_reported() {
        let mut store = MemoryStore::new();
        store.save(keys::STREAK, &"not-a-streak").unwrap();
        let loaded: Result<Option<crate::streak::StreakState>, _> = store.load(keys::STREAK);
        assert!(matches!(loaded, Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn save_to_unwritable_path_surfaces_error() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("planner.json")).unwrap();
        // Point the store at a path whose parent does not exist.
        store.path = dir.path().join("missing").join("planner.json");
        let err = store.save(keys::EXAM_DATE, &"2026-06-01").unwrap_err();
        assert!(matches!(err, StorageError::SaveFailed { .. }));
    }
}
