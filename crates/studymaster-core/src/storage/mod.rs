//! Persistent key-value storage for planner state.
//!
//! The planner depends only on the [`ValueStore`] capability; which
//! backing implementation it gets is the caller's choice. The CLI uses
//! [`JsonFileStore`] under the data directory; tests use
//! [`MemoryStore`].

mod json_store;

pub use json_store::{JsonFileStore, MemoryStore};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

use crate::error::StorageError;

/// Logical key namespace for persisted planner state.
pub mod keys {
    pub const EXAM_DATE: &str = "study-planner-date";
    pub const DAILY_HOURS: &str = "study-planner-daily-hours";
    pub const SUBJECTS: &str = "study-planner-subjects";
    pub const COMPLETED_SESSIONS: &str = "study-planner-completed-sessions";
    pub const STREAK: &str = "study-planner-streak";
}

/// Key-value persistence capability.
///
/// Values are JSON-serializable; an absent key loads as `None` and the
/// caller supplies the documented default. A write must be durable (or
/// ordered) before the next read of the same key returns, so a caller
/// always reads its own writes within one session.
pub trait ValueStore {
    /// Load the value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Corrupt` when the stored value exists but
    /// cannot be decoded, and `StorageError::LoadFailed` for backend
    /// read failures.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::SaveFailed` when the write does not reach
    /// the backing store. Callers must surface this, not swallow it.
    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError>;

    /// Remove `key` if present. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::SaveFailed` when the removal cannot be
    /// persisted.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Returns `~/.config/studymaster[-dev]/` based on STUDYMASTER_ENV.
///
/// Set STUDYMASTER_ENV=dev to use a separate development data
/// directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STUDYMASTER_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("studymaster-dev")
    } else {
        base_dir.join("studymaster")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
