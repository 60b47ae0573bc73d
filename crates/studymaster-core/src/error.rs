//! Core error types for studymaster-core.
//!
//! This module defines the error hierarchy using thiserror. Storage
//! failures are first-class errors here: a failed save must reach the
//! caller instead of being dropped on the floor.

use thiserror::Error;

/// Core error type for studymaster-core.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Persistent store errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Persistent-store errors.
///
/// Every failure is recoverable by retrying the user action; nothing
/// here is fatal to the process.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading a key from the backing store failed
    #[error("Failed to load '{key}': {message}")]
    LoadFailed { key: String, message: String },

    /// Writing a key to the backing store failed
    #[error("Failed to save '{key}': {message}")]
    SaveFailed { key: String, message: String },

    /// The stored value exists but cannot be decoded
    #[error("Stored value for '{key}' is corrupt: {message}")]
    Corrupt { key: String, message: String },

    /// The data directory could not be determined or created
    #[error("Data directory unavailable: {0}")]
    DataDirUnavailable(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Subject name was empty or whitespace-only
    #[error("Subject name must not be empty")]
    EmptyName,
}

/// Result type alias for PlannerError
pub type Result<T, E = PlannerError> = std::result::Result<T, E>;
