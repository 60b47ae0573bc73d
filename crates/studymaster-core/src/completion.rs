//! Completion tracking for generated study sessions.
//!
//! Sessions are never stored; completion state lives as a set of
//! session keys. Keys are kept in insertion order so the persisted form
//! is stable across save/load cycles.

use serde::{Deserialize, Serialize};

/// Outcome of a toggle, so the caller can tell the two transitions
/// apart. Only `Completed` (false -> true) may advance the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionToggle {
    Completed,
    Uncompleted,
}

/// Set of completed session keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionTracker {
    keys: Vec<String>,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys(keys: Vec<String>) -> Self {
        Self { keys }
    }

    pub fn is_completed(&self, session_key: &str) -> bool {
        self.keys.iter().any(|k| k == session_key)
    }

    /// Flip membership of a session key. Toggling twice restores the
    /// prior state.
    pub fn toggle(&mut self, session_key: &str) -> SessionToggle {
        if let Some(idx) = self.keys.iter().position(|k| k == session_key) {
            self.keys.remove(idx);
            SessionToggle::Uncompleted
        } else {
            self.keys.push(session_key.to_string());
            SessionToggle::Completed
        }
    }

    /// Drop keys whose embedded subject id is no longer registered.
    ///
    /// A session key ends in `-{subject_id}`; anything that does not
    /// parse is left alone.
    pub fn prune_subject(&mut self, subject_id: i64) {
        let suffix = format!("-{subject_id}");
        self.keys.retain(|k| !k.ends_with(&suffix));
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
