//! Subjects and the ordered registry that owns them.
//!
//! A subject is a name plus a priority tag. The registry keeps subjects
//! in insertion order and hands out monotonically increasing ids, so a
//! removed id is never reused within one registry's lifetime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Priority tag on a subject.
///
/// The rank drives the schedule sort: lower rank is scheduled earlier
/// within each round-robin cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Fixed sort rank: `high < medium < low`.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Next priority in the cycle action: low -> medium -> high -> low.
    pub fn cycled(&self) -> Priority {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(ValidationError::InvalidValue {
                field: "priority".to_string(),
                message: format!("expected high, medium or low, got '{other}'"),
            }),
        }
    }
}

/// A study subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub priority: Priority,
}

/// Ordered collection of subjects with a monotonic id watermark.
///
/// Ids start at 1; the watermark only moves forward, so a removed id
/// never comes back.
#[derive(Debug, Clone)]
pub struct SubjectRegistry {
    subjects: Vec<Subject>,
    next_id: i64,
}

impl Default for SubjectRegistry {
    fn default() -> Self {
        Self {
            subjects: Vec::new(),
            next_id: 1,
        }
    }
}

impl SubjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from persisted subjects.
    ///
    /// The id watermark resumes above the highest persisted id.
    pub fn from_subjects(subjects: Vec<Subject>) -> Self {
        let next_id = subjects.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        Self { subjects, next_id }
    }

    /// Add a subject. The name is trimmed; an empty or whitespace-only
    /// name is rejected without mutating the registry.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for blank names.
    pub fn add(&mut self, name: &str, priority: Priority) -> Result<&Subject, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.subjects.push(Subject {
            id,
            name: name.to_string(),
            priority,
        });
        Ok(self.subjects.last().expect("just pushed"))
    }

    /// Remove a subject by id, returning it if present.
    pub fn remove(&mut self, id: i64) -> Option<Subject> {
        let idx = self.subjects.iter().position(|s| s.id == id)?;
        Some(self.subjects.remove(idx))
    }

    /// Cycle a subject's priority (low -> medium -> high -> low),
    /// returning the new priority if the subject exists.
    pub fn cycle_priority(&mut self, id: i64) -> Option<Priority> {
        let subject = self.subjects.iter_mut().find(|s| s.id == id)?;
        subject.priority = subject.priority.cycled();
        Some(subject.priority)
    }

    pub fn get(&self, id: i64) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.iter()
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Subjects sorted by priority rank, stable on insertion order
    /// within a rank.
    pub fn sorted_by_priority(&self) -> Vec<Subject> {
        let mut sorted = self.subjects.clone();
        sorted.sort_by_key(|s| s.priority.rank());
        sorted
    }

    pub fn clear(&mut self) {
        self.subjects.clear();
    }
}
