//! Schedule generation for the study planner.
//!
//! This module derives the study schedule from the current configuration:
//! - Sorts subjects by priority (stable on insertion order)
//! - Assigns one subject per day round-robin over the sorted list
//! - Windows the plan to the next 14 calendar days at most
//!
//! Generation is a pure function of its inputs. The schedule is never
//! stored; callers regenerate it whenever configuration or completion
//! state changes. `today` is an explicit argument so the output is
//! deterministic under test.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::completion::CompletionTracker;
use crate::subject::{Priority, SubjectRegistry};

/// The planner never schedules further out than this many days, no
/// matter how far away the exam is.
pub const PLANNING_WINDOW_DAYS: i64 = 14;

/// A single generated study session.
///
/// Derived, not persisted: only the `session_key` ties a session to the
/// persisted completion set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    pub date: NaiveDate,
    pub subject_id: i64,
    /// Subject name at generation time.
    pub focus: String,
    pub priority: Priority,
    pub hours: f64,
    pub session_key: String,
    pub is_completed: bool,
}

/// Deterministic identity for a session: ISO date, hyphen, subject id.
///
/// This is the join key between the ephemeral schedule and the persisted
/// completion set; changing its format orphans existing completions.
pub fn session_key(date: NaiveDate, subject_id: i64) -> String {
    format!("{}-{}", date.format("%Y-%m-%d"), subject_id)
}

/// Generate the study schedule.
///
/// Returns an empty schedule when the exam date or daily hours are
/// unset, no subjects exist, daily hours are non-positive, or the exam
/// date is today or in the past. Otherwise emits one session per day
/// for `min(days_remaining, 14)` days starting tomorrow, in ascending
/// date order.
pub fn generate(
    today: NaiveDate,
    exam_date: Option<NaiveDate>,
    subjects: &SubjectRegistry,
    daily_hours: Option<f64>,
    completed: &CompletionTracker,
) -> Vec<StudySession> {
    let (exam_date, daily_hours) = match (exam_date, daily_hours) {
        (Some(d), Some(h)) if h > 0.0 => (d, h),
        _ => return Vec::new(),
    };
    if subjects.is_empty() {
        return Vec::new();
    }

    let days_remaining = (exam_date - today).num_days();
    if days_remaining <= 0 {
        return Vec::new();
    }

    let sorted = subjects.sorted_by_priority();
    let horizon = days_remaining.min(PLANNING_WINDOW_DAYS) as usize;

    let mut schedule = Vec::with_capacity(horizon);
    for i in 0..horizon {
        let date = today + Days::new(i as u64 + 1);
        let subject = &sorted[i % sorted.len()];
        let key = session_key(date, subject.id);
        schedule.push(StudySession {
            date,
            subject_id: subject.id,
            focus: subject.name.clone(),
            priority: subject.priority,
            hours: daily_hours,
            is_completed: completed.is_completed(&key),
            session_key: key,
        });
    }
    schedule
}
