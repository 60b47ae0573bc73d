//! Progress statistics derived from the generated schedule.
//!
//! Everything here is recomputed from the session list on demand; there
//! is no shared accumulator and no cached state.

use serde::{Deserialize, Serialize};

use crate::schedule::StudySession;
use crate::subject::{Priority, Subject};

/// Aggregate progress over the whole schedule window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total: usize,
    pub completed: usize,
    /// Rounded percentage; 0 when the schedule is empty.
    pub progress_percent: u32,
    pub hours_studied: f64,
    pub hours_remaining: f64,
    pub per_subject: Vec<SubjectStatistics>,
}

/// Per-subject slice of the same ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectStatistics {
    pub subject_id: i64,
    pub name: String,
    pub priority: Priority,
    pub total: usize,
    pub completed: usize,
    pub progress_percent: u32,
}

fn percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        (100.0 * completed as f64 / total as f64).round() as u32
    }
}

/// Derive statistics from a generated schedule.
///
/// `daily_hours` of `None` is treated as zero hours per session, so an
/// unset configuration still yields well-defined numbers.
pub fn aggregate(
    sessions: &[StudySession],
    daily_hours: Option<f64>,
    subjects: &[Subject],
) -> Statistics {
    let total = sessions.len();
    let completed = sessions.iter().filter(|s| s.is_completed).count();
    let hours = daily_hours.unwrap_or(0.0);

    let per_subject = subjects
        .iter()
        .map(|subject| {
            let subject_total = sessions.iter().filter(|s| s.subject_id == subject.id).count();
            let subject_completed = sessions
                .iter()
                .filter(|s| s.subject_id == subject.id && s.is_completed)
                .count();
            SubjectStatistics {
                subject_id: subject.id,
                name: subject.name.clone(),
                priority: subject.priority,
                total: subject_total,
                completed: subject_completed,
                progress_percent: percent(subject_completed, subject_total),
            }
        })
        .collect();

    Statistics {
        total,
        completed,
        progress_percent: percent(completed, total),
        hours_studied: completed as f64 * hours,
        hours_remaining: (total - completed) as f64 * hours,
        per_subject,
    }
}
