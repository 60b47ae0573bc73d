//! Daily study streak state machine.
//!
//! The streak advances at most once per calendar day, and only when the
//! planner records a session moving from incomplete to complete. A
//! completion on the day after the last active day extends the streak;
//! any larger gap restarts it at 1.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Persisted streak state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    pub count: u32,
    pub last_active: Option<NaiveDate>,
}

impl StreakState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a day with at least one fresh completion.
    ///
    /// No-op when `today` already matches `last_active`, so multiple
    /// completions in one day count once.
    pub fn record_activity(&mut self, today: NaiveDate) {
        if self.last_active == Some(today) {
            return;
        }
        let consecutive = self
            .last_active
            .map(|last| last + Days::new(1) == today)
            .unwrap_or(false);
        self.count = if consecutive { self.count + 1 } else { 1 };
        self.last_active = Some(today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_activity_starts_streak_at_one() {
        let mut streak = StreakState::new();
        streak.record_activity(date(2026, 3, 1));
        assert_eq!(streak.count, 1);
        assert_eq!(streak.last_active, Some(date(2026, 3, 1)));
    }

    #[test]
    fn consecutive_days_increment() {
        let mut streak = StreakState::new();
        streak.record_activity(date(2026, 3, 1));
        streak.record_activity(date(2026, 3, 2));
        streak.record_activity(date(2026, 3, 3));
        assert_eq!(streak.count, 3);
    }

    #[test]
    fn same_day_repeat_is_a_no_op() {
        let mut streak = StreakState::new();
        streak.record_activity(date(2026, 3, 1));
        streak.record_activity(date(2026, 3, 1));
        streak.record_activity(date(2026, 3, 1));
        assert_eq!(streak.count, 1);
    }

    #[test]
    fn gap_of_two_or_more_days_resets_to_one() {
        let mut streak = StreakState::new();
        streak.record_activity(date(2026, 3, 1));
        streak.record_activity(date(2026, 3, 2));
        streak.record_activity(date(2026, 3, 5));
        assert_eq!(streak.count, 1);
        assert_eq!(streak.last_active, Some(date(2026, 3, 5)));
    }

    #[test]
    fn month_boundary_counts_as_consecutive() {
        let mut streak = StreakState::new();
        streak.record_activity(date(2026, 2, 28));
        streak.record_activity(date(2026, 3, 1));
        assert_eq!(streak.count, 2);
    }

    #[test]
    fn default_state_deserializes_from_absent_fields() {
        let state: StreakState = serde_json::from_str(r#"{"count":0,"last_active":null}"#).unwrap();
        assert_eq!(state, StreakState::new());
    }

    proptest! {
        #[test]
        fn consecutive_run_reaches_run_length(len in 1u64..60) {
            let mut streak = StreakState::new();
            let start = date(2026, 1, 1);
            for offset in 0..len {
                streak.record_activity(start + Days::new(offset));
            }
            prop_assert_eq!(streak.count, len as u32);
        }

        #[test]
        fn activity_after_gap_always_yields_one(gap in 2u64..90) {
            let mut streak = StreakState::new();
            let start = date(2026, 1, 1);
            streak.record_activity(start);
            streak.record_activity(start + Days::new(1));
            streak.record_activity(start + Days::new(1 + gap));
            prop_assert_eq!(streak.count, 1);
        }
    }
}
