//! The study planner facade.
//!
//! Owns the persisted planner state (config, subjects, completion set,
//! streak), loads it once at construction, and writes through the
//! injected [`ValueStore`] after every mutation. The schedule and
//! statistics are re-derived on every read; nothing derived is cached
//! or persisted.

use chrono::{Local, NaiveDate};

use crate::completion::{CompletionTracker, SessionToggle};
use crate::error::{Result, StorageError};
use crate::schedule::{self, StudySession};
use crate::stats::{self, Statistics};
use crate::storage::{keys, ValueStore};
use crate::streak::StreakState;
use crate::subject::{Priority, Subject, SubjectRegistry};

/// Injectable calendar-day source, so streak and schedule behavior is
/// testable without touching the wall clock.
pub type Clock = Box<dyn Fn() -> NaiveDate>;

fn wall_clock() -> Clock {
    Box::new(|| Local::now().date_naive())
}

const ISO_DATE: &str = "%Y-%m-%d";

/// The planner core. Generic over the store so the CLI can hand in a
/// file-backed store and tests an in-memory one.
pub struct StudyPlanner<S: ValueStore> {
    store: S,
    clock: Clock,
    exam_date: Option<NaiveDate>,
    /// Raw daily-hours input as the user entered it. Non-numeric or
    /// non-positive input parses to "unset" rather than an error.
    daily_hours_raw: String,
    subjects: SubjectRegistry,
    completed: CompletionTracker,
    streak: StreakState,
}

impl<S: ValueStore> StudyPlanner<S> {
    /// Load planner state from the store, falling back to defaults for
    /// absent keys.
    ///
    /// # Errors
    ///
    /// Returns an error when a stored value exists but cannot be read
    /// or decoded.
    pub fn load(store: S) -> Result<Self> {
        Self::load_with_clock(store, wall_clock())
    }

    /// Like [`StudyPlanner::load`] with an explicit clock.
    pub fn load_with_clock(store: S, clock: Clock) -> Result<Self> {
        let exam_raw: Option<String> = store.load(keys::EXAM_DATE)?;
        let exam_date = exam_raw
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s, ISO_DATE).ok());

        let daily_hours_raw: String = store.load(keys::DAILY_HOURS)?.unwrap_or_default();

        let subjects: Vec<Subject> = store.load(keys::SUBJECTS)?.unwrap_or_default();
        let completed: Vec<String> = store.load(keys::COMPLETED_SESSIONS)?.unwrap_or_default();
        let streak: StreakState = store.load(keys::STREAK)?.unwrap_or_default();

        Ok(Self {
            store,
            clock,
            exam_date,
            daily_hours_raw,
            subjects: SubjectRegistry::from_subjects(subjects),
            completed: CompletionTracker::from_keys(completed),
            streak,
        })
    }

    fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    // --- Config ---

    pub fn exam_date(&self) -> Option<NaiveDate> {
        self.exam_date
    }

    /// Parsed daily hours; `None` when unset, non-numeric, or not
    /// positive.
    pub fn daily_hours(&self) -> Option<f64> {
        self.daily_hours_raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|h| *h > 0.0 && h.is_finite())
    }

    pub fn daily_hours_raw(&self) -> &str {
        &self.daily_hours_raw
    }

    /// Set the exam date and persist it.
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub fn set_exam_date(&mut self, date: NaiveDate) -> Result<()> {
        self.exam_date = Some(date);
        self.store
            .save(keys::EXAM_DATE, &date.format(ISO_DATE).to_string())?;
        Ok(())
    }

    /// Set daily hours from raw user input and persist it. Input that
    /// does not parse as a positive number is stored as-is and treated
    /// as unset; it is not an error.
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub fn set_daily_hours(&mut self, raw: &str) -> Result<()> {
        self.daily_hours_raw = raw.trim().to_string();
        self.store.save(keys::DAILY_HOURS, &self.daily_hours_raw)?;
        Ok(())
    }

    // --- Subjects ---

    pub fn subjects(&self) -> &[Subject] {
        self.subjects.subjects()
    }

    /// Add a subject and persist the registry.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank names; propagates storage
    /// failures.
    pub fn add_subject(&mut self, name: &str, priority: Priority) -> Result<Subject> {
        let subject = self.subjects.add(name, priority)?.clone();
        self.save_subjects()?;
        Ok(subject)
    }

    /// Remove a subject, pruning its orphaned completion entries, and
    /// persist both collections. Returns the removed subject, or `None`
    /// when the id is unknown (in which case nothing is written).
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub fn remove_subject(&mut self, id: i64) -> Result<Option<Subject>> {
        let Some(removed) = self.subjects.remove(id) else {
            return Ok(None);
        };
        self.completed.prune_subject(id);
        self.save_subjects()?;
        self.save_completed()?;
        Ok(Some(removed))
    }

    /// Cycle a subject's priority and persist the registry. Returns the
    /// new priority, or `None` for an unknown id.
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub fn cycle_priority(&mut self, id: i64) -> Result<Option<Priority>> {
        let Some(priority) = self.subjects.cycle_priority(id) else {
            return Ok(None);
        };
        self.save_subjects()?;
        Ok(Some(priority))
    }

    // --- Sessions ---

    /// Regenerate the schedule from current state.
    pub fn schedule(&self) -> Vec<StudySession> {
        schedule::generate(
            self.today(),
            self.exam_date,
            &self.subjects,
            self.daily_hours(),
            &self.completed,
        )
    }

    /// Toggle a session's completion and persist. A fresh completion
    /// (and only that direction) records streak activity for today.
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub fn toggle_session(&mut self, session_key: &str) -> Result<SessionToggle> {
        let outcome = self.completed.toggle(session_key);
        self.save_completed()?;
        if outcome == SessionToggle::Completed {
            let today = self.today();
            self.streak.record_activity(today);
            self.store.save(keys::STREAK, &self.streak)?;
        }
        Ok(outcome)
    }

    pub fn completed_sessions(&self) -> &[String] {
        self.completed.keys()
    }

    // --- Derived state ---

    pub fn statistics(&self) -> Statistics {
        stats::aggregate(&self.schedule(), self.daily_hours(), self.subjects())
    }

    pub fn streak(&self) -> &StreakState {
        &self.streak
    }

    // --- Reset ---

    /// Clear exam date, subjects, completion set, and streak back to
    /// defaults. Daily hours are left in place. Confirmation gating is
    /// the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Propagates storage failures; state already cleared in memory is
    /// still cleared if a later removal fails.
    pub fn reset_all(&mut self) -> Result<()> {
        self.exam_date = None;
        self.subjects.clear();
        self.completed.clear();
        self.streak = StreakState::new();

        self.store.remove(keys::EXAM_DATE)?;
        self.store.remove(keys::SUBJECTS)?;
        self.store.remove(keys::COMPLETED_SESSIONS)?;
        self.store.remove(keys::STREAK)?;
        Ok(())
    }

    fn save_subjects(&mut self) -> Result<(), StorageError> {
        self.store.save(keys::SUBJECTS, &self.subjects.subjects())
    }

    fn save_completed(&mut self) -> Result<(), StorageError> {
        self.store
            .save(keys::COMPLETED_SESSIONS, &self.completed.keys())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::cell::Cell;
    use std::rc::Rc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fixed(day: NaiveDate) -> Clock {
        Box::new(move || day)
    }

    /// Clock whose day can be advanced mid-test.
    fn settable(day: NaiveDate) -> (Clock, Rc<Cell<NaiveDate>>) {
        let cell = Rc::new(Cell::new(day));
        let handle = cell.clone();
        (Box::new(move || cell.get()), handle)
    }

    fn planner_at(day: NaiveDate) -> StudyPlanner<MemoryStore> {
        StudyPlanner::load_with_clock(MemoryStore::new(), fixed(day)).unwrap()
    }

    #[test]
    fn fresh_planner_has_defaults() {
        let planner = planner_at(date(2026, 3, 1));
        assert!(planner.exam_date().is_none());
        assert!(planner.daily_hours().is_none());
        assert!(planner.subjects().is_empty());
        assert!(planner.schedule().is_empty());
        assert_eq!(planner.streak().count, 0);
    }

    #[test]
    fn non_numeric_hours_are_unset_not_an_error() {
        let mut planner = planner_at(date(2026, 3, 1));
        planner.set_daily_hours("lots").unwrap();
        assert!(planner.daily_hours().is_none());
        planner.set_daily_hours("2.5").unwrap();
        assert_eq!(planner.daily_hours(), Some(2.5));
        planner.set_daily_hours("-3").unwrap();
        assert!(planner.daily_hours().is_none());
    }

    #[test]
    fn schedule_round_robins_after_config() {
        let mut planner = planner_at(date(2026, 3, 1));
        planner.set_exam_date(date(2026, 3, 6)).unwrap();
        planner.set_daily_hours("2").unwrap();
        planner.add_subject("Math", Priority::High).unwrap();
        planner.add_subject("Art", Priority::Low).unwrap();

        let schedule = planner.schedule();
        assert_eq!(schedule.len(), 5);
        assert_eq!(schedule[0].focus, "Math");
        assert_eq!(schedule[1].focus, "Art");
    }

    #[test]
    fn toggle_updates_streak_only_on_fresh_completion() {
        let mut planner = planner_at(date(2026, 3, 1));
        planner.set_exam_date(date(2026, 3, 6)).unwrap();
        planner.set_daily_hours("2").unwrap();
        planner.add_subject("Math", Priority::High).unwrap();

        let key = planner.schedule()[0].session_key.clone();
        assert_eq!(planner.toggle_session(&key).unwrap(), SessionToggle::Completed);
        assert_eq!(planner.streak().count, 1);

        // Un-completing must not touch the streak.
        assert_eq!(
            planner.toggle_session(&key).unwrap(),
            SessionToggle::Uncompleted
        );
        assert_eq!(planner.streak().count, 1);
    }

    #[test]
    fn completions_on_consecutive_days_grow_the_streak() {
        let (clock, day) = settable(date(2026, 3, 1));
        let mut planner = StudyPlanner::load_with_clock(MemoryStore::new(), clock).unwrap();
        planner.set_exam_date(date(2026, 3, 10)).unwrap();
        planner.set_daily_hours("2").unwrap();
        planner.add_subject("Math", Priority::High).unwrap();

        let schedule = planner.schedule();
        planner.toggle_session(&schedule[0].session_key).unwrap();
        day.set(date(2026, 3, 2));
        planner.toggle_session(&schedule[1].session_key).unwrap();
        assert_eq!(planner.streak().count, 2);

        // A two-day gap resets to 1.
        day.set(date(2026, 3, 5));
        planner.toggle_session(&schedule[2].session_key).unwrap();
        assert_eq!(planner.streak().count, 1);
    }

    #[test]
    fn same_day_completions_count_once() {
        let mut planner = planner_at(date(2026, 3, 1));
        planner.set_exam_date(date(2026, 3, 10)).unwrap();
        planner.set_daily_hours("2").unwrap();
        planner.add_subject("Math", Priority::High).unwrap();

        let schedule = planner.schedule();
        planner.toggle_session(&schedule[0].session_key).unwrap();
        planner.toggle_session(&schedule[1].session_key).unwrap();
        assert_eq!(planner.streak().count, 1);
    }

    #[test]
    fn remove_subject_prunes_orphaned_completions() {
        let mut planner = planner_at(date(2026, 3, 1));
        planner.set_exam_date(date(2026, 3, 6)).unwrap();
        planner.set_daily_hours("2").unwrap();
        let math = planner.add_subject("Math", Priority::High).unwrap();
        planner.add_subject("Art", Priority::Low).unwrap();

        let schedule = planner.schedule();
        for session in &schedule {
            planner.toggle_session(&session.session_key).unwrap();
        }

        planner.remove_subject(math.id).unwrap();
        assert!(planner
            .completed_sessions()
            .iter()
            .all(|k| !k.ends_with(&format!("-{}", math.id))));
        assert!(!planner.completed_sessions().is_empty());
    }

    #[test]
    fn reset_clears_everything_except_hours() {
        let mut planner = planner_at(date(2026, 3, 1));
        planner.set_exam_date(date(2026, 3, 6)).unwrap();
        planner.set_daily_hours("2").unwrap();
        planner.add_subject("Math", Priority::High).unwrap();
        let key = planner.schedule()[0].session_key.clone();
        planner.toggle_session(&key).unwrap();

        planner.reset_all().unwrap();
        assert!(planner.exam_date().is_none());
        assert!(planner.subjects().is_empty());
        assert!(planner.completed_sessions().is_empty());
        assert_eq!(planner.streak().count, 0);
        assert_eq!(planner.daily_hours(), Some(2.0));
    }

    #[test]
    fn statistics_reflect_completions() {
        let mut planner = planner_at(date(2026, 3, 1));
        planner.set_exam_date(date(2026, 3, 5)).unwrap();
        planner.set_daily_hours("2").unwrap();
        planner.add_subject("Math", Priority::High).unwrap();

        let key = planner.schedule()[0].session_key.clone();
        planner.toggle_session(&key).unwrap();

        let stats = planner.statistics();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.progress_percent, 25);
        assert_eq!(stats.hours_studied, 2.0);
        assert_eq!(stats.hours_remaining, 6.0);
    }
}
