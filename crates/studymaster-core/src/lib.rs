//! # Study Master Core Library
//!
//! This library provides the core business logic for the Study Master
//! exam planner. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary; any GUI would
//! be a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Schedule**: a pure generator mapping (exam date, subjects, daily
//!   hours, completion set) to a bounded 14-day study plan
//! - **Completion + Streak**: persisted completion set with a
//!   once-per-day streak state machine driven by fresh completions
//! - **Storage**: injected key-value store; a JSON file on disk by
//!   default, in-memory for tests
//!
//! ## Key Components
//!
//! - [`StudyPlanner`]: stateful facade binding storage to the engine
//! - [`schedule::generate`]: deterministic schedule derivation
//! - [`Statistics`]: progress and hours aggregates
//! - [`ValueStore`]: persistence capability

pub mod completion;
pub mod error;
pub mod planner;
pub mod schedule;
pub mod stats;
pub mod storage;
pub mod streak;
pub mod subject;

pub use completion::{CompletionTracker, SessionToggle};
pub use error::{PlannerError, StorageError, ValidationError};
pub use planner::StudyPlanner;
pub use schedule::{StudySession, PLANNING_WINDOW_DAYS};
pub use stats::{Statistics, SubjectStatistics};
pub use storage::{JsonFileStore, MemoryStore, ValueStore};
pub use streak::StreakState;
pub use subject::{Priority, Subject, SubjectRegistry};
