//! CLI command modules.
//!
//! Each module owns one subcommand tree and a `run` entry point. Every
//! command opens the default on-disk store, so planner state is shared
//! across invocations.

pub mod config;
pub mod plan;
pub mod reset;
pub mod session;
pub mod stats;
pub mod streak;
pub mod subject;

use studymaster_core::{JsonFileStore, StudyPlanner};

/// Open the planner over the default JSON file store.
pub fn open_planner() -> Result<StudyPlanner<JsonFileStore>, Box<dyn std::error::Error>> {
    let store = JsonFileStore::open_default()?;
    Ok(StudyPlanner::load(store)?)
}
