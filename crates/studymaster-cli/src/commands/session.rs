//! Session completion commands.

use clap::Subcommand;
use studymaster_core::SessionToggle;

#[derive(Subcommand)]
pub enum SessionAction {
    /// Toggle a session's completion by its key (see `plan show`)
    Toggle {
        /// Session key, e.g. "2026-03-02-1"
        key: String,
    },
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut planner = super::open_planner()?;

    match action {
        SessionAction::Toggle { key } => match planner.toggle_session(&key)? {
            SessionToggle::Completed => {
                println!("Completed {key}");
                println!("Streak: {} day(s)", planner.streak().count);
            }
            SessionToggle::Uncompleted => println!("Un-completed {key}"),
        },
    }
    Ok(())
}
