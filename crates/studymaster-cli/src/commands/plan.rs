//! Schedule display commands.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Show the generated study plan (next 14 days at most)
    Show {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    let planner = super::open_planner()?;

    match action {
        PlanAction::Show { json } => {
            let schedule = planner.schedule();
            if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            } else if schedule.is_empty() {
                println!("No plan. Set an exam date, daily hours, and add subjects.");
            } else {
                for session in &schedule {
                    let mark = if session.is_completed { "x" } else { " " };
                    println!(
                        "[{mark}] {}  {:<20} [{}]  {} hrs  ({})",
                        session.date, session.focus, session.priority, session.hours,
                        session.session_key
                    );
                }
            }
        }
    }
    Ok(())
}
