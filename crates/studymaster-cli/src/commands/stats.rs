//! Progress statistics commands.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Show progress over the current plan window
    Show {
        /// Emit JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let planner = super::open_planner()?;

    match action {
        StatsAction::Show { json } => {
            let stats = planner.statistics();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!(
                    "Progress:  {}/{} sessions ({}%)",
                    stats.completed, stats.total, stats.progress_percent
                );
                println!("Studied:   {} hrs", stats.hours_studied);
                println!("Remaining: {} hrs", stats.hours_remaining);
                for subject in &stats.per_subject {
                    println!(
                        "  {:<20} {}/{} ({}%)",
                        subject.name, subject.completed, subject.total, subject.progress_percent
                    );
                }
            }
        }
    }
    Ok(())
}
