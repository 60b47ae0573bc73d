//! Daily streak commands.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum StreakAction {
    /// Show the current streak
    Show,
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let planner = super::open_planner()?;

    match action {
        StreakAction::Show => {
            let streak = planner.streak();
            println!("Streak: {} day(s)", streak.count);
            match streak.last_active {
                Some(date) => println!("Last active: {date}"),
                None => println!("Last active: never"),
            }
        }
    }
    Ok(())
}
