//! Planner configuration commands.

use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Set the target exam date
    SetDate {
        /// Exam date (YYYY-MM-DD)
        date: String,
    },
    /// Set the daily study commitment in hours
    SetHours {
        /// Hours per day, e.g. "2" or "1.5"
        hours: String,
    },
    /// Show the current configuration
    Show,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut planner = super::open_planner()?;

    match action {
        ConfigAction::SetDate { date } => {
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .map_err(|e| format!("invalid date '{date}': {e}"))?;
            planner.set_exam_date(date)?;
            println!("Exam date set to {date}");
        }
        ConfigAction::SetHours { hours } => {
            planner.set_daily_hours(&hours)?;
            match planner.daily_hours() {
                Some(h) => println!("Daily hours set to {h}"),
                None => eprintln!(
                    "warning: '{hours}' is not a positive number; \
                     the planner will treat daily hours as unset"
                ),
            }
        }
        ConfigAction::Show => {
            match planner.exam_date() {
                Some(date) => println!("Exam date:   {date}"),
                None => println!("Exam date:   (unset)"),
            }
            match planner.daily_hours() {
                Some(hours) => println!("Daily hours: {hours}"),
                None => println!("Daily hours: (unset)"),
            }
        }
    }
    Ok(())
}
