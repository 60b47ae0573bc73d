//! Destructive reset of all planner data.
//!
//! State is untouched until the user confirms.

use std::io::{self, BufRead, Write};

pub fn run(yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !yes && !confirm()? {
        println!("Aborted; nothing was changed.");
        return Ok(());
    }

    let mut planner = super::open_planner()?;
    planner.reset_all()?;
    println!("All planner data cleared.");
    Ok(())
}

fn confirm() -> Result<bool, io::Error> {
    print!("Reset exam date, subjects, completions and streak? This cannot be undone. [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
