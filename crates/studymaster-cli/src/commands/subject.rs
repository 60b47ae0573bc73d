//! Subject management commands.

use clap::Subcommand;
use studymaster_core::Priority;

#[derive(Subcommand)]
pub enum SubjectAction {
    /// Add a subject
    Add {
        /// Subject name
        name: String,
        /// Priority: high, medium or low (default: medium)
        #[arg(long, default_value = "medium")]
        priority: String,
    },
    /// Remove a subject (also drops its completed-session entries)
    Remove {
        /// Subject id
        id: i64,
    },
    /// Cycle a subject's priority (low -> medium -> high -> low)
    Priority {
        /// Subject id
        id: i64,
    },
    /// List subjects
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: SubjectAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut planner = super::open_planner()?;

    match action {
        SubjectAction::Add { name, priority } => {
            let priority: Priority = priority.parse()?;
            let subject = planner.add_subject(&name, priority)?;
            println!("Subject added: {} (id {})", subject.name, subject.id);
        }
        SubjectAction::Remove { id } => match planner.remove_subject(id)? {
            Some(subject) => println!("Subject removed: {}", subject.name),
            None => println!("Subject not found: {id}"),
        },
        SubjectAction::Priority { id } => match planner.cycle_priority(id)? {
            Some(priority) => println!("Priority is now {priority}"),
            None => println!("Subject not found: {id}"),
        },
        SubjectAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(planner.subjects())?);
            } else if planner.subjects().is_empty() {
                println!("No subjects yet. Add one with `subject add`.");
            } else {
                for subject in planner.subjects() {
                    println!("{:>4}  [{}]  {}", subject.id, subject.priority, subject.name);
                }
            }
        }
    }
    Ok(())
}
