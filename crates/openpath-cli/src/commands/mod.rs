//! CLI subcommands.
//!
//! Every command runs one load -> mutate -> save cycle against the
//! local database; the tracker itself is process-transient.

pub mod auth;
pub mod config;
pub mod day;
pub mod path;
pub mod stats;
pub mod task;
pub mod tutor;

use std::io::Write;

use openpath_core::{Celebration, ConfirmPrompt, Database, Event, ProgressTracker};

pub fn load_tracker(db: &Database) -> Result<ProgressTracker, Box<dyn std::error::Error>> {
    Ok(ProgressTracker::new(
        db.load_progress()?,
        db.load_day_view()?,
    ))
}

pub fn save_tracker(
    db: &Database,
    tracker: ProgressTracker,
) -> Result<(), Box<dyn std::error::Error>> {
    let (progress, view) = tracker.into_parts();
    db.save_progress(&progress)?;
    db.save_day_view(view.as_ref())?;
    Ok(())
}

pub fn print_event(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(event)?);
    Ok(())
}

/// y/N prompt on the controlling terminal.
pub struct StdinConfirm;

impl ConfirmPrompt for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        eprint!("{message} [y/N] ");
        let _ = std::io::stderr().flush();
        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Prints a streak banner when a day enters the completed set.
pub struct ConsoleCelebration;

impl Celebration for ConsoleCelebration {
    fn on_day_completed(&self, event: &Event) {
        if let Event::DayCompleted {
            task, new_streak, ..
        } = event
        {
            println!("*** Day {} complete! Streak: {} ***", task.day_number, new_streak);
        }
    }
}
