use clap::Subcommand;
use openpath_core::Database;

use super::{load_tracker, print_event};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Snapshot of streaks, completion counts and the day cursor
    Show,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let tracker = load_tracker(&db)?;

    match action {
        StatsAction::Show => {
            print_event(&tracker.snapshot())?;
        }
    }
    Ok(())
}
