use clap::Subcommand;
use openpath_core::task::SubtaskPart;
use openpath_core::{Celebration, Config, Database, NoCelebration};

use super::{load_tracker, print_event, save_tracker, ConsoleCelebration};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Mark one sub-task of the current day as done
    Done {
        /// Which sub-task: input, output or synthesis
        part: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut tracker = load_tracker(&db)?;

    match action {
        TaskAction::Done { part } => {
            let part: SubtaskPart = part.parse()?;
            if tracker.progress().selected_path_id.is_none() {
                return Err("no path selected. Run `openpath path select <id>`.".into());
            }
            match tracker.mark_subtask(part) {
                Some(event) => print_event(&event)?,
                None => {
                    let day = tracker.progress().current_day;
                    if tracker.is_day_locked(day) {
                        return Err(format!("day {day} is locked").into());
                    }
                    println!("already marked");
                }
            }
            if let Some(event) = tracker.finalize_day_if_complete() {
                print_event(&event)?;
                let celebration: Box<dyn Celebration> = if Config::load_or_default().celebration {
                    Box::new(ConsoleCelebration)
                } else {
                    Box::new(NoCelebration)
                };
                celebration.on_day_completed(&event);
            }
            save_tracker(&db, tracker)?;
        }
    }
    Ok(())
}
