use clap::Subcommand;
use openpath_core::{catalog, find_path, Database, ProgressTracker};

use super::{load_tracker, save_tracker};

#[derive(Subcommand)]
pub enum DayAction {
    /// Show a day's task (defaults to the current day)
    Show {
        /// Day number; out-of-range values clamp into 1..=200
        day: Option<u32>,
    },
    /// Advance to the next day
    Next,
    /// Go back one day
    Prev,
    /// Jump straight to a day
    Goto {
        /// Day number; out-of-range values clamp into 1..=200
        day: u32,
    },
    /// Phase-by-phase overview of the selected path
    Map,
}

pub fn run(action: DayAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut tracker = load_tracker(&db)?;
    if tracker.progress().selected_path_id.is_none() {
        return Err("no path selected. Run `openpath path select <id>`.".into());
    }

    match action {
        DayAction::Show { day } => {
            if let Some(day) = day {
                tracker.jump_to_day(day);
            }
            print_day(&tracker)?;
            save_tracker(&db, tracker)?;
        }
        DayAction::Next => match tracker.go_to_next_day() {
            Some(_) => {
                print_day(&tracker)?;
                save_tracker(&db, tracker)?;
            }
            None => println!("complete the current day before moving on"),
        },
        DayAction::Prev => match tracker.go_to_previous_day() {
            Some(_) => {
                print_day(&tracker)?;
                save_tracker(&db, tracker)?;
            }
            None => println!("already on day 1"),
        },
        DayAction::Goto { day } => {
            tracker.jump_to_day(day);
            print_day(&tracker)?;
            save_tracker(&db, tracker)?;
        }
        DayAction::Map => {
            print_map(&tracker)?;
        }
    }
    Ok(())
}

fn print_day(tracker: &ProgressTracker) -> Result<(), Box<dyn std::error::Error>> {
    let view = tracker.view().ok_or("no day to show")?;
    let task = catalog::resolve(&view.key.path_id, view.key.day_number);
    let locked = tracker.is_day_locked(view.key.day_number);

    println!("Day {} - {}", task.key.day_number, task.topic);
    println!("Phase: {}", task.phase);
    if task.placement {
        println!("Placement readiness: interview prep territory.");
    }
    if locked {
        println!();
        println!(
            "LOCKED. Complete day {} to unlock this one.",
            tracker.unlock_frontier()
        );
        return Ok(());
    }

    println!();
    println!("[{}] input: {}", tick(view.input), task.input.description);
    for resource in &task.input.resources {
        println!("      - {} ({})", resource.title, resource.url);
    }
    println!("[{}] output: {}", tick(view.output), task.output.description);
    println!(
        "[{}] synthesis: {}",
        tick(view.synthesis),
        task.synthesis.question
    );
    if view.all_marked() {
        println!();
        println!("day complete");
    }
    Ok(())
}

fn tick(flag: bool) -> char {
    if flag {
        'x'
    } else {
        ' '
    }
}

fn print_map(tracker: &ProgressTracker) -> Result<(), Box<dyn std::error::Error>> {
    let path_id = tracker
        .progress()
        .selected_path_id
        .clone()
        .ok_or("no path selected")?;
    let path = find_path(&path_id)
        .ok_or_else(|| format!("selected path {path_id} is not in the catalog"))?;
    let current = tracker.progress().current_day;
    let frontier = tracker.unlock_frontier();

    println!("{} - {}", path.id, path.title);
    for phase in &path.phases {
        println!("{} ({}-{})", phase.name, phase.start_day, phase.end_day);
        for day in phase.start_day..=phase.end_day {
            let key = openpath_core::TaskKey::new(path_id.as_str(), day);
            let marker = if tracker.progress().is_completed(&key) {
                '#'
            } else if day <= frontier {
                'o'
            } else {
                '.'
            };
            print!("{marker}");
            if day == current {
                print!("<");
            }
        }
        println!();
    }
    println!("# done  o unlocked  . locked  < current day");
    Ok(())
}
