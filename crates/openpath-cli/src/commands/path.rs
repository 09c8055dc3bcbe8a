use clap::Subcommand;
use openpath_core::{career_paths, find_path, AutoConfirm, Config, ConfirmPrompt, Database};

use super::{load_tracker, print_event, save_tracker, StdinConfirm};

#[derive(Subcommand)]
pub enum PathAction {
    /// List all career paths
    List,
    /// Commit to a career path (restarts the day cursor at 1)
    Select {
        /// Path id, e.g. "p1"
        id: String,
    },
    /// Show the selected path and per-phase progress
    Show,
    /// Clear the selected path so a new one can be chosen
    Change {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: PathAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut tracker = load_tracker(&db)?;

    match action {
        PathAction::List => {
            for path in career_paths() {
                println!(
                    "{:<4} {:<42} {:<16} {} days",
                    path.id,
                    path.title,
                    path.category.label(),
                    path.total_days
                );
            }
        }
        PathAction::Select { id } => {
            if find_path(&id).is_none() {
                return Err(format!("unknown path: {id} (see `openpath path list`)").into());
            }
            let event = tracker.select_path(&id);
            print_event(&event)?;
            save_tracker(&db, tracker)?;
        }
        PathAction::Show => {
            let Some(path_id) = tracker.progress().selected_path_id.clone() else {
                println!("no path selected. Run `openpath path select <id>`.");
                return Ok(());
            };
            // Selected ids always resolve; the catalog is static.
            let path = find_path(&path_id)
                .ok_or_else(|| format!("selected path {path_id} is not in the catalog"))?;
            let completed = tracker.progress().completed_count_for_path(&path_id);
            println!("{} - {} ({})", path.id, path.title, path.category.label());
            println!("{}", path.description);
            println!();
            for phase in &path.phases {
                let done = tracker
                    .progress()
                    .completed_days
                    .iter()
                    .filter(|k| {
                        k.path_id == path_id
                            && k.day_number >= phase.start_day
                            && k.day_number <= phase.end_day
                    })
                    .count();
                let span = (phase.end_day - phase.start_day + 1) as usize;
                println!(
                    "  {:<28} days {:>3}-{:<3} {:>3}/{}",
                    phase.name, phase.start_day, phase.end_day, done, span
                );
            }
            println!();
            println!(
                "day {} of {}, {} completed, frontier at day {}",
                tracker.progress().current_day,
                path.total_days,
                completed,
                tracker.unlock_frontier()
            );
        }
        PathAction::Change { yes } => {
            let config = Config::load_or_default();
            let confirm: Box<dyn ConfirmPrompt> = if yes || !config.confirm_path_change {
                Box::new(AutoConfirm(true))
            } else {
                Box::new(StdinConfirm)
            };
            match tracker.deselect_path(confirm.as_ref()) {
                Some(event) => {
                    print_event(&event)?;
                    save_tracker(&db, tracker)?;
                }
                None => println!("path unchanged"),
            }
        }
    }
    Ok(())
}
