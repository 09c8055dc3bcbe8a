use clap::Subcommand;
use openpath_core::{catalog, Config, Database, TutorClient};

use super::load_tracker;

#[derive(Subcommand)]
pub enum TutorAction {
    /// Ask the tutor a question about the current day's topic
    Ask {
        /// The question
        message: Vec<String>,
    },
}

pub fn run(action: TutorAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let tracker = load_tracker(&db)?;

    match action {
        TutorAction::Ask { message } => {
            let message = message.join(" ");
            if message.trim().is_empty() {
                return Err("empty question".into());
            }

            // The tutor is contextualized by the displayed day when a
            // path is selected, generic otherwise.
            let (topic, phase) = match tracker.view() {
                Some(view) => {
                    let task = catalog::resolve(&view.key.path_id, view.key.day_number);
                    (task.topic, task.phase)
                }
                None => ("your career path".to_string(), "Getting Started".to_string()),
            };

            let config = Config::load_or_default();
            let client = TutorClient::new(&config.tutor);
            let runtime = tokio::runtime::Runtime::new()?;
            let reply = runtime.block_on(client.ask(&topic, &phase, &message));
            println!("{reply}");
        }
    }
    Ok(())
}
