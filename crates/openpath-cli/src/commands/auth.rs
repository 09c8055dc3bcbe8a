use clap::Subcommand;
use openpath_core::Database;
use serde_json::json;

use super::{load_tracker, print_event, save_tracker};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Store your name and email and mark the session authenticated
    Login {
        /// Display name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
    },
    /// Clear the authentication flag (progress is kept)
    Logout,
    /// Show the stored identity
    Status,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut tracker = load_tracker(&db)?;

    match action {
        AuthAction::Login { name, email } => {
            let event = tracker.login(&name, &email);
            print_event(&event)?;
            save_tracker(&db, tracker)?;
        }
        AuthAction::Logout => {
            let event = tracker.logout();
            print_event(&event)?;
            save_tracker(&db, tracker)?;
        }
        AuthAction::Status => {
            let progress = tracker.progress();
            let status = json!({
                "name": progress.name,
                "email": progress.email,
                "authenticated": progress.is_authenticated,
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }
    Ok(())
}
