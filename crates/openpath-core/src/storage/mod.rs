mod config;
pub mod database;

pub use config::{Config, TutorConfig};
pub use database::Database;

use std::path::PathBuf;

/// Returns `~/.config/openpath[-dev]/` based on OPENPATH_ENV.
///
/// Set OPENPATH_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("OPENPATH_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("openpath-dev")
    } else {
        base_dir.join("openpath")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
