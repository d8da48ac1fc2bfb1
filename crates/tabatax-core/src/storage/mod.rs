pub mod config;
pub mod database;
pub mod document;

pub use config::AppConfig;
pub use database::{Database, RunRecord, Stats};
pub use document::{WorkoutDocument, DOCUMENT_KEY};

use std::path::PathBuf;

/// Returns `~/.config/tabatax[-dev]/` based on TABATAX_ENV.
///
/// Set TABATAX_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TABATAX_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("tabatax-dev")
    } else {
        base_dir.join("tabatax")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
