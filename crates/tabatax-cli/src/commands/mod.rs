pub mod config;
pub mod data;
pub mod run;
pub mod stats;
pub mod workout;

use tabatax_core::{Database, WorkoutDocument};

/// Saved workout, or the stock starter when nothing has been saved yet.
pub fn load_document(db: &Database) -> Result<WorkoutDocument, Box<dyn std::error::Error>> {
    Ok(WorkoutDocument::load(db)?.unwrap_or_else(WorkoutDocument::starter))
}
