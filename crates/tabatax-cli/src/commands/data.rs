use std::path::PathBuf;

use clap::Subcommand;
use tabatax_core::{Database, WorkoutDocument};

#[derive(Subcommand)]
pub enum DataAction {
    /// Print the saved workout document as JSON
    Show,
    /// Replace the saved workout with the stock starter
    Init,
    /// Write the saved workout to a dated JSON file
    Export {
        /// Target directory (defaults to the current one)
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Validate a JSON file and store it as the saved workout
    Import { file: PathBuf },
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        DataAction::Show => {
            let doc = super::load_document(&db)?;
            println!("{}", doc.to_json()?);
        }
        DataAction::Init => {
            let doc = WorkoutDocument::starter();
            doc.save(&db)?;
            println!("Saved the starter workout ({} exercises).", doc.exercises.len());
        }
        DataAction::Export { dir } => {
            let doc = super::load_document(&db)?;
            let path = doc.export_to(&dir)?;
            println!("Exported to {}", path.display());
        }
        DataAction::Import { file } => {
            // Validation happens wholesale before the saved slot is
            // touched; a bad file leaves it as it was.
            let doc = WorkoutDocument::import_from(&file)?;
            doc.save(&db)?;
            println!(
                "Imported {} exercises, {} sets.",
                doc.exercises.len(),
                doc.config.num_sets
            );
        }
    }
    Ok(())
}
