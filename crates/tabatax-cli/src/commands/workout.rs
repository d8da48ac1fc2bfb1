use clap::Subcommand;
use tabatax_core::workout::{format_clock, resolve_rest, resolve_work, total_duration};
use tabatax_core::{Database, Exercise, Icon, WorkoutDocument};

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// Print the circuit and timing
    Show,
    /// Print the estimated total duration
    Total,
    /// Append an exercise to the circuit
    Add {
        name: String,
        /// Coaching note shown during the exercise
        #[arg(long)]
        notes: Option<String>,
        /// Work override in seconds
        #[arg(long)]
        work: Option<u32>,
        /// Rest override in seconds (0 is honored)
        #[arg(long)]
        rest: Option<u32>,
        /// Icon id (dumbbell, running, cardio, hiit, yoga, stretch,
        /// bike, swim, core)
        #[arg(long)]
        icon: Option<Icon>,
    },
    /// Remove an exercise by id or name
    Remove { exercise: String },
    /// Move an exercise to a new zero-based position
    Move { exercise: String, position: usize },
    /// Update the workout's timing
    Timing {
        #[arg(long)]
        work: Option<u32>,
        #[arg(long)]
        rest: Option<u32>,
        #[arg(long)]
        set_rest: Option<u32>,
        #[arg(long)]
        sets: Option<u32>,
    },
}

/// Resolve a CLI argument to an exercise id: exact id first, then a
/// unique case-insensitive name match.
fn resolve_id(doc: &WorkoutDocument, needle: &str) -> Result<String, Box<dyn std::error::Error>> {
    if doc.exercises.index_of(needle).is_some() {
        return Ok(needle.to_string());
    }
    let matches: Vec<&Exercise> = doc
        .exercises
        .iter()
        .filter(|ex| ex.name.eq_ignore_ascii_case(needle))
        .collect();
    match matches.as_slice() {
        [ex] => Ok(ex.id.clone()),
        [] => Err(format!("no exercise matches '{needle}'").into()),
        _ => Err(format!("'{needle}' is ambiguous, use the id").into()),
    }
}

fn print_document(doc: &WorkoutDocument) {
    let cfg = &doc.config;
    println!(
        "work {}s / rest {}s / set rest {}s / {} sets",
        cfg.work_duration, cfg.rest_duration, cfg.set_rest_duration, cfg.num_sets
    );
    for (i, ex) in doc.exercises.iter().enumerate() {
        println!(
            "{:>2}. [{}] {} ({}s work, {}s rest)  id={}",
            i,
            ex.icon.as_str(),
            ex.name,
            resolve_work(ex, cfg),
            resolve_rest(ex, cfg),
            ex.id,
        );
        if !ex.notes.is_empty() {
            println!("      {}", ex.notes);
        }
    }
    println!(
        "total: {}",
        format_clock(total_duration(cfg, &doc.exercises))
    );
}

pub fn run(action: WorkoutAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut doc = super::load_document(&db)?;

    match action {
        WorkoutAction::Show => {
            print_document(&doc);
        }
        WorkoutAction::Total => {
            println!(
                "{}",
                format_clock(total_duration(&doc.config, &doc.exercises))
            );
        }
        WorkoutAction::Add {
            name,
            notes,
            work,
            rest,
            icon,
        } => {
            let mut exercise = Exercise::new(name);
            exercise.notes = notes.unwrap_or_default();
            exercise.custom_duration = work.filter(|&w| w > 0);
            exercise.custom_rest = rest;
            exercise.icon = icon.unwrap_or_default();
            let (name, id) = (exercise.name.clone(), exercise.id.clone());
            doc.exercises.push(exercise);
            doc.save(&db)?;
            println!("Added {name} (id={id})");
        }
        WorkoutAction::Remove { exercise } => {
            let id = resolve_id(&doc, &exercise)?;
            if let Some(removed) = doc.exercises.remove(&id) {
                doc.save(&db)?;
                println!("Removed {}", removed.name);
            }
        }
        WorkoutAction::Move { exercise, position } => {
            let id = resolve_id(&doc, &exercise)?;
            doc.exercises.move_to(&id, position);
            doc.save(&db)?;
            print_document(&doc);
        }
        WorkoutAction::Timing {
            work,
            rest,
            set_rest,
            sets,
        } => {
            if let Some(work) = work {
                doc.config.work_duration = work;
            }
            if let Some(rest) = rest {
                doc.config.rest_duration = rest;
            }
            if let Some(set_rest) = set_rest {
                doc.config.set_rest_duration = set_rest;
            }
            if let Some(sets) = sets {
                doc.config.num_sets = sets;
            }
            doc.save(&db)?;
            print_document(&doc);
        }
    }

    Ok(())
}
