use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use clap::Args;
use tabatax_core::cue::{dispatch, ConsoleSink, CueSink, NullSink};
use tabatax_core::workout::{format_clock, Phase, Status, WorkoutTimer};
use tabatax_core::{AppConfig, Database, WorkoutDocument};

#[derive(Args)]
pub struct RunArgs {
    /// Run a workout document from a file instead of the saved one
    #[arg(long)]
    file: Option<PathBuf>,
    /// Silence all cues
    #[arg(long)]
    mute: bool,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let app = AppConfig::load_or_default();
    let db = Database::open()?;
    let doc = match &args.file {
        Some(path) => WorkoutDocument::import_from(path)?,
        None => super::load_document(&db)?,
    };

    let mut timer = WorkoutTimer::new(doc.config, doc.exercises);
    let mut sink: Box<dyn CueSink> = if args.mute || !app.cues.enabled {
        Box::new(NullSink)
    } else {
        Box::new(ConsoleSink::stdout().motivation(app.cues.motivation))
    };

    println!(
        "{} exercises x {} sets, about {}",
        timer.circuit().len(),
        timer.config().num_sets,
        format_clock(timer.total_secs()),
    );
    if timer.start().is_none() {
        println!("Nothing to run: the circuit is empty.");
        return Ok(());
    }

    // The whole run lives on this one thread: the sleep is the 1 Hz
    // trigger, and ticks stop the instant the status leaves Running.
    while timer.status() == Status::Running {
        thread::sleep(Duration::from_secs(1));
        let outcome = timer.tick();
        dispatch(&outcome.cues, sink.as_mut());
        print_position(&timer);
    }

    if timer.status() == Status::Finished {
        let state = timer.state();
        db.record_run(
            timer.config().num_sets,
            timer.circuit().len() as u32,
            state.completed.len() as u32,
            timer.total_secs(),
            Utc::now(),
        )?;
        println!(
            "Workout complete: {} work intervals over {} sets.",
            state.completed.len(),
            timer.config().num_sets,
        );
    }
    Ok(())
}

fn print_position(timer: &WorkoutTimer) {
    let state = timer.state();
    let label = match state.phase {
        Phase::GetReady => "get ready".to_string(),
        Phase::Work => timer
            .active_exercise()
            .map(|ex| ex.name.clone())
            .unwrap_or_else(|| "work".to_string()),
        Phase::Rest => "rest".to_string(),
        Phase::SetRest => format!("set rest, set {} next", state.current_set + 1),
        Phase::Finished => "finished".to_string(),
    };
    println!(
        "[set {}/{}] {:>3}s  {label}",
        state.current_set,
        timer.config().num_sets,
        state.time_left,
    );
}
