use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tabatax-cli", version, about = "TabataX interval-workout timer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the workout timer in the terminal
    Run(commands::run::RunArgs),
    /// Workout circuit management
    Workout {
        #[command(subcommand)]
        action: commands::workout::WorkoutAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Workout document import/export and the saved slot
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
    /// Run history statistics
    Stats,
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Workout { action } => commands::workout::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Data { action } => commands::data::run(action),
        Commands::Stats => commands::stats::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
