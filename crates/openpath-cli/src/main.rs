use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "openpath", version, about = "OpenPath CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Career path selection
    Path {
        #[command(subcommand)]
        action: commands::path::PathAction,
    },
    /// Day viewing and navigation
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Sub-task completion
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Progress statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// AI tutor
    Tutor {
        #[command(subcommand)]
        action: commands::tutor::TutorAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Auth { action } => commands::auth::run(action),
        Commands::Path { action } => commands::path::run(action),
        Commands::Day { action } => commands::day::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Tutor { action } => commands::tutor::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
