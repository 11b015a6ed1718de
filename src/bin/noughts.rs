//! noughts CLI - play tic-tac-toe against people, dice, or minimax
//!
//! This CLI provides:
//! - Interactive multi-game sessions with save and load
//! - AI-only series with tallies and CSV export
//! - Inspection of saved games and positions

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe with a minimax opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play games at the terminal
    Play(noughts::cli::commands::play::PlayArgs),

    /// Play a series of AI-only games
    Series(noughts::cli::commands::series::SeriesArgs),

    /// Show a saved game and its move history
    History(noughts::cli::commands::history::HistoryArgs),

    /// Analyze a saved game or a position
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Series(args) => noughts::cli::commands::series::execute(args),
        Commands::History(args) => noughts::cli::commands::history::execute(args),
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args),
    }
}
