//! Matchbox CLI - a tic-tac-toe opponent that learns from its mistakes
//!
//! - `play`: train two agents, then play them at the console
//! - `train`: headless self-play, optionally writing a JSON summary

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "matchbox")]
#[command(version, about = "Matchbox-learning tic-tac-toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train two agents, then play against them
    Play(matchbox::cli::commands::play::PlayArgs),

    /// Run self-play training only
    Train(matchbox::cli::commands::train::TrainArgs),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => matchbox::cli::commands::play::execute(args),
        Commands::Train(args) => matchbox::cli::commands::train::execute(args),
    }
}
