//! tictactoe-td CLI - self-play Q-learning for tic-tac-toe
//!
//! - `train`: run self-play training and validate against a random opponent
//! - `play`: train an agent, then play it from the terminal

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "tictactoe-td")]
#[command(version, about = "Tabular TD learning for tic-tac-toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a Q-learning agent through self-play
    Train(tictactoe_td::cli::commands::train::TrainArgs),

    /// Train an agent, then play against it
    Play(tictactoe_td::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => tictactoe_td::cli::commands::train::execute(args),
        Commands::Play(args) => tictactoe_td::cli::commands::play::execute(args),
    }
}
