//! Command-line interface for gridmatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gridmatch - two-player tic-tac-toe match tracker
#[derive(Parser, Debug)]
#[command(name = "gridmatch")]
#[command(about = "Track a best-of-five tic-tac-toe match with a persistent leaderboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match interactively
    Play {
        /// Name for player 1 (plays X); prompted for if omitted
        #[arg(long)]
        player_one: Option<String>,

        /// Name for player 2 (plays O); prompted for if omitted
        #[arg(long)]
        player_two: Option<String>,

        /// Path to the match configuration file
        #[arg(long, default_value = "gridmatch.toml")]
        config: PathBuf,

        /// Path to the state snapshot file
        #[arg(long, default_value = "gridmatch_state.json")]
        snapshot: PathBuf,
    },

    /// Print the leaderboard standings
    Leaderboard {
        /// Path to the state snapshot file
        #[arg(long, default_value = "gridmatch_state.json")]
        snapshot: PathBuf,
    },
}
