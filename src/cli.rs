//! Command-line interface for laser_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Laser Games - tic-tac-toe where moves can fire lasers
#[derive(Parser, Debug)]
#[command(name = "laser_games")]
#[command(about = "Tic-tac-toe with a randomized laser effect", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// Path to a TOML config file (defaults to laser_games.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fix the laser RNG seed for a reproducible game
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play a scripted game and print the transcript
    Play {
        /// Moves as board indices (0-8) or labels such as "top-left"
        #[arg(required = true)]
        moves: Vec<String>,

        /// Path to a TOML config file (defaults to laser_games.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fix the laser RNG seed for a reproducible game
        #[arg(long)]
        seed: Option<u64>,
    },
}
