//! Command-line interface for strictly_tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{Mark, PlayerKind};

/// Strictly Tic-Tac-Toe - play against a friend or a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play(PlayArgs),

    /// Print the optimal move for a position
    Solve {
        /// Nine cells in row-major order using X, O and '.', e.g. "XX.OO...."
        board: String,

        /// Side to move; inferred from the mark counts if omitted
        #[arg(long)]
        to_move: Option<Mark>,

        /// Use alpha-beta cutoffs
        #[arg(long)]
        pruning: bool,
    },
}

/// Options for the `play` command. Flags override values from `--config`.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Who plays seat 2 (human or computer)
    #[arg(long)]
    pub opponent: Option<PlayerKind>,

    /// Name for player 1
    #[arg(long)]
    pub name1: Option<String>,

    /// Symbol for player 1
    #[arg(long)]
    pub symbol1: Option<String>,

    /// Name for player 2
    #[arg(long)]
    pub name2: Option<String>,

    /// Symbol for player 2
    #[arg(long)]
    pub symbol2: Option<String>,

    /// Use alpha-beta cutoffs in the computer's search
    #[arg(long)]
    pub pruning: bool,

    /// Write a JSON record of the game to this file
    #[arg(long)]
    pub record: Option<PathBuf>,
}
