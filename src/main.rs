//! Strictly Tic-Tac-Toe - terminal front end
//!
//! Plays games on the console and solves positions.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use console::ConsoleSession;
use strictly_tictactoe::{
    Board, DRAW_SCORE, GameConfig, GameRecord, LOSS_SCORE, Mark, Minimax, Orchestrator, SeatConfig,
    WIN_SCORE,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Play(args) => run_play(args),
        Command::Solve {
            board,
            to_move,
            pruning,
        } => run_solve(&board, to_move, pruning),
    }
}

/// Logs go to stderr so they never interleave with prompts on stdout.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the game config from file and flags.
#[instrument(skip_all)]
fn load_config(args: &PlayArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(opponent) = args.opponent {
        config.set_opponent(opponent);
    }
    config.override_first(SeatConfig::new(args.name1.clone(), args.symbol1.clone()));
    config.override_second(SeatConfig::new(args.name2.clone(), args.symbol2.clone()));
    if args.pruning {
        config.set_pruning(true);
    }

    Ok(config)
}

/// Play one game on the terminal.
#[instrument(skip_all)]
fn run_play(args: PlayArgs) -> Result<()> {
    let config = load_config(&args)?;
    let (first, second) = config.build_players()?;
    let mut game = Orchestrator::new(first, second)?;

    // Console handles live only for the duration of the game.
    let outcome = {
        let stdin = std::io::stdin();
        let mut session = ConsoleSession::new(stdin.lock(), std::io::stdout().lock());
        session.run(&mut game)?
    };
    match outcome {
        Some(outcome) => info!(outcome = %outcome, "Session finished"),
        None => info!("Session abandoned before the game ended"),
    }

    if let Some(path) = &args.record {
        let json = GameRecord::from_game(&game).to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write game record to {}", path.display()))?;
        info!(path = %path.display(), "Game record written");
    }

    Ok(())
}

/// Print the optimal move for a position.
#[instrument]
fn run_solve(cells: &str, to_move: Option<Mark>, pruning: bool) -> Result<()> {
    let board: Board = cells.parse().context("Invalid board")?;
    println!("{}", board);

    if let Some(winner) = board.winner() {
        println!("Position is already decided: {} wins", winner);
        return Ok(());
    }
    if board.is_full() {
        println!("Position is already decided: draw");
        return Ok(());
    }

    let mark = match to_move {
        Some(mark) => mark,
        None => board
            .to_move()
            .context("Cannot infer the side to move from the mark counts; pass --to-move")?,
    };

    let result = Minimax::new(mark)
        .with_pruning(pruning)
        .best_move(&board, mark)
        .context("No legal move available")?;

    let verdict = match result.score {
        WIN_SCORE => "win",
        LOSS_SCORE => "loss",
        DRAW_SCORE => "draw",
        _ => "unknown",
    };
    println!(
        "Best move for {}: {} ({}), {} with perfect play (score {}, {} nodes)",
        mark,
        result.position.to_index() + 1,
        result.position,
        verdict,
        result.score,
        result.nodes
    );

    Ok(())
}
