//! Strictly Tic-Tac-Toe - a tic-tac-toe engine with a perfect-play opponent
//!
//! # Architecture
//!
//! - **Board**: nine squares, win and draw detection
//! - **Search**: exhaustive minimax choosing the computer's move
//! - **Players**: the `MoveSource` capability, human pass-through or computed
//! - **Orchestrator**: alternates turns and reports the outcome
//!
//! Console prompting and rendering live in the binary and only talk to the
//! engine through [`Orchestrator::step`] and [`Board::snapshot`].
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Mark, Orchestrator, Outcome, Player};
//!
//! let mut game = Orchestrator::new(
//!     Player::computer("Deep", 'X', Mark::X, true),
//!     Player::computer("Blue", 'O', Mark::O, true),
//! )?;
//! let outcome = game.play_out(|_, _| None)?;
//! assert_eq!(outcome, Outcome::Draw);
//! # Ok::<(), strictly_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod players;

// Crate-level exports - Configuration
pub use config::{
    COMPUTER_NAME, ConfigError, DEFAULT_FIRST_NAME, DEFAULT_SECOND_NAME, GameConfig, SearchConfig,
    SeatConfig, SetupError,
};

// Crate-level exports - Players
pub use players::{ComputerPlayer, HumanPlayer, MoveSource, Player, PlayerKind};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, DRAW_SCORE, GameError, GameRecord, LOSS_SCORE, Mark, Minimax, Move,
    MoveError, Orchestrator, Outcome, Phase, PlayerInfo, Position, SearchResult, Square, Step,
    WIN_SCORE,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules::WIN_PATTERNS;
