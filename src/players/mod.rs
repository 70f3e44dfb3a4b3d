//! Players and the move sources behind them.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::games::tictactoe::{Board, GameError, Mark, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Capability to produce the next move for a mark.
pub trait MoveSource: std::fmt::Debug {
    /// Returns the move for `mark` on `board`.
    ///
    /// `supplied` is the move handed in by the I/O layer, if any. Sources
    /// that compute their own move ignore it.
    fn next_move(
        &mut self,
        board: &Board,
        mark: Mark,
        supplied: Option<Position>,
    ) -> Result<Position, GameError>;

    /// Returns true if this source relies on a supplied move.
    fn is_interactive(&self) -> bool;
}

/// Kind of player sitting in a seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerKind {
    /// Moves come from a person through the I/O layer.
    Human,
    /// Moves come from minimax search.
    Computer,
}

/// A seat in the game: identity plus move source.
#[derive(Debug, Getters)]
pub struct Player {
    /// Display name.
    name: String,
    /// Single character shown on the board.
    symbol: char,
    /// Mark this player places.
    mark: Mark,
    /// Human or computer.
    kind: PlayerKind,
    #[getter(skip)]
    source: Box<dyn MoveSource>,
}

impl Player {
    /// Creates a player around any move source.
    #[instrument(skip(name, source), fields(name = %name.as_ref()))]
    pub fn new(
        name: impl AsRef<str>,
        symbol: char,
        mark: Mark,
        source: Box<dyn MoveSource>,
    ) -> Self {
        let kind = if source.is_interactive() {
            PlayerKind::Human
        } else {
            PlayerKind::Computer
        };
        Self {
            name: name.as_ref().to_string(),
            symbol,
            mark,
            kind,
            source,
        }
    }

    /// Creates a player whose moves are supplied from outside.
    pub fn human(name: impl AsRef<str>, symbol: char, mark: Mark) -> Self {
        Self::new(name, symbol, mark, Box::new(HumanPlayer::new()))
    }

    /// Creates a minimax-driven player.
    pub fn computer(name: impl AsRef<str>, symbol: char, mark: Mark, pruning: bool) -> Self {
        Self::new(name, symbol, mark, Box::new(ComputerPlayer::new(pruning)))
    }

    /// Returns true if this player needs a supplied move.
    pub fn is_interactive(&self) -> bool {
        self.source.is_interactive()
    }

    /// Asks the move source for this player's next move.
    pub fn next_move(
        &mut self,
        board: &Board,
        supplied: Option<Position>,
    ) -> Result<Position, GameError> {
        self.source.next_move(board, self.mark, supplied)
    }
}
