//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record which mark
//! went where and can be serialized into a game record.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Rejected placement on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Invalid move: position {} is out of range (0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Invalid move: square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display_names_mark_and_square() {
        let action = Move::new(Mark::O, Position::Center);
        assert_eq!(action.to_string(), "O -> Center");
    }
}
