//! Human player whose moves arrive from the I/O layer.

use super::MoveSource;
use crate::games::tictactoe::{Board, GameError, Mark, Position};
use tracing::{debug, instrument};

/// Pass-through source for externally validated moves.
///
/// Prompting and re-prompting on bad input belong to the caller; this
/// source only hands the supplied move to the orchestrator.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanPlayer;

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new() -> Self {
        Self
    }
}

impl MoveSource for HumanPlayer {
    #[instrument(skip(self, _board))]
    fn next_move(
        &mut self,
        _board: &Board,
        mark: Mark,
        supplied: Option<Position>,
    ) -> Result<Position, GameError> {
        let position = supplied.ok_or(GameError::MissingMove(mark))?;
        debug!(position = ?position, "Human move received");
        Ok(position)
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_supplied_move_through() {
        let mut human = HumanPlayer::new();
        let pos = human
            .next_move(&Board::new(), Mark::X, Some(Position::Center))
            .unwrap();
        assert_eq!(pos, Position::Center);
    }

    #[test]
    fn test_missing_move_is_error() {
        let mut human = HumanPlayer::new();
        let result = human.next_move(&Board::new(), Mark::O, None);
        assert_eq!(result, Err(GameError::MissingMove(Mark::O)));
    }
}
