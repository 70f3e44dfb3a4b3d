//! Computer player backed by minimax search.

use super::MoveSource;
use crate::games::tictactoe::{Board, GameError, Mark, Minimax, Position};
use tracing::{info, instrument, warn};

/// Perfect-play opponent. Deterministic: the same board always yields the
/// same move.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputerPlayer {
    pruning: bool,
}

impl ComputerPlayer {
    /// Creates a computer player, optionally with alpha-beta cutoffs.
    pub fn new(pruning: bool) -> Self {
        Self { pruning }
    }
}

impl MoveSource for ComputerPlayer {
    #[instrument(skip(self, board), fields(pruning = self.pruning))]
    fn next_move(
        &mut self,
        board: &Board,
        mark: Mark,
        supplied: Option<Position>,
    ) -> Result<Position, GameError> {
        if let Some(ignored) = supplied {
            warn!(position = ?ignored, "Computer player ignores supplied move");
        }

        let result = Minimax::new(mark)
            .with_pruning(self.pruning)
            .best_move(board, mark)
            .ok_or(GameError::NoMoveAvailable(mark))?;

        info!(
            position = ?result.position,
            score = result.score,
            nodes = result.nodes,
            "Computer chose move"
        );
        Ok(result.position)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_own_line() {
        let board: Board = "OO.XX....".parse().unwrap();
        let mut computer = ComputerPlayer::new(false);
        let pos = computer.next_move(&board, Mark::O, None).unwrap();
        assert_eq!(pos, Position::TopRight);
    }

    #[test]
    fn test_supplied_move_is_ignored() {
        let board: Board = "XX.OO....".parse().unwrap();
        let mut computer = ComputerPlayer::new(true);
        let pos = computer
            .next_move(&board, Mark::X, Some(Position::BottomRight))
            .unwrap();
        assert_eq!(pos, Position::TopRight);
    }

    #[test]
    fn test_finished_board_has_no_move() {
        let board: Board = "XXXOO....".parse().unwrap();
        let mut computer = ComputerPlayer::new(false);
        assert_eq!(
            computer.next_move(&board, Mark::O, None),
            Err(GameError::NoMoveAvailable(Mark::O))
        );
    }
}
