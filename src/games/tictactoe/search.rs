//! Exhaustive minimax search for the computer opponent.
//!
//! The board is small enough (at most 9! move sequences) that the search
//! visits every line of play to the end. Scores are taken from the point
//! of view of a fixed maximizing mark:
//!
//! - `+10` when the maximizer has a line
//! - `-10` when the minimizer has a line
//! - `0` for a full board without a line
//!
//! Terminal scores carry no depth bonus, so all winning lines rank equally.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Mark, Minimax, Position};
//!
//! let board: Board = "XX.OO....".parse().unwrap();
//! let result = Minimax::new(Mark::X).best_move(&board, Mark::X).unwrap();
//! assert_eq!(result.position, Position::TopRight);
//! assert_eq!(result.score, 10);
//! ```

use super::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Score of a board the maximizer has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a board the minimizer has won.
pub const LOSS_SCORE: i32 = -10;

/// Score of a drawn board.
pub const DRAW_SCORE: i32 = 0;

/// Best move found by a search, with its game-theoretic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct SearchResult {
    /// Chosen cell.
    pub position: Position,
    /// Value of the position after the chosen move under optimal play.
    pub score: i32,
    /// Nodes visited, root excluded.
    pub nodes: u64,
}

/// Minimax evaluator with a fixed maximizing mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    maximizer: Mark,
    pruning: bool,
}

impl Minimax {
    /// Creates a plain exhaustive search favouring `maximizer`.
    pub fn new(maximizer: Mark) -> Self {
        Self {
            maximizer,
            pruning: false,
        }
    }

    /// Enables alpha-beta cutoffs.
    ///
    /// Cutoffs only skip branches that cannot change the result, so the
    /// chosen move and the reported score match the plain search. Only the
    /// node count shrinks.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Finds the optimal move for `to_move`.
    ///
    /// Candidates are scanned in ascending index order and the first move
    /// reaching the best score wins ties. Returns `None` when the board is
    /// already won or full. The caller's board is never modified.
    #[instrument(skip(self, board), fields(maximizer = ?self.maximizer, pruning = self.pruning))]
    pub fn best_move(&self, board: &Board, to_move: Mark) -> Option<SearchResult> {
        if self.terminal_score(board).is_some() {
            debug!("Board is terminal, no move to search");
            return None;
        }

        let mut scratch = *board;
        let mut nodes = 0;
        let maximizing = to_move == self.maximizer;
        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;
        let mut best: Option<(Position, i32)> = None;

        for pos in Position::ALL {
            if !scratch.is_empty(pos) {
                continue;
            }
            scratch.place(pos, to_move);
            let score = self.evaluate(&mut scratch, to_move.opponent(), alpha, beta, &mut nodes);
            scratch.retract(pos);

            let improves = match best {
                None => true,
                Some((_, current)) if maximizing => score > current,
                Some((_, current)) => score < current,
            };
            if improves {
                best = Some((pos, score));
            }
            if self.pruning {
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
            }
        }
        debug_assert_eq!(&scratch, board, "search must restore the board");

        let (position, score) = best?;
        debug!(position = ?position, score, nodes, "Search complete");
        Some(SearchResult::new(position, score, nodes))
    }

    /// Value of `board` with `to_move` next, under optimal play by both sides.
    #[instrument(skip(self, board), fields(maximizer = ?self.maximizer))]
    pub fn score(&self, board: &Board, to_move: Mark) -> i32 {
        let mut scratch = *board;
        let mut nodes = 0;
        self.evaluate(&mut scratch, to_move, i32::MIN, i32::MAX, &mut nodes)
    }

    /// Static value of a finished board, `None` while play continues.
    fn terminal_score(&self, board: &Board) -> Option<i32> {
        if board.has_win(self.maximizer) {
            Some(WIN_SCORE)
        } else if board.has_win(self.maximizer.opponent()) {
            Some(LOSS_SCORE)
        } else if board.is_full() {
            Some(DRAW_SCORE)
        } else {
            None
        }
    }

    fn evaluate(
        &self,
        board: &mut Board,
        to_move: Mark,
        mut alpha: i32,
        mut beta: i32,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;
        // Checked before generating children so a finished board never
        // reaches the empty candidate loop below.
        if let Some(score) = self.terminal_score(board) {
            return score;
        }

        let maximizing = to_move == self.maximizer;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.place(pos, to_move);
            let score = self.evaluate(board, to_move.opponent(), alpha, beta, nodes);
            board.retract(pos);

            if maximizing {
                best = best.max(score);
                if self.pruning {
                    alpha = alpha.max(best);
                }
            } else {
                best = best.min(score);
                if self.pruning {
                    beta = beta.min(best);
                }
            }
            if self.pruning && alpha >= beta {
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &str) -> Board {
        cells.parse().unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        let b = board("XX.OO....");
        let result = Minimax::new(Mark::X).best_move(&b, Mark::X).unwrap();
        assert_eq!(result.position, Position::TopRight);
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_minimizer_blocks_threat() {
        // X threatens the left column; O must take 6.
        let b = board("X..X...O.");
        let result = Minimax::new(Mark::X).best_move(&b, Mark::O).unwrap();
        assert_eq!(result.position, Position::BottomLeft);
    }

    #[test]
    fn test_win_preferred_over_block() {
        let b = board("XX.O.O...");
        let result = Minimax::new(Mark::X).best_move(&b, Mark::X).unwrap();
        assert_eq!(result.position, Position::TopRight);
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_empty_board_is_draw() {
        let result = Minimax::new(Mark::X)
            .with_pruning(true)
            .best_move(&Board::new(), Mark::X)
            .unwrap();
        assert_eq!(result.score, DRAW_SCORE);
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let won = board("XXXOO....");
        assert_eq!(Minimax::new(Mark::O).best_move(&won, Mark::O), None);
        let drawn = board("XOXOXXOXO");
        assert_eq!(Minimax::new(Mark::X).best_move(&drawn, Mark::X), None);
    }

    #[test]
    fn test_terminal_scores_ignore_depth() {
        let minimax = Minimax::new(Mark::O);
        assert_eq!(minimax.score(&board("OOOXX.X.."), Mark::X), WIN_SCORE);
        assert_eq!(minimax.score(&board("XXXOO...."), Mark::O), LOSS_SCORE);
        assert_eq!(minimax.score(&board("XOXOXXOXO"), Mark::O), DRAW_SCORE);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let b = board("X...O....");
        let before = b;
        let _ = Minimax::new(Mark::X).best_move(&b, Mark::X);
        assert_eq!(b, before);
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let plain = Minimax::new(Mark::X).best_move(&Board::new(), Mark::X).unwrap();
        let pruned = Minimax::new(Mark::X)
            .with_pruning(true)
            .best_move(&Board::new(), Mark::X)
            .unwrap();
        assert_eq!(plain.position, pruned.position);
        assert_eq!(plain.score, pruned.score);
        assert!(pruned.nodes < plain.nodes);
    }
}
