//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};

/// The eight winning lines.
pub const WIN_PATTERNS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `mark` holds all three squares of any line.
pub fn has_win(board: &Board, mark: Mark) -> bool {
    let target = Square::Occupied(mark);
    WIN_PATTERNS
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == target))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row, `None` otherwise.
/// On boards reachable by alternating play at most one mark can qualify.
pub fn check_winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|mark| has_win(board, *mark))
}
