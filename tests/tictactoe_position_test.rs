//! Tests for tic-tac-toe positions and board queries.

use strictly_tictactoe::{Board, Mark, MoveError, Position, Square};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_empty_cells_on_empty_board() {
    let board = Board::new();
    let empty: Vec<Position> = board.empty_cells().collect();
    assert_eq!(empty, Position::ALL.to_vec());
}

#[test]
fn test_empty_cells_filters_occupied() {
    let mut board = Board::new();
    board.apply(0, Mark::X).unwrap();
    board.apply(4, Mark::O).unwrap();

    let empty: Vec<Position> = board.empty_cells().collect();
    assert_eq!(empty.len(), 7);
    assert!(!empty.contains(&Position::TopLeft));
    assert!(!empty.contains(&Position::Center));
    assert!(empty.contains(&Position::BottomRight));
}

#[test]
fn test_snapshot_is_a_copy() {
    let mut board = Board::new();
    board.apply(8, Mark::O).unwrap();
    let snapshot = board.snapshot();
    board.apply(0, Mark::X).unwrap();

    assert_eq!(snapshot[0], Square::Empty);
    assert_eq!(snapshot[8], Square::Occupied(Mark::O));
}

#[test]
fn test_invalid_moves_rejected() {
    let mut board = Board::new();
    board.apply(3, Mark::X).unwrap();
    let before = board;

    assert_eq!(
        board.apply(3, Mark::O),
        Err(MoveError::SquareOccupied(Position::MiddleLeft))
    );
    assert_eq!(board.apply(42, Mark::O), Err(MoveError::OutOfRange(42)));
    assert_eq!(board, before);
}
