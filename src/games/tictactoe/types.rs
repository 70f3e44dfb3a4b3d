//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use super::rules;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Mark placed on the board by one of the two seats.
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
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (seat 1, moves first).
    X,
    /// Mark O (seat 2).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Symbol used when no player-chosen symbol is available.
    pub fn default_symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Copy of the nine squares for rendering.
    pub fn snapshot(&self) -> [Square; 9] {
        self.squares
    }

    /// Places `mark` at cell `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for an index outside 0-8 and
    /// [`MoveError::SquareOccupied`] for a taken cell. The board is left
    /// untouched in both cases.
    #[instrument(skip(self))]
    pub fn apply(&mut self, index: usize, mark: Mark) -> Result<Position, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.place(pos, mark);
        Ok(pos)
    }

    /// Writes a mark without validation. Search only ever targets empty cells.
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) {
        debug_assert!(self.is_empty(pos), "placing on occupied square {pos:?}");
        self.squares[pos.to_index()] = Square::Occupied(mark);
    }

    /// Clears a hypothetical placement.
    pub(crate) fn retract(&mut self, pos: Position) {
        self.squares[pos.to_index()] = Square::Empty;
    }

    /// Empty positions in ascending index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }

    /// Number of squares holding `mark`.
    pub fn mark_count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(mark))
            .count()
    }

    /// Returns true if `mark` holds any complete line.
    pub fn has_win(&self, mark: Mark) -> bool {
        rules::has_win(self, mark)
    }

    /// Returns the mark holding a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Returns true if no empty squares remain.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Full board with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self)
    }

    /// Returns true once the board is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Infers the side to move assuming X opened the game.
    ///
    /// Returns `None` for terminal boards and for boards whose mark
    /// counts could not arise from alternating play.
    pub fn to_move(&self) -> Option<Mark> {
        if self.is_terminal() {
            return None;
        }
        let x = self.mark_count(Mark::X);
        let o = self.mark_count(Mark::O);
        if x == o {
            Some(Mark::X)
        } else if x == o + 1 {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Renders the board as three rows, mapping marks through `symbol`.
    pub fn render(&self, symbol: impl Fn(Mark) -> char) -> String {
        let cells: Vec<char> = self
            .squares
            .iter()
            .map(|sq| sq.mark().map_or(' ', &symbol))
            .collect();

        let mut result = String::new();
        for row in 0..3 {
            let i = row * 3;
            result.push_str(&format!(" {} | {} | {} \n", cells[i], cells[i + 1], cells[i + 2]));
            if row < 2 {
                result.push_str("-----------\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(Mark::default_symbol))
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// Wrong number of cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
    /// Character that is not `X`, `O`, `.`, `_` or `-`.
    #[display("Unexpected character {:?} in board", _0)]
    BadCell(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order, e.g. `"XX.OO...."`.
    ///
    /// Whitespace and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut board = Board::new();
        for (square, c) in board.squares.iter_mut().zip(cells) {
            *square = match c.to_ascii_uppercase() {
                'X' => Square::Occupied(Mark::X),
                'O' => Square::Occupied(Mark::O),
                '.' | '_' | '-' => Square::Empty,
                other => return Err(BoardParseError::BadCell(other)),
            };
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sets_square() {
        let mut board = Board::new();
        let pos = board.apply(4, Mark::X).unwrap();
        assert_eq!(pos, Position::Center);
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_apply_occupied_leaves_board_unchanged() {
        let mut board = Board::new();
        board.apply(0, Mark::X).unwrap();
        let before = board;

        let result = board.apply(0, Mark::O);
        assert_eq!(result, Err(MoveError::SquareOccupied(Position::TopLeft)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_out_of_range_leaves_board_unchanged() {
        let mut board: Board = "X........".parse().unwrap();
        let before = board;

        assert_eq!(board.apply(9, Mark::O), Err(MoveError::OutOfRange(9)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_cells_ascending() {
        let board: Board = "X.O.X....".parse().unwrap();
        let empty: Vec<usize> = board.empty_cells().map(Position::to_index).collect();
        assert_eq!(empty, vec![1, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_to_move_alternates() {
        assert_eq!(Board::new().to_move(), Some(Mark::X));
        let board: Board = "X........".parse().unwrap();
        assert_eq!(board.to_move(), Some(Mark::O));
        let skewed: Board = "XX.......".parse().unwrap();
        assert_eq!(skewed.to_move(), None);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("XO".parse::<Board>(), Err(BoardParseError::WrongLength(2)));
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(BoardParseError::BadCell('?'))
        );
    }

    #[test]
    fn test_render_layout() {
        let board: Board = "XO.......".parse().unwrap();
        let expected = " X | O |   \n-----------\n   |   |   \n-----------\n   |   |   \n";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_render_custom_symbols() {
        let board: Board = "X...O....".parse().unwrap();
        let text = board.render(|mark| match mark {
            Mark::X => 'A',
            Mark::O => 'B',
        });
        assert!(text.starts_with(" A |   |   \n"));
        assert!(text.contains("   | B |   \n"));
    }
}
