//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage so the board, the search and
//! the orchestrator all judge positions the same way.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_PATTERNS, check_winner, has_win};
