mod action;
mod game;
mod phases;
mod position;
mod record;
pub mod rules;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use game::{GameError, Orchestrator};
pub use phases::{Outcome, Phase, Step};
pub use position::Position;
pub use record::{GameRecord, PlayerInfo};
pub use search::{DRAW_SCORE, LOSS_SCORE, Minimax, SearchResult, WIN_SCORE};
pub use types::{Board, BoardParseError, Mark, Square};
