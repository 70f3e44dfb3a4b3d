//! Game phases and outcomes.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Where the orchestrator stands between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting on the player in this seat (0 or 1).
    AwaitingMove(usize),
    /// The mark completed a line.
    Won(Mark),
    /// Board filled with no line.
    Draw,
}

impl Phase {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::AwaitingMove(_))
    }

    /// Outcome of a finished game.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::AwaitingMove(_) => None,
            Phase::Won(mark) => Some(Outcome::Winner(*mark)),
            Phase::Draw => Some(Outcome::Draw),
        }
    }
}

/// Result of a single orchestrator step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// Move applied, game goes on.
    Continue,
    /// Move applied and completed a line for this mark.
    Won(Mark),
    /// Move applied and filled the board without a line.
    Draw,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Mark),
    /// Game ended in a draw.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
