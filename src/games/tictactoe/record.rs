//! Serializable summary of a played game.

use super::action::Move;
use super::game::Orchestrator;
use super::phases::Outcome;
use super::Mark;
use crate::players::{Player, PlayerKind};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Identity of one seat, without its move source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    /// Display name.
    pub name: String,
    /// Display symbol.
    pub symbol: char,
    /// Mark on the board.
    pub mark: Mark,
    /// Human or computer.
    pub kind: PlayerKind,
}

impl From<&Player> for PlayerInfo {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().clone(),
            symbol: *player.symbol(),
            mark: *player.mark(),
            kind: *player.kind(),
        }
    }
}

/// Players, moves and result of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Seats in turn order.
    pub players: Vec<PlayerInfo>,
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// `None` if the game was abandoned before it ended.
    pub outcome: Option<Outcome>,
}

impl GameRecord {
    /// Captures the current state of a game.
    #[instrument(skip(game))]
    pub fn from_game(game: &Orchestrator) -> Self {
        Self {
            players: game.players().iter().map(PlayerInfo::from).collect(),
            moves: game.history().to_vec(),
            outcome: game.outcome(),
        }
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a record written by [`GameRecord::to_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
