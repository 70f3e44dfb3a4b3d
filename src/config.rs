//! Game setup configuration.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional TOML file, and command-line overrides.
//!
//! ```toml
//! opponent = "computer"
//!
//! [first]
//! name = "Ada"
//! symbol = "O"
//!
//! [search]
//! pruning = true
//! ```

use crate::games::tictactoe::Mark;
use crate::players::{Player, PlayerKind};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default name for seat 1.
pub const DEFAULT_FIRST_NAME: &str = "Player 1";

/// Default name for a human seat 2.
pub const DEFAULT_SECOND_NAME: &str = "Player 2";

/// Default name for the computer seat.
pub const COMPUTER_NAME: &str = "Computer";

/// Name and symbol for one seat. Unset fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Display name.
    #[serde(default)]
    name: Option<String>,

    /// Board symbol, a single character.
    #[serde(default)]
    symbol: Option<String>,
}

impl SeatConfig {
    /// Creates a seat configuration.
    pub fn new(name: Option<String>, symbol: Option<String>) -> Self {
        Self { name, symbol }
    }

    /// Replaces the fields that `other` sets.
    fn merge(&mut self, other: SeatConfig) {
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.symbol.is_some() {
            self.symbol = other.symbol;
        }
    }
}

/// Search options for the computer seat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Enables alpha-beta cutoffs.
    #[serde(default)]
    pruning: bool,
}

/// Full game setup.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who sits in seat 2.
    #[serde(default = "default_opponent")]
    opponent: PlayerKind,

    /// Seat 1, always human, moves first.
    #[serde(default)]
    first: SeatConfig,

    /// Seat 2.
    #[serde(default)]
    second: SeatConfig,

    /// Computer search options.
    #[serde(default)]
    search: SearchConfig,
}

fn default_opponent() -> PlayerKind {
    PlayerKind::Computer
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opponent: default_opponent(),
            first: SeatConfig::default(),
            second: SeatConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(opponent = %config.opponent, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Sets the opponent kind.
    pub fn set_opponent(&mut self, opponent: PlayerKind) {
        self.opponent = opponent;
    }

    /// Applies overrides for seat 1.
    pub fn override_first(&mut self, seat: SeatConfig) {
        self.first.merge(seat);
    }

    /// Applies overrides for seat 2.
    pub fn override_second(&mut self, seat: SeatConfig) {
        self.second.merge(seat);
    }

    /// Enables or disables alpha-beta cutoffs.
    pub fn set_pruning(&mut self, pruning: bool) {
        self.search.pruning = pruning;
    }

    /// Builds both seats, resolving defaults and validating symbols.
    ///
    /// Seat 1 defaults to `X`. A human seat 2 defaults to `O`; the computer
    /// takes whichever of `X`/`O` seat 1 did not pick unless a symbol is
    /// configured. Symbols are upper-cased.
    ///
    /// # Errors
    ///
    /// - [`SetupError::InvalidSymbol`] for a symbol that is not exactly one
    ///   visible character
    /// - [`SetupError::DuplicateSymbol`] if both seats end up with the same
    ///   symbol
    #[instrument(skip(self), fields(opponent = %self.opponent))]
    pub fn build_players(&self) -> Result<(Player, Player), SetupError> {
        let first_name = self.first.name.as_deref().unwrap_or(DEFAULT_FIRST_NAME);
        let first_symbol = resolve_symbol(self.first.symbol.as_deref(), 'X')?;

        let second_symbol = match self.opponent {
            PlayerKind::Human => resolve_symbol(self.second.symbol.as_deref(), 'O')?,
            PlayerKind::Computer => {
                let fallback = if first_symbol == 'X' { 'O' } else { 'X' };
                resolve_symbol(self.second.symbol.as_deref(), fallback)?
            }
        };
        if second_symbol == first_symbol {
            return Err(SetupError::DuplicateSymbol(first_symbol));
        }

        let first = Player::human(first_name, first_symbol, Mark::X);
        let second = match self.opponent {
            PlayerKind::Human => {
                let name = self.second.name.as_deref().unwrap_or(DEFAULT_SECOND_NAME);
                Player::human(name, second_symbol, Mark::O)
            }
            PlayerKind::Computer => {
                let name = self.second.name.as_deref().unwrap_or(COMPUTER_NAME);
                Player::computer(name, second_symbol, Mark::O, self.search.pruning)
            }
        };

        info!(
            first = %first.name(),
            first_symbol = %first_symbol,
            second = %second.name(),
            second_symbol = %second_symbol,
            "Players ready"
        );
        Ok((first, second))
    }
}

/// Validates a configured symbol, falling back to `default` when unset.
fn resolve_symbol(symbol: Option<&str>, default: char) -> Result<char, SetupError> {
    let Some(raw) = symbol else {
        return Ok(default);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }

    let mut chars = trimmed.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(SetupError::InvalidSymbol(raw.to_string()));
    };
    // Some characters upper-case to several (`ß` -> `SS`); those keep
    // their original form.
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Ok(u),
        _ => Ok(c),
    }
}

/// Invalid player setup.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SetupError {
    /// Both seats chose the same symbol.
    #[display("Symbol {} must be different for each player", _0)]
    DuplicateSymbol(char),

    /// Symbol is not a single character.
    #[display("Symbol {:?} must be a single character", _0)]
    InvalidSymbol(String),
}

impl std::error::Error for SetupError {}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
