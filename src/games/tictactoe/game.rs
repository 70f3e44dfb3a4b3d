//! Turn-by-turn orchestration between two players.
//!
//! The orchestrator owns the board and both seats. Each [`Orchestrator::step`]
//! runs exactly one turn: ask the active seat for a move, apply it, check for
//! a line by the mark just played, then for a full board, then hand over.

use super::action::{Move, MoveError};
use super::phases::{Outcome, Phase, Step};
use super::{Board, Mark, Position};
use crate::players::Player;
use tracing::{debug, info, instrument, warn};

/// Errors raised while driving a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A move source proposed an illegal placement.
    #[display("{}", _0)]
    InvalidMove(MoveError),

    /// A human seat was stepped without a supplied move.
    #[display("No move supplied for {}", _0)]
    MissingMove(Mark),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// Both seats hold the same mark.
    #[display("Both players were assigned mark {}", _0)]
    DuplicateMark(Mark),

    /// Search was asked to move on a finished board.
    #[display("No legal move available for {}", _0)]
    NoMoveAvailable(Mark),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidMove(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::InvalidMove(err)
    }
}

/// Drives a game between two seats.
#[derive(Debug)]
pub struct Orchestrator {
    board: Board,
    players: [Player; 2],
    phase: Phase,
    history: Vec<Move>,
}

impl Orchestrator {
    /// Creates a game on an empty board. `first` moves first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DuplicateMark`] if both players hold the same mark.
    #[instrument(skip(first, second), fields(first = %first.name(), second = %second.name()))]
    pub fn new(first: Player, second: Player) -> Result<Self, GameError> {
        if first.mark() == second.mark() {
            return Err(GameError::DuplicateMark(*first.mark()));
        }
        info!("Starting new game");
        Ok(Self {
            board: Board::new(),
            players: [first, second],
            phase: Phase::AwaitingMove(0),
            history: Vec::new(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Both seats, in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Moves applied so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Player whose turn it is, `None` once the game is over.
    pub fn active_player(&self) -> Option<&Player> {
        match self.phase {
            Phase::AwaitingMove(index) => Some(&self.players[index]),
            Phase::Won(_) | Phase::Draw => None,
        }
    }

    /// Player holding `mark`.
    pub fn player_for(&self, mark: Mark) -> &Player {
        if *self.players[0].mark() == mark {
            &self.players[0]
        } else {
            &self.players[1]
        }
    }

    /// Returns true if the active player needs a supplied move.
    pub fn needs_input(&self) -> bool {
        self.active_player().is_some_and(Player::is_interactive)
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Outcome of a finished game.
    pub fn outcome(&self) -> Option<Outcome> {
        self.phase.outcome()
    }

    /// Plays one turn.
    ///
    /// `supplied` carries the move for a human seat and is ignored by the
    /// computer seat.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game has already finished
    /// - [`GameError::MissingMove`] if a human seat gets no move
    /// - [`GameError::InvalidMove`] if the move is out of range or occupied;
    ///   the board and turn are left unchanged
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn step(&mut self, supplied: Option<Position>) -> Result<Step, GameError> {
        let Phase::AwaitingMove(index) = self.phase else {
            warn!("Step requested after game end");
            return Err(GameError::GameOver);
        };

        let player = &mut self.players[index];
        let mark = *player.mark();
        let position = player.next_move(&self.board, supplied)?;
        self.board.apply(position.to_index(), mark)?;
        let action = Move::new(mark, position);
        self.history.push(action);
        debug!(action = %action, "Move applied");

        if self.board.has_win(mark) {
            info!(winner = ?mark, moves = self.history.len(), "Game won");
            self.phase = Phase::Won(mark);
            Ok(Step::Won(mark))
        } else if self.board.is_full() {
            info!(moves = self.history.len(), "Game drawn");
            self.phase = Phase::Draw;
            Ok(Step::Draw)
        } else {
            self.phase = Phase::AwaitingMove(1 - index);
            Ok(Step::Continue)
        }
    }

    /// Plays until the game ends.
    ///
    /// `supply` is called before every human turn with the current board
    /// and the active player; computer turns run without it.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Orchestrator::step`].
    #[instrument(skip(self, supply))]
    pub fn play_out<F>(&mut self, mut supply: F) -> Result<Outcome, GameError>
    where
        F: FnMut(&Board, &Player) -> Option<Position>,
    {
        loop {
            let supplied = match self.active_player() {
                Some(player) if player.is_interactive() => supply(&self.board, player),
                Some(_) => None,
                None => return self.outcome().ok_or(GameError::GameOver),
            };
            match self.step(supplied)? {
                Step::Continue => {}
                Step::Won(mark) => return Ok(Outcome::Winner(mark)),
                Step::Draw => return Ok(Outcome::Draw),
            }
        }
    }
}
