//! Line-based terminal front end.
//!
//! Owns the input and output handles for the length of one game. The engine
//! never sees them: human moves are read and validated here, then handed to
//! [`Orchestrator::step`].

use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_tictactoe::{Board, Orchestrator, Outcome, Position, Step};
use tracing::{debug, instrument};

/// Prompt shown for bad or out-of-range input.
const INVALID_INPUT: &str = "Invalid input! Please enter a number between 1-9.";

/// Prompt shown when the chosen square is taken.
const OCCUPIED: &str = "Position already occupied! Choose another spot.";

/// Console game session over any reader and writer.
pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Creates a session reading moves from `input` and drawing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs `game` to completion.
    ///
    /// Returns `None` if input ends before the game does.
    #[instrument(skip_all)]
    pub fn run(&mut self, game: &mut Orchestrator) -> Result<Option<Outcome>> {
        writeln!(self.output, "Welcome to Tic-Tac-Toe!")?;

        while let Some(player) = game.active_player() {
            self.render(game)?;
            let name = player.name().clone();

            let supplied = if player.is_interactive() {
                match self.read_move(game.board(), &name)? {
                    Some(pos) => Some(pos),
                    None => {
                        writeln!(self.output, "\nInput closed, game abandoned.")?;
                        return Ok(None);
                    }
                }
            } else {
                writeln!(self.output, "{} is making a move...", name)?;
                None
            };

            match game.step(supplied)? {
                Step::Continue => {}
                Step::Won(mark) => {
                    self.render(game)?;
                    writeln!(self.output, "{} wins!", game.player_for(mark).name())?;
                }
                Step::Draw => {
                    self.render(game)?;
                    writeln!(self.output, "It's a tie!")?;
                }
            }
        }

        Ok(game.outcome())
    }

    /// Prompts until the player enters a free square or input runs out.
    fn read_move(&mut self, board: &Board, name: &str) -> Result<Option<Position>> {
        loop {
            write!(self.output, "{}'s move (1-9): ", name)?;
            self.output.flush()?;

            // Raw bytes, so a garbled line is rejected below instead of
            // failing the read.
            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&buf);

            let Some(pos) = Position::parse_input(&line) else {
                debug!(input = %line.trim(), "Rejected input");
                writeln!(self.output, "{}", INVALID_INPUT)?;
                continue;
            };
            if !board.is_empty(pos) {
                writeln!(self.output, "{}", OCCUPIED)?;
                continue;
            }
            return Ok(Some(pos));
        }
    }

    fn render(&mut self, game: &Orchestrator) -> Result<()> {
        let board = game.board().render(|mark| *game.player_for(mark).symbol());
        writeln!(self.output, "\n{}", board)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strictly_tictactoe::{Mark, Player};

    fn play(game: &mut Orchestrator, input: &str) -> (Option<Outcome>, String) {
        let mut output = Vec::new();
        let outcome = {
            let mut session = ConsoleSession::new(Cursor::new(input.to_string()), &mut output);
            session.run(game).unwrap()
        };
        (outcome, String::from_utf8(output).unwrap())
    }

    fn humans() -> Orchestrator {
        Orchestrator::new(
            Player::human("Alice", 'A', Mark::X),
            Player::human("Bob", 'B', Mark::O),
        )
        .unwrap()
    }

    #[test]
    fn test_top_row_win() {
        let mut game = humans();
        let (outcome, output) = play(&mut game, "1\n4\n2\n5\n3\n");
        assert_eq!(outcome, Some(Outcome::Winner(Mark::X)));
        assert!(output.contains("Alice wins!"));
        assert!(output.contains(" A | A | A "));
        assert!(output.contains(" B | B |   "));
    }

    #[test]
    fn test_bad_input_reprompts() {
        let mut game = humans();
        let (outcome, output) = play(&mut game, "abc\n0\n5\n5\n1\n");
        assert_eq!(outcome, None);
        assert_eq!(output.matches(INVALID_INPUT).count(), 2);
        assert_eq!(output.matches(OCCUPIED).count(), 1);
        assert_eq!(game.history().len(), 2);
        assert!(output.contains("Input closed, game abandoned."));
    }

    #[test]
    fn test_non_utf8_input_reprompts() {
        let mut game = humans();
        let mut output = Vec::new();
        let input = b"\xff\xfe\n1\n4\n2\n5\n3\n".to_vec();
        let outcome = ConsoleSession::new(Cursor::new(input), &mut output)
            .run(&mut game)
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(outcome, Some(Outcome::Winner(Mark::X)));
        assert_eq!(output.matches(INVALID_INPUT).count(), 1);
        assert!(output.contains("Alice wins!"));
    }

    #[test]
    fn test_computer_never_loses() {
        let mut game = Orchestrator::new(
            Player::human("Alice", 'X', Mark::X),
            Player::computer("Computer", 'O', Mark::O, true),
        )
        .unwrap();
        let input = "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(2);
        let (outcome, output) = play(&mut game, &input);

        assert!(output.contains("Computer is making a move..."));
        assert!(matches!(
            outcome,
            Some(Outcome::Draw) | Some(Outcome::Winner(Mark::O))
        ));
    }
}
