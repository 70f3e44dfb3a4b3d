//! End-to-end tests for game orchestration.

use strictly_tictactoe::{
    GameError, GameRecord, Mark, Orchestrator, Outcome, Phase, Player, PlayerKind, Position, Step,
};

fn humans() -> Orchestrator {
    Orchestrator::new(
        Player::human("Alice", 'A', Mark::X),
        Player::human("Bob", 'B', Mark::O),
    )
    .expect("distinct marks")
}

#[test]
fn test_scripted_top_row_win() {
    let mut game = humans();
    let script = [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ];

    let steps: Vec<Step> = script
        .into_iter()
        .map(|pos| game.step(Some(pos)).expect("legal move"))
        .collect();

    assert_eq!(
        steps,
        vec![
            Step::Continue,
            Step::Continue,
            Step::Continue,
            Step::Continue,
            Step::Won(Mark::X),
        ]
    );
    assert_eq!(game.phase(), Phase::Won(Mark::X));
    assert_eq!(game.outcome(), Some(Outcome::Winner(Mark::X)));
    assert!(game.active_player().is_none());
}

#[test]
fn test_step_after_win_is_rejected() {
    let mut game = humans();
    for index in [0, 3, 1, 4, 2] {
        game.step(Position::from_index(index)).unwrap();
    }
    let board = *game.board();

    assert_eq!(game.step(Some(Position::BottomRight)), Err(GameError::GameOver));
    assert_eq!(game.board(), &board);
}

#[test]
fn test_play_out_with_supplier() {
    let mut game = humans();
    let mut moves = [0, 3, 1, 4, 2].into_iter();
    let outcome = game
        .play_out(|_, _| moves.next().and_then(Position::from_index))
        .unwrap();
    assert_eq!(outcome, Outcome::Winner(Mark::X));
}

#[test]
fn test_play_out_surfaces_missing_move() {
    let mut game = humans();
    let result = game.play_out(|_, _| None);
    assert_eq!(result, Err(GameError::MissingMove(Mark::X)));
}

#[test]
fn test_computer_punishes_blunder() {
    let mut game = Orchestrator::new(
        Player::human("Alice", 'X', Mark::X),
        Player::computer("Computer", 'O', Mark::O, false),
    )
    .unwrap();

    // Alice ignores the computer's threats and fills the bottom row.
    let mut moves = [6, 7, 8, 0, 1, 2, 3, 4, 5].into_iter();
    let outcome = game
        .play_out(|board, _| {
            moves
                .by_ref()
                .filter_map(Position::from_index)
                .find(|pos| board.is_empty(*pos))
        })
        .unwrap();
    assert_ne!(outcome, Outcome::Winner(Mark::X));
}

#[test]
fn test_record_round_trip() {
    let mut game = Orchestrator::new(
        Player::human("Alice", 'A', Mark::X),
        Player::computer("Computer", 'C', Mark::O, true),
    )
    .unwrap();
    game.step(Some(Position::Center)).unwrap();
    game.step(None).unwrap();

    let record = GameRecord::from_game(&game);
    assert_eq!(record.moves.len(), 2);
    assert_eq!(record.players[1].kind, PlayerKind::Computer);
    assert_eq!(record.players[1].symbol, 'C');
    assert_eq!(record.outcome, None);

    let json = record.to_json().unwrap();
    assert!(json.contains("\"computer\""));
    assert_eq!(GameRecord::from_json(&json).unwrap(), record);
}
