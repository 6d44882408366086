//! Tests for the game engine state machine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictacduel_engine::{
    Board, EngineError, GameEngine, GameMode, GameStatus, MoveRejection, Player, Square,
};

fn seeded(mode: GameMode) -> GameEngine {
    GameEngine::with_rng(mode, StdRng::seed_from_u64(42))
}

fn play(engine: &mut GameEngine, moves: &[usize]) {
    for &index in moves {
        assert!(*engine.apply_move(index).applied(), "move {index} rejected");
    }
}

#[test]
fn test_new_game_starts_empty_with_x() {
    let engine = seeded(GameMode::PvP);
    let state = engine.state();
    assert_eq!(state.board(), &Board::new());
    assert_eq!(*state.current_player(), Player::X);
    assert_eq!(*state.status(), GameStatus::InProgress);
    assert!(*state.active());
    assert!(state.history().is_empty());
}

#[test]
fn test_apply_move_places_mark_and_switches_player() {
    let mut engine = seeded(GameMode::PvP);
    let report = engine.apply_move(4);

    assert!(*report.applied());
    assert_eq!(*report.rejection(), None);
    assert_eq!(report.board().get(4), Some(Square::Occupied(Player::X)));
    assert_eq!(*report.current_player(), Player::O);
    assert_eq!(*report.status(), GameStatus::InProgress);
    assert_eq!(engine.history(), &[4]);
}

#[test]
fn test_occupied_cell_is_a_no_op() {
    let mut engine = seeded(GameMode::PvP);
    engine.apply_move(4);
    let before = engine.board().clone();

    let report = engine.apply_move(4);
    assert!(!*report.applied());
    assert_eq!(*report.rejection(), Some(MoveRejection::CellOccupied(4)));
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.current_player(), Player::O);
}

#[test]
fn test_out_of_range_index_is_a_no_op() {
    let mut engine = seeded(GameMode::PvP);
    let report = engine.apply_move(9);
    assert!(!*report.applied());
    assert_eq!(*report.rejection(), Some(MoveRejection::InvalidIndex(9)));
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.current_player(), Player::X);
}

#[test]
fn test_win_ends_game_without_switching() {
    let mut engine = seeded(GameMode::PvP);
    // X: 0, 1, 2 / O: 3, 4
    play(&mut engine, &[0, 3, 1, 4]);
    let report = engine.apply_move(2);

    assert!(*report.applied());
    assert_eq!(*report.status(), GameStatus::Won(Player::X));
    assert_eq!(*report.current_player(), Player::X);
    assert!(!engine.is_active());
}

#[test]
fn test_inactive_game_rejects_moves() {
    let mut engine = seeded(GameMode::PvP);
    play(&mut engine, &[0, 3, 1, 4, 2]);
    let before = engine.board().clone();

    let report = engine.apply_move(8);
    assert!(!*report.applied());
    assert_eq!(*report.rejection(), Some(MoveRejection::GameInactive));
    assert_eq!(engine.board(), &before);
}

#[test]
fn test_draw_ends_game() {
    let mut engine = seeded(GameMode::PvP);
    // Ends as X O X / X O O / O X X
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6]);
    let report = engine.apply_move(8);

    assert_eq!(*report.status(), GameStatus::Draw);
    assert_eq!(report.board(), &"XOX XOO OXX".parse::<Board>().unwrap());
    assert!(!engine.is_active());
}

#[test]
fn test_reset_restores_initial_state() {
    let mut engine = seeded(GameMode::PvP);
    play(&mut engine, &[0, 3, 1, 4, 2]);

    engine.reset(None);
    let state = engine.state();
    assert_eq!(state.board(), &Board::new());
    assert_eq!(*state.current_player(), Player::X);
    assert!(*state.active());
    assert_eq!(*state.mode(), GameMode::PvP);
    assert!(state.history().is_empty());

    // Idempotent.
    engine.reset(None);
    assert_eq!(engine.state(), state);
}

#[test]
fn test_reset_switches_mode() {
    let mut engine = seeded(GameMode::PvP);
    engine.apply_move(0);
    engine.reset(Some(GameMode::PvC));
    assert_eq!(engine.mode(), GameMode::PvC);
    assert_eq!(engine.board(), &Board::new());
}

#[test]
fn test_compute_computer_move_does_not_mutate() {
    let mut engine = seeded(GameMode::PvC);
    engine.apply_move(0);
    let before = engine.state();

    let index = engine.compute_computer_move().unwrap();
    assert_eq!(index, 4);
    assert_eq!(engine.state(), before);
}

#[test]
fn test_play_computer_turn_applies_selection() {
    let mut engine = seeded(GameMode::PvC);
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(
        engine.play_computer_turn(),
        Err(EngineError::NotComputerTurn)
    );

    play(&mut engine, &[0]);
    let report = engine.play_computer_turn().unwrap();
    assert_eq!(report.board().get(4), Some(Square::Occupied(Player::O)));
    assert_eq!(*report.current_player(), Player::X);

    play(&mut engine, &[1]);
    let report = engine.play_computer_turn().unwrap();
    assert_eq!(report.board().get(2), Some(Square::Occupied(Player::O)));
}

#[test]
fn test_computer_turn_rejected_in_pvp() {
    let mut engine = seeded(GameMode::PvP);
    engine.apply_move(0);
    assert!(!engine.is_computer_turn());
    assert_eq!(
        engine.play_computer_turn(),
        Err(EngineError::NotComputerTurn)
    );
}

#[test]
fn test_computer_move_on_full_board_fails() {
    let board: Board = "XOX XOO OXX".parse().unwrap();
    let mut engine =
        GameEngine::from_board(GameMode::PvC, board, Player::O, StdRng::seed_from_u64(1));
    assert!(!engine.is_active());
    assert_eq!(engine.status(), GameStatus::Draw);
    assert_eq!(
        engine.compute_computer_move(),
        Err(EngineError::NoMovesAvailable)
    );
}

#[test]
fn test_from_board_resumes_play() {
    let board: Board = "XX. OO. ...".parse().unwrap();
    let mut engine =
        GameEngine::from_board(GameMode::PvC, board, Player::O, StdRng::seed_from_u64(1));
    assert!(engine.is_computer_turn());

    let report = engine.play_computer_turn().unwrap();
    assert_eq!(*report.status(), GameStatus::Won(Player::O));
    assert!(!engine.is_active());
}

#[test]
fn test_independent_engines() {
    let mut first = seeded(GameMode::PvP);
    let second = seeded(GameMode::PvP);
    first.apply_move(0);
    assert_eq!(second.board(), &Board::new());
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = seeded(GameMode::PvC);
    engine.apply_move(4);
    let json = serde_json::to_value(engine.state()).unwrap();
    assert_eq!(json["mode"], "pvc");
    assert_eq!(json["current_player"], "O");
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["history"], serde_json::json!([4]));
}
