//! Tests for the game controller: moves, history scrubbing, status.

use tictactoe_core::{Event, Game, GameError, GameStatus, Marker, Square};

/// X: 0, 4, 8 (diagonal); O: 3, 5.
const X_WINS_DIAGONAL: [usize; 5] = [0, 3, 4, 5, 8];

fn played(moves: &[usize]) -> Game {
    let mut game = Game::new();
    for &cell in moves {
        game.play(cell);
    }
    game
}

#[test]
fn test_new_game() {
    let game = Game::new();
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.current_move(), 0);
    assert_eq!(game.to_move(), Marker::X);
    assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(game.status(), GameStatus::NextTurn(Marker::X));
}

#[test]
fn test_legal_moves_grow_history() {
    let game = played(&[4, 0, 8]);
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.current_move(), 3);
    assert_eq!(game.to_move(), Marker::O);
}

#[test]
fn test_turn_alternation() {
    let game = played(&[0, 1, 2, 3]);
    let board = game.board();
    // Markers placed at steps 0-3: X, O, X, O.
    assert_eq!(board.get(0), Some(Square::Occupied(Marker::X)));
    assert_eq!(board.get(1), Some(Square::Occupied(Marker::O)));
    assert_eq!(board.get(2), Some(Square::Occupied(Marker::X)));
    assert_eq!(board.get(3), Some(Square::Occupied(Marker::O)));
}

#[test]
fn test_occupied_cell_is_silent_noop() {
    let mut game = played(&[4]);
    let before = game.clone();

    game.play(4);
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_cell_is_silent_noop() {
    let mut game = Game::new();
    let before = game.clone();

    game.play(9);
    game.play(usize::MAX);
    assert_eq!(game, before);
}

#[test]
fn test_move_after_win_is_silent_noop() {
    let mut game = played(&X_WINS_DIAGONAL);
    assert_eq!(game.status(), GameStatus::Won(Marker::X));
    let before = game.clone();

    game.play(1);
    assert_eq!(game, before);
}

#[test]
fn test_win_scenario_diagonal() {
    let game = played(&X_WINS_DIAGONAL);
    assert_eq!(
        tictactoe_core::rules::winning_line(game.board()),
        Some([0, 4, 8])
    );
    assert_eq!(game.status_line(), "Winner: X");
}

#[test]
fn test_jump_to_scrubs_display_not_history() {
    let mut game = played(&[4, 0, 8]);

    game.jump_to(0).unwrap();
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.current_move(), 0);
    assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    // Pointer parity hands the turn back to X.
    assert_eq!(game.to_move(), Marker::X);
}

#[test]
fn test_play_after_jump_truncates_future() {
    let mut game = played(&[4, 0, 8, 2]);
    assert_eq!(game.history().len(), 5);

    game.jump_to(1).unwrap();
    game.play(6);

    // History kept snapshots 0..=1, then the new move.
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_move(), 2);
    assert_eq!(game.board().get(6), Some(Square::Occupied(Marker::O)));
    assert_eq!(game.board().get(8), Some(Square::Empty));
}

#[test]
fn test_jump_out_of_range_is_error() {
    let mut game = played(&[4]);
    let result = game.jump_to(2);
    assert_eq!(result, Err(GameError::OutOfRange { index: 2, len: 2 }));
    // State unchanged on error.
    assert_eq!(game.current_move(), 1);
}

#[test]
fn test_rename_resolves_in_status_line() {
    let mut game = Game::new();
    assert_eq!(game.status_line(), "Next player: X");

    game.rename_player(Marker::X, "Ann");
    assert_eq!(game.status_line(), "Next player: Ann");

    // Renaming back to empty falls back to the letter.
    game.rename_player(Marker::X, "");
    assert_eq!(game.status_line(), "Next player: X");
}

#[test]
fn test_rename_and_recolor_survive_scrubbing() {
    let mut game = played(&[4, 0]);
    game.rename_player(Marker::O, "Bea");
    game.recolor_player(Marker::O, "#00ff00");

    game.jump_to(0).unwrap();
    assert_eq!(game.profiles().get(Marker::O).name(), "Bea");
    assert_eq!(game.profiles().get(Marker::O).color(), "#00ff00");
}

#[test]
fn test_recolor_accepts_any_string() {
    let mut game = Game::new();
    game.recolor_player(Marker::X, "not-a-color");
    assert_eq!(game.profiles().get(Marker::X).color(), "not-a-color");
}

#[test]
fn test_drawn_board_status_still_says_next_player() {
    // X O X / O X X / O X O - full board, no winner.
    let game = played(&[0, 1, 2, 3, 4, 6, 5, 8, 7]);
    assert!(game.is_draw());
    // The status line never reports draws; it keeps naming a next
    // player even though no legal move remains.
    assert_eq!(game.status(), GameStatus::NextTurn(Marker::O));
    assert_eq!(game.status_line(), "Next player: O");
}

#[test]
fn test_event_dispatch() {
    let mut game = Game::new();

    game.handle(Event::CellClick(4)).unwrap();
    game.handle(Event::NameChange(Marker::O, "Bea".to_string()))
        .unwrap();
    game.handle(Event::ColorChange(Marker::O, "#123456".to_string()))
        .unwrap();

    assert_eq!(game.board().get(4), Some(Square::Occupied(Marker::X)));
    assert_eq!(game.status_line(), "Next player: Bea");
    assert_eq!(game.profiles().get(Marker::O).color(), "#123456");

    game.handle(Event::HistoryClick(0)).unwrap();
    assert_eq!(game.current_move(), 0);

    let result = game.handle(Event::HistoryClick(7));
    assert!(matches!(result, Err(GameError::OutOfRange { .. })));
}

#[test]
fn test_form_submit_is_noop() {
    let mut game = played(&[4, 0]);
    let before = game.clone();

    game.handle(Event::FormSubmit).unwrap();
    assert_eq!(game, before);
}

#[test]
fn test_state_serializes_round_trip() {
    let mut game = played(&[4, 0, 8]);
    game.rename_player(Marker::X, "Ann");
    game.jump_to(2).unwrap();

    let json = serde_json::to_string(&game).expect("serialize");
    let restored: Game = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, game);
    assert_eq!(restored.current_move(), 2);
    assert_eq!(restored.history().len(), 4);
}
