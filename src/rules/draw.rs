//! Draw detection logic for tic-tac-toe.
//!
//! Draw state is a standalone query. The game status line deliberately
//! does not report draws; see [`crate::Game::status`].

use super::win::winning_line;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is a draw: full with no completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_line(board).is_none()
}
