//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Marker, Square};
use tracing::instrument;

/// The 8 winning lines, checked in fixed priority order.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Finds a completed line of three identical markers on the board.
///
/// Returns the cell indices of the first matching line in the fixed
/// order above, or `None` when no line is complete. In a legal game at
/// most one line can be completing, so the order only matters for
/// boards that were never reachable by sanctioned play.
#[instrument]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Some(Square::Empty) && sq == board.get(b) && sq == board.get(c) {
            return Some([a, b, c]);
        }
    }

    None
}

/// Returns the marker holding a completed line, if any.
#[instrument]
pub fn winner(board: &Board) -> Option<Marker> {
    let [a, _, _] = winning_line(board)?;
    match board.get(a) {
        Some(Square::Occupied(marker)) => Some(marker),
        _ => None,
    }
}
