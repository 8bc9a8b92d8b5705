//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// One of the two players' symbols.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Marker {
    /// Marker X (moves first).
    X,
    /// Marker O (moves second).
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// The literal letter for this marker, used as the display fallback
    /// when a player has no name set.
    pub fn letter(self) -> &'static str {
        match self {
            Marker::X => "X",
            Marker::O => "O",
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell occupied by a marker.
    Occupied(Marker),
}

/// 3x3 tic-tac-toe board snapshot.
///
/// Cells are indexed 0-8 in row-major order: 0-2 top row,
/// 3-5 middle row, 6-8 bottom row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given cell (0-8), or `None` out of range.
    pub fn get(&self, cell: usize) -> Option<Square> {
        self.squares.get(cell).copied()
    }

    /// Checks if a cell is empty. Out-of-range cells are not empty.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the cells occupied by the given marker.
    pub fn count(&self, marker: Marker) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(marker))
            .count()
    }

    /// Sets the square at the given cell. Callers validate the range.
    pub(crate) fn set(&mut self, cell: usize, square: Square) {
        debug_assert!(cell < 9, "cell index out of range");
        self.squares[cell] = square;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
