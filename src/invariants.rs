//! First-class invariants over game state.
//!
//! Invariants are logical properties that hold for every state reached
//! through the sanctioned operations. They are testable independently
//! and checked with `debug_assert!` after each successful move.

use crate::game::Game;
use crate::types::{Board, Marker, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: history starts at the empty board and is never empty.
pub struct HistoryAnchoredInvariant;

impl Invariant<Game> for HistoryAnchoredInvariant {
    fn holds(game: &Game) -> bool {
        game.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History is non-empty and snapshot 0 is the empty board"
    }
}

/// Invariant: adjacent snapshots differ by exactly one cell going
/// from empty to occupied. Cells are never cleared or overwritten.
pub struct MonotonicHistoryInvariant;

impl Invariant<Game> for MonotonicHistoryInvariant {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).all(|pair| {
            let [before, after] = pair else {
                return false;
            };
            let changed: Vec<usize> = (0..9)
                .filter(|&cell| before.get(cell) != after.get(cell))
                .collect();
            changed.len() == 1 && before.is_empty(changed[0]) && !after.is_empty(changed[0])
        })
    }

    fn description() -> &'static str {
        "Each move sets exactly one empty cell, and set cells never change"
    }
}

/// Invariant: the marker added at step i matches turn parity
/// (X at even steps, O at odd steps).
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).enumerate().all(|(step, pair)| {
            let [before, after] = pair else {
                return false;
            };
            let expected = if step % 2 == 0 { Marker::X } else { Marker::O };
            (0..9)
                .filter(|&cell| before.get(cell) != after.get(cell))
                .all(|cell| after.get(cell) == Some(Square::Occupied(expected)))
        })
    }

    fn description() -> &'static str {
        "X moves at even steps, O at odd steps"
    }
}

/// Invariant: on every snapshot, X leads O by at most one mark and
/// never trails (X moves first).
pub struct BalancedMarksInvariant;

impl Invariant<Game> for BalancedMarksInvariant {
    fn holds(game: &Game) -> bool {
        game.history().iter().all(|board| {
            let x = board.count(Marker::X);
            let o = board.count(Marker::O);
            x >= o && x - o <= 1
        })
    }

    fn description() -> &'static str {
        "X count equals or exceeds O count by at most one on every snapshot"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (
    HistoryAnchoredInvariant,
    MonotonicHistoryInvariant,
    AlternatingTurnInvariant,
    BalancedMarksInvariant,
);

/// Asserts that all game invariants hold (debug builds only).
pub fn assert_invariants(game: &Game) {
    debug_assert!(
        GameInvariants::check_all(game).is_ok(),
        "game invariant violated: {:?}",
        GameInvariants::check_all(game)
    );
    debug_assert!(
        game.current_move() < game.history().len(),
        "current move pointer out of range"
    );
}
