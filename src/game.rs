//! The game controller: history, current move pointer, and profiles.
//!
//! All mutation is routed through the operations here; derived values
//! (whose turn, status, winner) are recomputed on every read rather
//! than cached.

use crate::event::Event;
use crate::invariants;
use crate::profile::Profiles;
use crate::rules::{draw, win};
use crate::types::{Board, Marker, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Error for operations the game rejects explicitly.
///
/// Invalid moves are not errors: `play` silently ignores them, so the
/// presentation layer simply sees no state change.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A history jump targeted an index past the end of history.
    #[display("History index {index} out of range (history length {len})")]
    OutOfRange {
        /// The requested history index.
        index: usize,
        /// The history length at the time of the jump.
        len: usize,
    },
}

impl std::error::Error for GameError {}

/// Current status of the game, derived from the current board.
///
/// A full board with no winner still reports `NextTurn`; the status
/// line never surfaces draws. Use [`Game::is_draw`] to query draw
/// state explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The current board holds a completed line for this marker.
    Won(Marker),
    /// No winner yet; this marker moves next.
    NextTurn(Marker),
}

/// A player-vs-player tic-tac-toe game.
///
/// Owns the full session state: the board history (snapshot 0 is
/// always the empty board), the pointer selecting the current
/// snapshot, and the two player profiles. The whole struct serializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    history: Vec<Board>,
    current_move: usize,
    profiles: Profiles,
}

impl Game {
    /// Creates a new game: one empty snapshot, X to move, default profiles.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            profiles: Profiles::new(),
        }
    }

    /// The board snapshot selected by the current move pointer.
    pub fn board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// All board snapshots from game start to the latest move.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the current snapshot in history.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The marker whose turn it is, derived from the move pointer:
    /// even means X, odd means O.
    pub fn to_move(&self) -> Marker {
        if self.current_move % 2 == 0 {
            Marker::X
        } else {
            Marker::O
        }
    }

    /// The player profile table.
    pub fn profiles(&self) -> &Profiles {
        &self.profiles
    }

    /// Places the next marker at the given cell.
    ///
    /// The move is silently ignored when the game is already won, the
    /// cell is out of range, or the cell is occupied; the caller sees
    /// no state change. A successful move truncates any snapshots past
    /// the current pointer (discarding previously scrubbed-away
    /// futures), appends the new board, and points at it.
    #[instrument(skip(self), fields(to_move = %self.to_move()))]
    pub fn play(&mut self, cell: usize) {
        if win::winning_line(self.board()).is_some() {
            debug!(cell, "move ignored: game already won");
            return;
        }
        if cell >= 9 {
            debug!(cell, "move ignored: cell out of range");
            return;
        }
        if !self.board().is_empty(cell) {
            debug!(cell, "move ignored: cell occupied");
            return;
        }

        let marker = self.to_move();
        let mut next = self.board().clone();
        next.set(cell, Square::Occupied(marker));

        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        if let Some(winner) = win::winner(self.board()) {
            info!(winner = %winner, "game over");
        }

        invariants::assert_invariants(self);
    }

    /// Jumps the current move pointer to an arbitrary history snapshot.
    ///
    /// History is not mutated; only the pointer moves. Whose turn it
    /// is follows the pointer, so jumping to an even index hands the
    /// move back to X.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] when `index` is past the end
    /// of history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.history.len() {
            return Err(GameError::OutOfRange {
                index,
                len: self.history.len(),
            });
        }
        self.current_move = index;
        Ok(())
    }

    /// Sets a player's display name. Empty strings are allowed; the
    /// status line then falls back to the marker letter.
    #[instrument(skip(self, name))]
    pub fn rename_player(&mut self, marker: Marker, name: impl Into<String>) {
        self.profiles.get_mut(marker).set_name(name);
    }

    /// Sets a player's marker color. Any string is accepted and
    /// forwarded verbatim to the presentation layer.
    #[instrument(skip(self, color))]
    pub fn recolor_player(&mut self, marker: Marker, color: impl Into<String>) {
        self.profiles.get_mut(marker).set_color(color);
    }

    /// Derives the game status from the current board.
    pub fn status(&self) -> GameStatus {
        match win::winner(self.board()) {
            Some(marker) => GameStatus::Won(marker),
            None => GameStatus::NextTurn(self.to_move()),
        }
    }

    /// Renders the status line: `Winner: X` or `Next player: <name>`,
    /// where the name falls back to the marker letter when unset.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Won(marker) => format!("Winner: {}", marker.letter()),
            GameStatus::NextTurn(marker) => format!(
                "Next player: {}",
                self.profiles.get(marker).resolved_name(marker)
            ),
        }
    }

    /// Whether the current board is a draw (full, no winner).
    ///
    /// Standalone query: [`Game::status`] and the status line never
    /// report draws.
    pub fn is_draw(&self) -> bool {
        draw::is_draw(self.board())
    }

    /// Dispatches a presentation-layer event to the matching operation.
    ///
    /// # Errors
    ///
    /// Only [`Event::HistoryClick`] can fail, with
    /// [`GameError::OutOfRange`]; every other event is total.
    #[instrument(skip(self), fields(event = %event))]
    pub fn handle(&mut self, event: Event) -> Result<(), GameError> {
        match event {
            Event::CellClick(cell) => {
                self.play(cell);
                Ok(())
            }
            Event::HistoryClick(index) => self.jump_to(index),
            Event::NameChange(marker, name) => {
                self.rename_player(marker, name);
                Ok(())
            }
            Event::ColorChange(marker, color) => {
                self.recolor_player(marker, color);
                Ok(())
            }
            Event::FormSubmit => Ok(()),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
