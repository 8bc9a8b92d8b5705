//! Render model for the presentation layer.
//!
//! The view layer is an external collaborator; this module gives it
//! everything it needs as plain data, derived from a [`Game`] on every
//! render. Nothing here is cached or mutated.

use crate::game::Game;
use crate::rules::win;
use crate::types::{Marker, Square};
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::instrument;

/// One clickable board cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Cell index (0-8), fed back as `Event::CellClick`.
    pub index: usize,
    /// The marker letter to show, or `None` for an empty cell.
    pub label: Option<&'static str>,
    /// The occupying player's color; empty cells carry none.
    pub color: Option<String>,
    /// Whether this cell belongs to the winning line and should be
    /// emphasized.
    pub winning: bool,
}

/// One entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History index, fed back as `Event::HistoryClick`.
    pub index: usize,
    /// Button label: "Go to game start" for entry 0, "Go to move #i"
    /// for the rest.
    pub label: String,
}

/// Form bindings for one player's profile inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileBinding {
    /// The marker this binding edits.
    pub marker: Marker,
    /// Current value of the name text input.
    pub name: String,
    /// Current value of the color input.
    pub color: String,
    /// Label for the color input, e.g. "Ann Color:" or "X Color:".
    pub color_label: String,
}

/// Everything the presentation layer renders for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// The 9 board cells in row-major order.
    pub cells: [CellView; 9],
    /// The status line above the board.
    pub status: String,
    /// The move list, one entry per history snapshot.
    pub moves: Vec<MoveEntry>,
    /// Profile form bindings, X then O.
    pub profiles: Vec<ProfileBinding>,
}

impl GameView {
    /// Builds the render model from the current game state.
    #[instrument(skip(game))]
    pub fn from_game(game: &Game) -> Self {
        let board = game.board();
        let winning = win::winning_line(board);

        let cells = std::array::from_fn(|index| {
            let (label, color) = match board.get(index) {
                Some(Square::Occupied(marker)) => (
                    Some(marker.letter()),
                    Some(game.profiles().get(marker).color().to_string()),
                ),
                _ => (None, None),
            };
            CellView {
                index,
                label,
                color,
                winning: winning.is_some_and(|line| line.contains(&index)),
            }
        });

        let moves = (0..game.history().len())
            .map(|index| MoveEntry {
                index,
                label: if index == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{index}")
                },
            })
            .collect();

        let profiles = Marker::iter()
            .map(|marker| {
                let profile = game.profiles().get(marker);
                ProfileBinding {
                    marker,
                    name: profile.name().to_string(),
                    color: profile.color().to_string(),
                    color_label: format!("{} Color:", profile.resolved_name(marker)),
                }
            })
            .collect();

        Self {
            cells,
            status: game.status_line(),
            moves,
            profiles,
        }
    }
}
