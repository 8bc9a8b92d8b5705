//! First-class input events for the game.
//!
//! The presentation layer forwards user input verbatim as events
//! rather than calling mutation methods directly. Events are domain
//! data: they can be logged, serialized, and replayed.

use crate::types::Marker;
use serde::{Deserialize, Serialize};

/// A user input event forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A board cell was clicked (cell index 0-8).
    CellClick(usize),
    /// A move-list entry was clicked (history index).
    HistoryClick(usize),
    /// A player's name input changed.
    NameChange(Marker, String),
    /// A player's color input changed.
    ColorChange(Marker, String),
    /// The profile form was submitted. Handled as a no-op so the
    /// page never navigates or reloads.
    FormSubmit,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::CellClick(cell) => write!(f, "cell-click({cell})"),
            Event::HistoryClick(index) => write!(f, "history-click({index})"),
            Event::NameChange(marker, name) => write!(f, "name-change({marker}, {name:?})"),
            Event::ColorChange(marker, color) => write!(f, "color-change({marker}, {color:?})"),
            Event::FormSubmit => write!(f, "form-submit"),
        }
    }
}
