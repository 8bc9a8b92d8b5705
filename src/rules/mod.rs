//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board snapshots.
//! Rules are separated from board storage and from the game controller
//! so they can be recomputed on every read instead of cached.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{winner, winning_line};
