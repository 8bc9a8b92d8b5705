//! Player-vs-player tic-tac-toe core with move history and profiles.
//!
//! # Architecture
//!
//! - **Types**: board, squares, and markers ([`Board`], [`Square`], [`Marker`])
//! - **Rules**: pure win/draw evaluation over board snapshots ([`rules`])
//! - **Game**: the controller owning history, the current-move pointer,
//!   and player profiles; all mutation goes through it ([`Game`])
//! - **View**: the render model handed to the presentation layer ([`GameView`])
//!
//! The presentation layer is an external collaborator: it renders a
//! [`GameView`] and forwards user input back as [`Event`]s.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameStatus, Marker};
//!
//! let mut game = Game::new();
//! game.rename_player(Marker::X, "Ann");
//! assert_eq!(game.status_line(), "Next player: Ann");
//!
//! // X takes the diagonal while O plays the middle row.
//! for cell in [0, 3, 4, 5, 8] {
//!     game.play(cell);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Marker::X));
//!
//! // Scrub back to the start; history is untouched.
//! game.jump_to(0).unwrap();
//! assert_eq!(game.history().len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod event;
mod game;
mod profile;
mod types;
mod view;

// Public rule and invariant modules (pure functions, independently testable)
pub mod invariants;
pub mod rules;

// Crate-level exports - Events
pub use event::Event;

// Crate-level exports - Game controller
pub use game::{Game, GameError, GameStatus};

// Crate-level exports - Profiles
pub use profile::{DEFAULT_O_COLOR, DEFAULT_X_COLOR, PlayerProfile, Profiles};

// Crate-level exports - Domain types
pub use types::{Board, Marker, Square};

// Crate-level exports - Render model
pub use view::{CellView, GameView, MoveEntry, ProfileBinding};
