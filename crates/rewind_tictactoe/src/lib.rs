//! Rewind tic-tac-toe - game logic with a time-travel move history.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`] and typed [`Position`]s
//! - **Rules**: pure win detection over the eight fixed lines
//! - **Game**: the controller owning the snapshot history and step pointer
//! - **View**: a pure render model (status line and move list) of a [`Game`]
//! - **Invariants**: checkable guarantees about a game's history
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, Player, Position};
//!
//! let mut game = Game::new();
//! game.accept_move(Position::Center);
//! assert_eq!(game.to_move(), Player::O);
//!
//! game.jump_to(0).unwrap();
//! assert_eq!(game.view().status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use game::{Game, HistoryError, IgnoreReason, Placement};
pub use position::Position;
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry, Status};
