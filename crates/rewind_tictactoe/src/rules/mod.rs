//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the history controller so they can be evaluated against any snapshot.

pub mod win;

pub use win::{check_winner, WINNING_LINES};
