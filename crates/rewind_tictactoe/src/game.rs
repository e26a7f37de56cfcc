//! Game controller: snapshot history with a movable step pointer.
//!
//! Every accepted move appends a fresh [`Board`] snapshot. Jumping back only
//! moves the step pointer; the "future" entries are discarded lazily, when
//! the next move is made from the rewound position.

use super::rules::check_winner;
use super::view::GameView;
use super::{Board, Player, Position};
use tracing::{debug, instrument};

/// Why a click on a cell did not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The displayed board already has a winner.
    #[display("game already won by {}", _0)]
    GameOver(Player),
    /// The clicked square is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),
}

/// Outcome of [`Game::accept_move`].
///
/// Ignored clicks leave the game untouched; the front end drops them silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A mark was placed and a new history entry appended.
    Placed {
        /// The player whose mark was placed.
        player: Player,
        /// Where the mark was placed.
        position: Position,
        /// Index of the new history entry (now the current step).
        step: usize,
    },
    /// The click was a no-op.
    Ignored(IgnoreReason),
}

impl Placement {
    /// Returns true if a new history entry was appended.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

/// Errors from navigating the history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The requested step does not exist.
    #[display("step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of history entries.
        len: usize,
    },
}

/// Tic-tac-toe game with a rewindable history of board snapshots.
///
/// The player to move is always derived from the parity of the current step,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Board snapshots; entry 0 is the empty board.
    pub(crate) history: Vec<Board>,
    /// Index of the displayed snapshot. Always `< history.len()`.
    pub(crate) step: usize,
}

impl Game {
    /// Creates a new game: one empty board, step 0, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
        }
    }

    /// Returns every snapshot, including entries past the current step.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the current step index.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the board at the current step.
    pub fn current(&self) -> &Board {
        &self.history[self.step]
    }

    /// Returns true when X moves next (the current step is even).
    pub fn x_is_next(&self) -> bool {
        self.step % 2 == 0
    }

    /// Returns the player to move at the current step.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Returns the winner of the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current())
    }

    /// Places the current player's mark at `position`.
    ///
    /// A no-op when the current board is already won or the square is taken.
    /// Otherwise any entries after the current step are discarded, the new
    /// board is appended, and the step advances to it.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn accept_move(&mut self, position: Position) -> Placement {
        if let Some(winner) = self.winner() {
            debug!(%winner, "Ignoring click on finished board");
            return Placement::Ignored(IgnoreReason::GameOver(winner));
        }

        let current = *self.current();
        if !current.is_empty(position) {
            debug!("Ignoring click on occupied square");
            return Placement::Ignored(IgnoreReason::SquareOccupied(position));
        }

        let player = self.to_move();
        let discarded = self.history.len() - (self.step + 1);
        self.history.truncate(self.step + 1);
        self.history.push(current.with_mark(position, player));
        self.step = self.history.len() - 1;

        debug!(
            discarded,
            new_step = self.step,
            board = %self.current(),
            "Move accepted"
        );

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(self);

        Placement::Placed {
            player,
            position,
            step: self.step,
        }
    }

    /// Displays the snapshot at `step` without discarding later entries.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if `step` is not a history
    /// index; the game is left unchanged.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.history.len() {
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        self.step = step;
        debug!(to_move = %self.to_move(), "Jumped to step");
        Ok(())
    }

    /// Builds the render model for the current state.
    pub fn view(&self) -> GameView {
        GameView::of(self)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
