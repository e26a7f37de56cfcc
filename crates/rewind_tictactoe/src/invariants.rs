//! First-class invariants over a game's history.
//!
//! Invariants are logical properties that hold after every transition. They
//! are checked after each accepted move in debug builds and can be tested
//! independently.

use super::{Board, Game, Player, Position, Square};
use strum::IntoEnumIterator;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
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

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match <(I1, I2) as InvariantSet<S>>::check_all(state) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the step pointer addresses an existing snapshot.
pub struct StepInRange;

impl Invariant<Game> for StepInRange {
    fn holds(game: &Game) -> bool {
        game.step < game.history.len()
    }

    fn description() -> &'static str {
        "Current step indexes an existing history entry"
    }
}

/// The single square filled going from `prev` to `next`, if the boards
/// differ by exactly one newly occupied square and nothing else.
fn single_new_mark(prev: &Board, next: &Board) -> Option<(Position, Player)> {
    let mut added = None;
    for pos in Position::iter() {
        match (prev.get(pos), next.get(pos)) {
            (a, b) if a == b => {}
            (Square::Empty, Square::Occupied(player)) if added.is_none() => {
                added = Some((pos, player));
            }
            _ => return None,
        }
    }
    added
}

/// Invariant: history starts empty and each entry adds exactly one mark.
///
/// Squares are never overwritten along a history line.
pub struct MonotonicHistory;

impl Invariant<Game> for MonotonicHistory {
    fn holds(game: &Game) -> bool {
        let Some(first) = game.history.first() else {
            return false;
        };

        *first == Board::new()
            && game
                .history
                .windows(2)
                .all(|pair| single_new_mark(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "History starts empty and each entry adds exactly one mark"
    }
}

/// Invariant: marks alternate X, O, X, ... along the history.
pub struct AlternatingMarks;

impl Invariant<Game> for AlternatingMarks {
    fn holds(game: &Game) -> bool {
        game.history
            .windows(2)
            .enumerate()
            .all(|(prev_step, pair)| match single_new_mark(&pair[0], &pair[1]) {
                Some((_, player)) => player == Player::for_step(prev_step),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (StepInRange, MonotonicHistory, AlternatingMarks);

/// Checks [`GameInvariants`], logging each violation.
///
/// Panics in debug builds if any invariant fails.
pub fn assert_invariants(game: &Game) {
    if let Err(violations) = GameInvariants::check_all(game) {
        for violation in &violations {
            warn!(%violation, step = game.step, "Game invariant violated");
        }
        debug_assert!(violations.is_empty(), "Game invariants violated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_of(history: Vec<Board>, step: usize) -> Game {
        Game { history, step }
    }

    #[test]
    fn test_invariants_hold_for_new_game() {
        assert!(GameInvariants::check_all(&Game::new()).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_branching() {
        let mut game = Game::new();
        game.accept_move(Position::TopLeft);
        game.accept_move(Position::Center);
        game.jump_to(1).expect("valid step");
        game.accept_move(Position::BottomRight);

        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_overwritten_square_violates_monotonic() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let overwritten = Board::new().with_mark(Position::Center, Player::O);
        let game = game_of(vec![Board::new(), first, overwritten], 2);

        assert!(!MonotonicHistory::holds(&game));
        assert!(!AlternatingMarks::holds(&game));
        assert!(StepInRange::holds(&game));
    }

    #[test]
    fn test_wrong_first_mark_violates_alternation() {
        let game = game_of(
            vec![Board::new(), Board::new().with_mark(Position::Center, Player::O)],
            1,
        );

        assert!(MonotonicHistory::holds(&game));
        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(AlternatingMarks::description())]
        );
    }

    #[test]
    fn test_step_out_of_range_detected() {
        let game = game_of(vec![Board::new()], 1);
        type StepOnly = (StepInRange, MonotonicHistory);
        let violations = StepOnly::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, StepInRange::description());
    }
}
