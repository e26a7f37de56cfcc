//! Pure render model of a [`Game`].

use super::{Board, Game, Player};

/// Status line shown beside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// The displayed board has a winning line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Play continues with this player.
    ///
    /// A full board without a winner also reports this status.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One entry of the move list, bound to a history step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    step: usize,
    current: bool,
}

impl MoveEntry {
    /// History step this entry jumps to.
    pub fn step(&self) -> usize {
        self.step
    }

    /// True if this entry is the displayed step.
    pub fn is_current(&self) -> bool {
        self.current
    }

    /// Button text for this entry.
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Everything needed to draw one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    board: Board,
    winner: Option<Player>,
    status: Status,
    moves: Vec<MoveEntry>,
}

impl GameView {
    /// Computes the view for the game's current step.
    pub fn of(game: &Game) -> Self {
        let board = *game.current();
        let winner = game.winner();
        let status = match winner {
            Some(player) => Status::Winner(player),
            None => Status::NextPlayer(game.to_move()),
        };
        let moves = (0..game.history().len())
            .map(|step| MoveEntry {
                step,
                current: step == game.step(),
            })
            .collect();

        Self {
            board,
            winner,
            status,
            moves,
        }
    }

    /// Board at the displayed step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Winner of the displayed board.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Status line.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Move list, one entry per history snapshot.
    pub fn moves(&self) -> &[MoveEntry] {
        &self.moves
    }
}
