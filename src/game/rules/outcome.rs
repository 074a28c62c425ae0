//! Position classification used by the search and the game loop.

use super::super::{Board, Mark};
use super::{is_full, winner};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a position stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Win(Mark),
    /// The board is full and nobody won.
    Draw,
    /// Moves remain and nobody has won yet.
    Ongoing,
}

impl Outcome {
    /// Returns true for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::Draw | Outcome::Ongoing => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(mark) => write!(f, "{mark} wins"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Ongoing => write!(f, "In progress"),
        }
    }
}

/// Classifies a board. A win is reported even when empty cells remain.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = winner(board) {
        Outcome::Win(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
