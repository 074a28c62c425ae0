//! Moves and the errors raised when a move cannot be applied.

use super::types::Mark;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A mark placed at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    mark: Mark,
    index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, index: usize) -> Self {
        Self { mark, index }
    }

    /// Returns the mark being placed.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the target index.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index + 1)
    }
}

/// An illegal placement. The board is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The index is not on the board.
    #[display("Position {index} is off the board (valid: 0..{cells})")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// The cell already holds a mark.
    #[display("Position {index} is already occupied by {mark}")]
    Occupied {
        /// Requested index.
        index: usize,
        /// The mark already there.
        mark: Mark,
    },
}
