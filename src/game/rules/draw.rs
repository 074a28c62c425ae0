//! Draw detection.

use super::super::Board;

/// Checks if the board is full (no empty cell remains).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}
