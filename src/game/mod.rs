//! Board game domain: cells, board, geometry, moves and rules.

mod action;
mod geometry;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use geometry::{Geometry, GeometryError, Line, MAX_CELLS};
pub use rules::Outcome;
pub use types::{Board, BoardSizeMismatch, Cell, CellOccupied, Mark, ParseBoardError};
