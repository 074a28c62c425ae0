//! Game rules.
//!
//! Pure functions over a [`Board`](super::Board): who has won, whether the
//! board is full, and the combined classification the search uses to decide
//! when a position is terminal.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::{Outcome, evaluate};
pub use win::winner;
