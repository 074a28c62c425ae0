//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;

use crate::game::Board;
use anyhow::Result;

/// Something that picks moves for one side of a game.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Returns a board index. The game loop validates it and asks again if
    /// it is illegal.
    fn get_move(&mut self, board: &Board) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns true if moves come from search rather than a person.
    ///
    /// The game loop announces automated players' moves.
    fn is_automated(&self) -> bool {
        false
    }
}
