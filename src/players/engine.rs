//! Engine-driven player.

use super::Player;
use crate::game::Board;
use crate::search::{Engine, Role};
use anyhow::Result;
use tracing::{debug, info};

/// Plays perfectly for a fixed role.
#[derive(Debug, Clone)]
pub struct EnginePlayer {
    name: String,
    role: Role,
    engine: Engine,
}

impl EnginePlayer {
    /// Creates a player for `role`; the first player is maximizing.
    pub fn new(name: impl Into<String>, role: Role, engine: Engine) -> Self {
        Self {
            name: name.into(),
            role,
            engine,
        }
    }

    /// Returns the role this player searches for.
    pub fn role(&self) -> Role {
        self.role
    }
}

impl Player for EnginePlayer {
    fn get_move(&mut self, board: &Board) -> Result<usize> {
        info!(player = %self.name, role = %self.role, "Engine is thinking");

        let report = self.engine.search(board, self.role)?;
        let index = report
            .result()
            .best_move
            .ok_or_else(|| anyhow::anyhow!("Engine found no move for {}", self.name))?;

        debug!(
            player = %self.name,
            position = index + 1,
            score = %report.result().score,
            nodes = report.stats().nodes,
            "Engine chose position"
        );
        Ok(index)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automated(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchMode;

    #[test]
    fn test_engine_player_takes_the_win() {
        let mut player = EnginePlayer::new("AI", Role::Minimizing, Engine::default());
        let board: Board = "OO. XX. X..".parse().unwrap();
        assert_eq!(player.get_move(&board).unwrap(), 2);
        assert_eq!(player.name(), "AI");
        assert!(player.is_automated());
    }

    #[test]
    fn test_engine_player_refuses_finished_game() {
        let mut player = EnginePlayer::new("AI", Role::Maximizing, Engine::new(SearchMode::AlphaBeta));
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert!(player.get_move(&board).is_err());
    }
}
