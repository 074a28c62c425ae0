//! Engine facade: validates the request, runs the configured search and
//! reports what it found.

use super::{GameState, Role, SearchResult, SearchStats, alpha_beta, minimax};
use crate::game::Outcome;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Search algorithm.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchMode {
    /// Visit every line of play.
    #[default]
    Exhaustive,
    /// Skip lines that cannot change the result. Same answer, fewer nodes.
    AlphaBeta,
}

/// Why no move could be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// The game is already over; the caller should not have asked.
    #[display("Cannot choose a move: the game is already over ({outcome})")]
    InvalidInvocation {
        /// How the game ended.
        outcome: Outcome,
    },

    /// The position claims to be ongoing but offers no legal move.
    #[display("Position is ongoing but has no legal move")]
    NoLegalMove,
}

/// Result of a search together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchReport {
    /// Side the search played for.
    role: Role,
    /// Algorithm used.
    mode: SearchMode,
    /// Value and chosen move.
    result: SearchResult,
    /// Work performed.
    stats: SearchStats,
}

/// Picks optimal moves.
///
/// The engine holds no position state. Every call searches from the board
/// it is given and never modifies it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    mode: SearchMode,
}

impl Engine {
    /// Creates an engine using `mode`.
    pub fn new(mode: SearchMode) -> Self {
        Self { mode }
    }

    /// Returns the search algorithm.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Searches `board` for `role`.
    #[instrument(skip(self, board), fields(mode = %self.mode))]
    pub fn search<G: GameState>(&self, board: &G, role: Role) -> Result<SearchReport, SearchError> {
        let outcome = board.outcome();
        if outcome.is_terminal() {
            warn!(%outcome, "Move requested on a finished game");
            return Err(SearchError::InvalidInvocation { outcome });
        }

        let (result, stats) = match self.mode {
            SearchMode::Exhaustive => minimax::search(board, role),
            SearchMode::AlphaBeta => alpha_beta::search(board, role),
        };

        debug!(
            score = %result.score,
            best_move = ?result.best_move,
            nodes = stats.nodes,
            terminal_nodes = stats.terminal_nodes,
            cutoffs = stats.cutoffs,
            "Search complete"
        );

        Ok(SearchReport {
            role,
            mode: self.mode,
            result,
            stats,
        })
    }

    /// Returns the optimal move index for `role`.
    #[instrument(skip(self, board))]
    pub fn choose_move<G: GameState>(&self, board: &G, role: Role) -> Result<usize, SearchError> {
        self.search(board, role)?
            .result
            .best_move
            .ok_or(SearchError::NoLegalMove)
    }
}

/// Returns the optimal move index for `role` using exhaustive search.
///
/// Fails with [`SearchError::InvalidInvocation`] when the game is over.
pub fn choose_move<G: GameState>(board: &G, role: Role) -> Result<usize, SearchError> {
    Engine::default().choose_move(board, role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Mark, MoveError};
    use crate::search::Score;
    use std::str::FromStr;

    #[test]
    fn test_finished_game_is_rejected() {
        let board: Board = "XOX XXO OXO".parse().unwrap();
        assert_eq!(
            choose_move(&board, Role::Maximizing),
            Err(SearchError::InvalidInvocation {
                outcome: Outcome::Draw
            })
        );

        let won: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(
            Engine::new(SearchMode::AlphaBeta).choose_move(&won, Role::Minimizing),
            Err(SearchError::InvalidInvocation {
                outcome: Outcome::Win(Mark::X)
            })
        );
    }

    #[test]
    fn test_report_carries_role_and_mode() {
        let engine = Engine::new(SearchMode::AlphaBeta);
        let board: Board = "XX. .O. ..O".parse().unwrap();
        let report = engine.search(&board, Role::Maximizing).unwrap();

        assert_eq!(*report.role(), Role::Maximizing);
        assert_eq!(*report.mode(), SearchMode::AlphaBeta);
        assert_eq!(report.result().score, Score::MaximizerWins);
        assert_eq!(report.result().best_move, Some(2));
        assert!(report.stats().nodes > 1);
    }

    #[test]
    fn test_search_mode_names() {
        assert_eq!(SearchMode::from_str("alpha-beta"), Ok(SearchMode::AlphaBeta));
        assert_eq!(SearchMode::Exhaustive.to_string(), "exhaustive");
    }

    /// A game that claims to continue but offers nothing to play.
    #[derive(Clone)]
    struct Stuck;

    impl GameState for Stuck {
        fn outcome(&self) -> Outcome {
            Outcome::Ongoing
        }

        fn legal_moves(&self) -> Vec<usize> {
            Vec::new()
        }

        fn place(&mut self, index: usize, _mark: Mark) -> Result<(), MoveError> {
            Err(MoveError::OutOfRange { index, cells: 0 })
        }
    }

    #[test]
    fn test_ongoing_without_moves() {
        assert_eq!(
            choose_move(&Stuck, Role::Maximizing),
            Err(SearchError::NoLegalMove)
        );
    }
}
