//! Adversarial search.
//!
//! The engine is written against [`GameState`], so any deterministic,
//! perfect-information two-player game whose moves are cell indices can be
//! searched. [`Board`] is the implementation shipped here.
//!
//! Scores are always from the maximizing side's point of view. The
//! maximizing role plays [`Mark::X`], the mark that moves first.

pub mod alpha_beta;
mod engine;
pub mod minimax;

pub use engine::{Engine, SearchError, SearchMode, SearchReport, choose_move};
pub use minimax::{max_value, min_value};

use crate::game::{Board, Mark, MoveError, Outcome};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tracing::warn;

/// A position the search can explore.
///
/// Implementations must be value types: `clone` yields an independent copy
/// and `place` only ever touches `self`. Every `place` must consume a move,
/// so search depth strictly decreases and the search terminates.
pub trait GameState: Clone {
    /// Classifies the position.
    fn outcome(&self) -> Outcome;

    /// Legal move indices, in the order the search should try them.
    fn legal_moves(&self) -> Vec<usize>;

    /// Plays `mark` at `index`.
    fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError>;
}

impl GameState for Board {
    fn outcome(&self) -> Outcome {
        Board::outcome(self)
    }

    fn legal_moves(&self) -> Vec<usize> {
        Board::legal_moves(self)
    }

    fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        Board::place(self, index, mark)
    }
}

/// Which objective a side pursues.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Wants the highest score; plays X.
    #[strum(to_string = "maximizing", serialize = "max")]
    Maximizing,
    /// Wants the lowest score; plays O.
    #[strum(to_string = "minimizing", serialize = "min")]
    Minimizing,
}

impl Role {
    /// The mark this role places.
    pub fn mark(self) -> Mark {
        match self {
            Role::Maximizing => Mark::X,
            Role::Minimizing => Mark::O,
        }
    }

    /// The role that plays `mark`.
    pub fn for_mark(mark: Mark) -> Self {
        match mark {
            Mark::X => Role::Maximizing,
            Mark::O => Role::Minimizing,
        }
    }

    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Role::Maximizing => Role::Minimizing,
            Role::Minimizing => Role::Maximizing,
        }
    }

    /// Returns true if this role strictly prefers `candidate` over `incumbent`.
    pub fn prefers(self, candidate: Score, incumbent: Score) -> bool {
        match self {
            Role::Maximizing => candidate > incumbent,
            Role::Minimizing => candidate < incumbent,
        }
    }
}

/// Game-theoretic value of a position, ordered worst to best for the
/// maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Score {
    /// The minimizing side wins (-1).
    MinimizerWins,
    /// Neither side can force a win (0).
    Draw,
    /// The maximizing side wins (+1).
    MaximizerWins,
}

impl Score {
    /// Numeric value: -1, 0 or +1.
    pub fn value(self) -> i8 {
        match self {
            Score::MinimizerWins => -1,
            Score::Draw => 0,
            Score::MaximizerWins => 1,
        }
    }

    /// The score of a game won by `role`.
    pub fn won_by(role: Role) -> Self {
        match role {
            Role::Maximizing => Score::MaximizerWins,
            Role::Minimizing => Score::MinimizerWins,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value().cmp(&0) {
            Ordering::Greater => write!(f, "+{}", self.value()),
            Ordering::Equal | Ordering::Less => write!(f, "{}", self.value()),
        }
    }
}

/// Value of a position and the move achieving it.
///
/// `best_move` is `None` only when the position was already terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// Value from the maximizing side's point of view.
    pub score: Score,
    /// Lowest-index move achieving `score`.
    pub best_move: Option<usize>,
}

impl SearchResult {
    /// A terminal position: a value and nothing to play.
    pub fn terminal(score: Score) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Work done by one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root included.
    pub nodes: u64,
    /// Visited positions that were already won or drawn.
    pub terminal_nodes: u64,
    /// Move loops abandoned early by pruning.
    pub cutoffs: u64,
}

/// Clones `board` and plays `index` for `role` on the copy.
///
/// The caller's board is never touched, so sibling branches cannot see each
/// other's moves.
fn successor<G: GameState>(board: &G, index: usize, role: Role) -> Option<G> {
    let mut child = board.clone();
    match child.place(index, role.mark()) {
        Ok(()) => Some(child),
        Err(err) => {
            warn!(index, %err, "Listed move rejected by the position, skipping");
            None
        }
    }
}
