//! Minimax engine library - perfect play for small board games
//!
//! Computes optimal moves for deterministic, perfect-information,
//! two-player games by exhaustive game-tree search. Tic-tac-toe on a 3x3
//! board is the built-in game; larger rectangular boards with any winning
//! run length use the same types.
//!
//! # Architecture
//!
//! - **Game**: cells, boards, moves and the win/draw rules
//! - **Search**: exhaustive minimax, an alpha-beta variant, and the
//!   [`Engine`] facade that validates requests
//! - **Players**: engine-driven and human-driven move sources
//! - **Orchestrator**: the turn loop that applies moves to a live board
//!
//! # Example
//!
//! ```
//! use minimax_engine::{Board, Role, Score, choose_move, max_value};
//!
//! let board: Board = "XX. .O. ..O".parse().unwrap();
//! assert_eq!(choose_move(&board, Role::Maximizing), Ok(2));
//! assert_eq!(max_value(&board).score, Score::MaximizerWins);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod game;
mod orchestrator;
mod players;
mod search;

// Crate-level exports - Game types
pub use game::{
    Board, BoardSizeMismatch, Cell, CellOccupied, Geometry, GeometryError, Line, MAX_CELLS, Mark,
    Move, MoveError, Outcome, ParseBoardError, rules,
};

// Crate-level exports - Search
pub use search::{
    Engine, GameState, Role, Score, SearchError, SearchMode, SearchReport, SearchResult,
    SearchStats, alpha_beta, choose_move, max_value, min_value, minimax,
};

// Crate-level exports - Players and orchestration
pub use orchestrator::{GameRecord, Orchestrator};
pub use players::{EnginePlayer, HumanPlayer, Player};

// Crate-level exports - Configuration
pub use config::{AppConfig, BoardSection, ConfigError, EngineSection, PlayerKind, PlayersSection};
