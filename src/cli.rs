//! Command-line interface for minimax_engine.

use clap::{Parser, Subcommand};
use minimax_engine::{PlayerKind, Role, SearchMode};
use std::path::PathBuf;

/// Minimax engine - perfect play for small board games
#[derive(Parser, Debug)]
#[command(name = "minimax_engine")]
#[command(about = "Perfect-play tic-tac-toe by exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Search algorithm (overrides the config file)
    #[arg(long, global = true)]
    pub search: Option<SearchMode>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Who plays X (overrides the config file)
        #[arg(long)]
        x: Option<PlayerKind>,

        /// Who plays O (overrides the config file)
        #[arg(long)]
        o: Option<PlayerKind>,
    },

    /// Print the optimal move for a position
    BestMove {
        /// Board text, e.g. "XX. .O. ..O" (X, O, and . for empty)
        #[arg(long)]
        board: String,

        /// Side to move: max (X) or min (O)
        #[arg(long, default_value = "max")]
        role: Role,

        /// Emit the full search report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides
    SelfPlay {
        /// Emit the game record as JSON
        #[arg(long)]
        json: bool,
    },
}
