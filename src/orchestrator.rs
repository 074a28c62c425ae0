//! Game orchestration between two players.

use crate::game::{Board, Mark, Move, Outcome};
use crate::players::Player;
use anyhow::Result;
use derive_getters::Getters;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info, instrument};

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameRecord {
    /// How the game ended.
    outcome: Outcome,
    /// Accepted moves in order.
    moves: Vec<Move>,
    /// Final position.
    board: Board,
}

/// Runs a game between two players, X first.
///
/// The orchestrator owns the live board. Players only ever see it by
/// shared reference; every proposed move is validated here.
pub struct Orchestrator {
    board: Board,
    to_move: Mark,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    moves: Vec<Move>,
}

impl Orchestrator {
    /// Creates an orchestrator on an empty 3x3 board.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self::with_board(Board::new(), player_x, player_o)
    }

    /// Creates an orchestrator continuing from `board`.
    ///
    /// The side to move is inferred from the mark counts.
    pub fn with_board(board: Board, player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        let to_move = board.next_mark();
        Self {
            board,
            to_move,
            player_x,
            player_o,
            moves: Vec::new(),
        }
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until the game ends, rendering to `out`.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self, out: &mut impl Write) -> Result<GameRecord> {
        info!("Starting game");
        writeln!(out, "{}\n", self.board)?;

        loop {
            let outcome = self.board.outcome();
            if outcome.is_terminal() {
                self.announce(outcome, out)?;
                info!(%outcome, moves = self.moves.len(), "Game over");
                return Ok(GameRecord {
                    outcome,
                    moves: self.moves.clone(),
                    board: self.board.clone(),
                });
            }

            let mark = self.to_move;
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), %mark, "Waiting for move");
            if player.is_automated() {
                writeln!(out, "AI {} is thinking...", player.name())?;
            }
            let index = player.get_move(&self.board)?;

            if let Err(err) = self.board.place(index, mark) {
                debug!(player = %player.name(), %err, "Rejected move");
                writeln!(out, "Invalid move. Try again.")?;
                continue;
            }

            let mov = Move::new(mark, index);
            info!(player = %player.name(), %mov, "Move made");
            if player.is_automated() {
                writeln!(out, "AI {} has chosen: {}", player.name(), index + 1)?;
            }
            self.moves.push(mov);
            writeln!(out, "{}\n", self.board)?;
            self.to_move = mark.opponent();
        }
    }

    fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.player_x.name(),
            Mark::O => self.player_o.name(),
        }
    }

    fn announce(&self, outcome: Outcome, out: &mut impl Write) -> Result<()> {
        match outcome {
            Outcome::Win(mark) => writeln!(out, "{} wins!", self.name_of(mark))?,
            Outcome::Draw => writeln!(out, "It's a draw!")?,
            Outcome::Ongoing => {}
        }
        Ok(())
    }
}
