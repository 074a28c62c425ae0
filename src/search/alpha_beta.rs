//! Minimax with alpha-beta pruning.
//!
//! Moves are tried in the same order and a candidate only replaces the
//! current best on strict improvement, so at the root this returns the same
//! score and move as [`minimax`](super::minimax). Inner nodes may return a
//! bound instead of an exact value; a bound never strictly beats the
//! incumbent at its parent, so it is never chosen.

use super::{GameState, Role, Score, SearchResult, SearchStats, successor};
use crate::game::Outcome;

/// Searches `board` with `to_move` on turn inside the full score window.
pub fn search<G: GameState>(board: &G, to_move: Role) -> (SearchResult, SearchStats) {
    let mut pruned = AlphaBeta::default();
    let result = pruned.value(board, to_move, Score::MinimizerWins, Score::MaximizerWins);
    (result, pruned.stats)
}

#[derive(Debug, Default)]
struct AlphaBeta {
    stats: SearchStats,
}

impl AlphaBeta {
    /// `alpha < beta` holds on entry; a score at or outside the window
    /// cannot change the parent's choice.
    fn value<G: GameState>(
        &mut self,
        board: &G,
        to_move: Role,
        mut alpha: Score,
        mut beta: Score,
    ) -> SearchResult {
        self.stats.nodes += 1;

        match board.outcome() {
            Outcome::Win(_) => return self.leaf(Score::won_by(to_move.opponent())),
            Outcome::Draw => return self.leaf(Score::Draw),
            Outcome::Ongoing => {}
        }

        let mut best: Option<(Score, usize)> = None;
        for index in board.legal_moves() {
            let Some(child) = successor(board, index, to_move) else {
                continue;
            };
            let reply = self.value(&child, to_move.opponent(), alpha, beta).score;
            if best.is_none_or(|(score, _)| to_move.prefers(reply, score)) {
                best = Some((reply, index));
            }

            let cutoff = match to_move {
                Role::Maximizing => {
                    alpha = alpha.max(reply);
                    reply >= beta
                }
                Role::Minimizing => {
                    beta = beta.min(reply);
                    reply <= alpha
                }
            };
            if cutoff {
                self.stats.cutoffs += 1;
                break;
            }
        }

        match best {
            Some((score, index)) => SearchResult {
                score,
                best_move: Some(index),
            },
            None => self.leaf(Score::Draw),
        }
    }

    fn leaf(&mut self, score: Score) -> SearchResult {
        self.stats.terminal_nodes += 1;
        SearchResult::terminal(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Board;
    use crate::search::minimax;

    #[test]
    fn test_matches_exhaustive_from_empty_board() {
        let board = Board::new();
        let (pruned, pruned_stats) = search(&board, Role::Maximizing);
        let (full, full_stats) = minimax::search(&board, Role::Maximizing);

        assert_eq!(pruned, full);
        assert!(pruned_stats.nodes < full_stats.nodes);
        assert!(pruned_stats.cutoffs > 0);
    }

    #[test]
    fn test_immediate_win() {
        let board: Board = "XX. .O. ..O".parse().unwrap();
        let (result, _) = search(&board, Role::Maximizing);
        assert_eq!(result.score, Score::MaximizerWins);
        assert_eq!(result.best_move, Some(2));
    }

    #[test]
    fn test_terminal_root() {
        let board: Board = "OOO XX. X..".parse().unwrap();
        let (result, stats) = search(&board, Role::Maximizing);
        assert_eq!(result, SearchResult::terminal(Score::MinimizerWins));
        assert_eq!(stats.nodes, 1);
    }
}
