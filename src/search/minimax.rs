//! Exhaustive minimax.
//!
//! `max_value` and `min_value` recurse into each other until every line of
//! play reaches a terminal position. Each child is a fresh clone of its
//! parent, so backtracking is just dropping the clone.

use super::{GameState, Role, Score, SearchResult, SearchStats, successor};
use crate::game::Outcome;

/// Value and best move for the maximizing side to play.
///
/// A position that is already won is scored as lost for the side about to
/// move: the win belongs to whoever moved last.
pub fn max_value<G: GameState>(board: &G) -> SearchResult {
    search(board, Role::Maximizing).0
}

/// Value and best move for the minimizing side to play.
pub fn min_value<G: GameState>(board: &G) -> SearchResult {
    search(board, Role::Minimizing).0
}

/// Searches `board` with `to_move` on turn, returning the result and the
/// work it took.
pub fn search<G: GameState>(board: &G, to_move: Role) -> (SearchResult, SearchStats) {
    let mut minimax = Minimax::default();
    let result = minimax.value(board, to_move);
    (result, minimax.stats)
}

#[derive(Debug, Default)]
struct Minimax {
    stats: SearchStats,
}

impl Minimax {
    fn value<G: GameState>(&mut self, board: &G, to_move: Role) -> SearchResult {
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
            let reply = self.value(&child, to_move.opponent());
            // Strict improvement only: ties keep the earlier, lower index.
            if best.is_none_or(|(score, _)| to_move.prefers(reply.score, score)) {
                best = Some((reply.score, index));
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

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_a_draw_opening_in_the_corner() {
        let result = max_value(&Board::new());
        assert_eq!(result.score, Score::Draw);
        assert_eq!(result.best_move, Some(0));
    }

    #[test]
    fn test_max_completes_row() {
        let result = max_value(&board("XX. .O. ..O"));
        assert_eq!(result.score, Score::MaximizerWins);
        assert_eq!(result.best_move, Some(2));
    }

    #[test]
    fn test_min_completes_row() {
        let result = min_value(&board("OO. XX. X.."));
        assert_eq!(result.score, Score::MinimizerWins);
        assert_eq!(result.best_move, Some(2));
    }

    #[test]
    fn test_max_blocks_then_wins() {
        // O threatens 2; taking it also opens the 2-4-6 diagonal for X.
        let result = max_value(&board("OO. .X. X.."));
        assert_eq!(result.score, Score::MaximizerWins);
        assert_eq!(result.best_move, Some(2));
    }

    #[test]
    fn test_terminal_positions() {
        // Someone already won: lost for whoever is to move now.
        let won = board("XXX OO. ...");
        assert_eq!(max_value(&won), SearchResult::terminal(Score::MinimizerWins));
        assert_eq!(min_value(&won), SearchResult::terminal(Score::MaximizerWins));

        let drawn = board("XOX XXO OXO");
        assert_eq!(max_value(&drawn), SearchResult::terminal(Score::Draw));
        assert_eq!(min_value(&drawn), SearchResult::terminal(Score::Draw));
    }

    #[test]
    fn test_search_leaves_input_untouched() {
        let original = board("X.. .O. ...");
        let copy = original.clone();
        let _ = max_value(&original);
        assert_eq!(original, copy);
    }

    #[test]
    fn test_full_tree_node_count() {
        // The complete tic-tac-toe game tree, stopping at wins and draws.
        let (_, stats) = search(&Board::new(), Role::Maximizing);
        assert_eq!(stats.nodes, 549_946);
        assert_eq!(stats.terminal_nodes, 255_168);
        assert_eq!(stats.cutoffs, 0);
    }
}
