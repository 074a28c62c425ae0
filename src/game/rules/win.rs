//! Win detection.

use super::super::{Board, Mark};

/// Returns the mark that owns every cell of some line, if any.
///
/// Lines come from the board's geometry: for 3x3 these are the three rows,
/// three columns and two diagonals. Boards with two winners are not
/// reachable by legal play; the first line found decides.
pub fn winner(board: &Board) -> Option<Mark> {
    board.geometry().lines().find_map(|line| {
        let mut indices = line.indices();
        let first = board.get(indices.next()?)?.mark()?;
        indices
            .all(|index| board.get(index).and_then(|cell| cell.mark()) == Some(first))
            .then_some(first)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Geometry;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO XO. O..".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX. .O. ..O".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_alone() {
        for mark in [Mark::X, Mark::O] {
            for line in Geometry::STANDARD.lines() {
                let mut board = Board::new();
                for index in line.indices() {
                    board.place(index, mark).unwrap();
                }
                assert_eq!(winner(&board), Some(mark), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_run_shorter_than_side() {
        // Four columns, three in a row wins.
        let mut board = Board::with_geometry(Geometry::new(1, 4, 3).unwrap());
        for index in 1..4 {
            board.place(index, Mark::O).unwrap();
        }
        assert_eq!(winner(&board), Some(Mark::O));
    }
}
