//! Board shape and the winning lines it defines.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Directions a line can run in, as (row step, column step).
///
/// Order matters: rows, then columns, then diagonals.
const DIRECTIONS: [(usize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Dimensions of a rectangular board and the run length that wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGeometry")]
pub struct Geometry {
    rows: usize,
    cols: usize,
    run: usize,
}

/// Largest board accepted. Exhaustive search is hopeless long before this.
pub const MAX_CELLS: usize = 1 << 16;

impl Geometry {
    /// Classic 3x3 tic-tac-toe: three in a row wins.
    pub const STANDARD: Geometry = Geometry {
        rows: 3,
        cols: 3,
        run: 3,
    };

    /// Creates a geometry, rejecting shapes on which no line can exist.
    #[instrument]
    pub fn new(rows: usize, cols: usize, run: usize) -> Result<Self, GeometryError> {
        if rows == 0 || cols == 0 || run == 0 {
            return Err(GeometryError::Degenerate { rows, cols, run });
        }
        if rows.checked_mul(cols).is_none_or(|cells| cells > MAX_CELLS) {
            return Err(GeometryError::TooLarge { rows, cols });
        }
        if run > rows.max(cols) {
            return Err(GeometryError::RunTooLong { rows, cols, run });
        }
        Ok(Self { rows, cols, run })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Marks in a line needed to win.
    pub fn run(&self) -> usize {
        self.run
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major index of (row, col), if on the board.
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// (row, col) of a row-major index, if on the board.
    pub fn coords(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.cell_count()).then(|| (index / self.cols, index % self.cols))
    }

    /// Every winning line on the board.
    ///
    /// Lines are produced direction by direction (rows, columns, diagonals,
    /// anti-diagonals), each in row-major order of its first cell. Nothing
    /// is allocated, so the winner scan can call this at every search node.
    pub fn lines(self) -> impl Iterator<Item = Line> {
        let Geometry { rows, cols, run } = self;
        DIRECTIONS.into_iter().flat_map(move |(row_step, col_step)| {
            (0..rows * cols).filter_map(move |start| {
                let (row, col) = (start / cols, start % cols);
                let last_row = row + row_step * (run - 1);
                let last_col = col as isize + col_step * (run as isize - 1);
                if last_row >= rows || !(0..cols as isize).contains(&last_col) {
                    return None;
                }
                let stride = (row_step * cols) as isize + col_step;
                Some(Line {
                    start,
                    stride: stride as usize,
                    len: run,
                })
            })
        })
    }
}

/// Unchecked form, validated on deserialization.
#[derive(Deserialize)]
struct RawGeometry {
    rows: usize,
    cols: usize,
    run: usize,
}

impl TryFrom<RawGeometry> for Geometry {
    type Error = GeometryError;

    fn try_from(raw: RawGeometry) -> Result<Self, Self::Error> {
        Geometry::new(raw.rows, raw.cols, raw.run)
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A straight run of cells, stored as a start index and a fixed stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    start: usize,
    stride: usize,
    len: usize,
}

impl Line {
    /// Cell indices along the line, in order.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        (0..self.len).map(move |step| self.start + step * self.stride)
    }
}

/// Rejected board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GeometryError {
    /// A dimension or the run length is zero.
    #[display("Board dimensions must be non-zero (got {rows}x{cols}, run {run})")]
    Degenerate {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
        /// Requested run length.
        run: usize,
    },

    /// No straight line on the board is long enough.
    #[display("A run of {run} cannot fit on a {rows}x{cols} board")]
    RunTooLong {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
        /// Requested run length.
        run: usize,
    },

    /// More cells than [`MAX_CELLS`], or a product that overflows.
    #[display("A {rows}x{cols} board exceeds the {} cell limit", MAX_CELLS)]
    TooLarge {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(geometry: Geometry) -> Vec<Vec<usize>> {
        geometry.lines().map(|line| line.indices().collect()).collect()
    }

    #[test]
    fn test_standard_lines() {
        assert_eq!(
            collect(Geometry::STANDARD),
            vec![
                vec![0, 1, 2],
                vec![3, 4, 5],
                vec![6, 7, 8],
                vec![0, 3, 6],
                vec![1, 4, 7],
                vec![2, 5, 8],
                vec![0, 4, 8],
                vec![2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_rectangular_lines() {
        // 3 rows, 4 columns, run of 3: 2 windows per row, 4 columns,
        // 2 diagonals each way.
        let geometry = Geometry::new(3, 4, 3).unwrap();
        let lines = collect(geometry);
        assert_eq!(lines.len(), 6 + 4 + 2 + 2);
        assert!(lines.contains(&vec![1, 2, 3]));
        assert!(lines.contains(&vec![3, 7, 11]));
        assert!(lines.contains(&vec![1, 6, 11]));
        assert!(lines.contains(&vec![3, 6, 9]));
    }

    #[test]
    fn test_run_longer_than_one_side() {
        // A single row still has one horizontal line.
        let geometry = Geometry::new(1, 4, 4).unwrap();
        assert_eq!(collect(geometry), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn test_invalid_geometry() {
        assert!(matches!(
            Geometry::new(0, 3, 3),
            Err(GeometryError::Degenerate { .. })
        ));
        assert!(matches!(
            Geometry::new(3, 3, 0),
            Err(GeometryError::Degenerate { .. })
        ));
        assert!(matches!(
            Geometry::new(3, 3, 4),
            Err(GeometryError::RunTooLong { .. })
        ));
    }

    #[test]
    fn test_oversized_geometry() {
        let huge = 1usize << (usize::BITS / 2);
        assert_eq!(
            Geometry::new(huge, huge, 3),
            Err(GeometryError::TooLarge {
                rows: huge,
                cols: huge
            })
        );
        assert!(matches!(
            Geometry::new(usize::MAX, 2, 3),
            Err(GeometryError::TooLarge { .. })
        ));
        assert!(Geometry::new(1, MAX_CELLS, 3).is_ok());
        assert!(matches!(
            Geometry::new(1, MAX_CELLS + 1, 3),
            Err(GeometryError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_index_and_coords() {
        let geometry = Geometry::STANDARD;
        assert_eq!(geometry.index(1, 2), Some(5));
        assert_eq!(geometry.index(3, 0), None);
        assert_eq!(geometry.coords(7), Some((2, 1)));
        assert_eq!(geometry.coords(9), None);
    }
}
