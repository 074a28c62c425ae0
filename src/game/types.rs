//! Core domain types: marks, cells and the board.

use super::action::{Move, MoveError};
use super::geometry::Geometry;
use super::rules::{self, Outcome};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// One of the two marks a player can place.
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
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Character used in board text.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A single cell: empty, or holding a mark for the rest of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns true if no mark has been placed.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Places a mark. An occupied cell is left untouched.
    pub fn set(&mut self, mark: Mark) -> Result<(), CellOccupied> {
        match *self {
            Cell::Empty => {
                *self = Cell::Occupied(mark);
                Ok(())
            }
            Cell::Occupied(existing) => Err(CellOccupied { existing }),
        }
    }
}

/// Attempted to overwrite an occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cell already holds {existing}")]
pub struct CellOccupied {
    /// The mark already in the cell.
    pub existing: Mark,
}

/// A board: an ordered, row-major sequence of cells.
///
/// Cloning produces a fully independent copy, which is what the search
/// relies on when it explores sibling moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    geometry: Geometry,
    cells: Vec<Cell>,
}

/// Unchecked form, validated on deserialization.
#[derive(Deserialize)]
struct RawBoard {
    geometry: Geometry,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardSizeMismatch;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = raw.geometry.cell_count();
        if raw.cells.len() != expected {
            return Err(BoardSizeMismatch {
                expected,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            geometry: raw.geometry,
            cells: raw.cells,
        })
    }
}

/// Cell list whose length disagrees with the board geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Board needs {expected} cells but {found} were given")]
pub struct BoardSizeMismatch {
    /// Cells the geometry defines.
    pub expected: usize,
    /// Cells supplied.
    pub found: usize,
}

impl Board {
    /// Creates an empty 3x3 board.
    pub fn new() -> Self {
        Self::with_geometry(Geometry::STANDARD)
    }

    /// Creates an empty board of the given shape.
    #[instrument]
    pub fn with_geometry(geometry: Geometry) -> Self {
        Self {
            geometry,
            cells: vec![Cell::Empty; geometry.cell_count()],
        }
    }

    /// Returns the board shape.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Returns the cell at `index`, if on the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns true if `index` is on the board and its cell is empty.
    pub fn is_legal(&self, index: usize) -> bool {
        self.get(index).is_some_and(Cell::is_empty)
    }

    /// All legal indices, ascending.
    ///
    /// The order is part of the contract: search explores moves in this
    /// order and keeps the first of equally good moves.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Places `mark` at `index`. On error the board is unchanged.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        let cells = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::OutOfRange { index, cells })?;
        cell.set(mark)
            .map_err(|occupied| MoveError::Occupied {
                index,
                mark: occupied.existing,
            })
    }

    /// Applies a move (see [`Board::place`]).
    pub fn apply(&mut self, mov: Move) -> Result<(), MoveError> {
        self.place(mov.index(), mov.mark())
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the mark owning a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(self)
    }

    /// Classifies the position (win, draw or ongoing).
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// The mark due to move under strict alternation with X first.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders rows separated by rule lines; empty cells show their 1-based
/// number, matching what a human types to play there.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.geometry.cols();
        let width = self.cells.len().to_string().len();
        let rule = vec!["-".repeat(width); cols].join("+");

        for (row, chunk) in self.cells.chunks(cols).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{rule}")?;
            }
            for (col, cell) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                match cell.mark() {
                    Some(mark) => write!(f, "{:<width$}", mark.symbol())?,
                    None => write!(f, "{:<width$}", row * cols + col + 1)?,
                }
            }
        }
        Ok(())
    }
}

/// Parses a square board from `X`, `O` and `.`, `_` or `-` for empty cells.
///
/// Whitespace is ignored, so `"XX. .O. ..O"` is a 3x3 board. The run length
/// equals the side length.
impl FromStr for Board {
    type Err = ParseBoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(position, symbol)| match symbol {
                'X' | 'x' => Ok(Cell::Occupied(Mark::X)),
                'O' | 'o' => Ok(Cell::Occupied(Mark::O)),
                '.' | '_' | '-' => Ok(Cell::Empty),
                _ => Err(ParseBoardError::UnknownSymbol { symbol, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let side = (1..=cells.len())
            .find(|side| side * side >= cells.len())
            .unwrap_or(0);
        if side == 0 || side * side != cells.len() {
            return Err(ParseBoardError::NotSquare { cells: cells.len() });
        }

        let geometry = Geometry::new(side, side, side)
            .map_err(|_| ParseBoardError::NotSquare { cells: cells.len() })?;
        Ok(Self { geometry, cells })
    }
}

/// Board text that could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// A character other than a mark or an empty-cell symbol.
    #[display("Unexpected symbol {symbol:?} at cell {position}")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Cell position (whitespace excluded).
        position: usize,
    },

    /// The cell count is not a perfect square.
    #[display("{cells} cells do not form a square board")]
    NotSquare {
        /// Number of cells read.
        cells: usize,
    },
}
