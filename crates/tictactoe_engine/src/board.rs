//! Board storage: coordinates, moves and the N×N grid.

use crate::error::{GameError, GameErrorKind};
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Zero-based board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, new)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A labeled occupancy record for one cell.
///
/// `label == None` is the unoccupied marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Row of the cell.
    pub row: usize,
    /// Column of the cell.
    pub col: usize,
    /// Label of the occupying player.
    pub label: Option<char>,
}

impl Move {
    /// Creates a move stamped with a player's label.
    pub fn new(row: usize, col: usize, label: char) -> Self {
        Self {
            row,
            col,
            label: Some(label),
        }
    }

    /// Creates the unoccupied marker for a cell.
    pub fn empty(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            label: None,
        }
    }

    /// The cell this move refers to.
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    /// Returns true if this is the unoccupied marker.
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
    }
}

/// Square grid of moves indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Move>>,
}

impl Board {
    /// Creates an empty board of the given side length.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .map(|row| (0..size).map(|col| Move::empty(row, col)).collect())
            .collect();
        Self { size, cells }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Fails with `InvalidCoordinate` when `(row, col)` is off the board.
    #[track_caller]
    pub fn check_bounds(&self, row: usize, col: usize) -> Result<(), GameError> {
        if row < self.size && col < self.size {
            Ok(())
        } else {
            Err(GameError::new(GameErrorKind::InvalidCoordinate {
                row,
                col,
                size: self.size,
            }))
        }
    }

    /// Returns the move stored at `(row, col)`.
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> Result<&Move, GameError> {
        self.check_bounds(row, col)?;
        Ok(&self.cells[row][col])
    }

    /// Returns the label at `coord`, or `None` if empty or off the board.
    pub fn label_at(&self, coord: Coord) -> Option<char> {
        self.cells
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .and_then(|mv| mv.label)
    }

    /// Stores a move in the cell it names.
    #[track_caller]
    pub(crate) fn place(&mut self, mv: Move) -> Result<(), GameError> {
        self.check_bounds(mv.row, mv.col)?;
        self.cells[mv.row][mv.col] = mv;
        Ok(())
    }

    /// Returns true if every cell holds a label.
    pub fn is_full(&self) -> bool {
        self.moves().all(|mv| !mv.is_empty())
    }

    /// Iterates all cells in row-major order.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.cells.iter().flatten()
    }

    /// Iterates the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Move]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Restores every cell to its unoccupied marker.
    #[instrument(skip(self), fields(size = self.size))]
    pub(crate) fn clear(&mut self) {
        for (row, cells) in self.cells.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = Move::empty(row, col);
            }
        }
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|mv| mv.label.unwrap_or('.').to_string())
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
