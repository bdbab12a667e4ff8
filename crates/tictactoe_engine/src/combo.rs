//! Winning lines.

use crate::board::{Board, Coord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::instrument;

/// One complete row, column or diagonal of board coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningCombo(Vec<Coord>);

impl WinningCombo {
    /// Creates a combo from its cells in order.
    pub fn new(cells: Vec<Coord>) -> Self {
        Self(cells)
    }

    /// The cells of the line, in order.
    pub fn cells(&self) -> &[Coord] {
        &self.0
    }

    /// Returns true if `coord` lies on this line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }

    /// The single label filling every cell of the line, if any.
    pub fn uniform_label(&self, board: &Board) -> Option<char> {
        let labels: HashSet<Option<char>> =
            self.0.iter().map(|&coord| board.label_at(coord)).collect();
        match labels.into_iter().collect::<Vec<_>>().as_slice() {
            [Some(label)] => Some(*label),
            _ => None,
        }
    }
}

impl<T: Into<Coord>> FromIterator<T> for WinningCombo {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Builds the `2N + 2` lines of an N×N board.
///
/// Order: rows top to bottom, columns left to right, main diagonal,
/// anti-diagonal.
#[instrument]
pub fn winning_combos(size: usize) -> Vec<WinningCombo> {
    let rows = (0..size).map(|r| (0..size).map(|c| (r, c)).collect::<WinningCombo>());
    let columns = (0..size).map(|c| (0..size).map(|r| (r, c)).collect::<WinningCombo>());
    let main_diagonal: WinningCombo = (0..size).map(|i| (i, i)).collect();
    let anti_diagonal: WinningCombo = (0..size).map(|i| (i, size - 1 - i)).collect();

    rows.chain(columns)
        .chain([main_diagonal, anti_diagonal])
        .collect()
}
