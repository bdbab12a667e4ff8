//! Retained view state painted by the presenter and drawn each frame.

use tictactoe_engine::{Coord, EMPTY_CELL_COLOR, MESSAGE_COLOR, Renderer, Rgb, WinningCombo};
use tracing::trace;

/// What one board cell currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Mark in the cell, if any.
    pub label: Option<char>,
    /// Foreground color of the mark.
    pub color: Rgb,
    /// Whether the cell still accepts clicks.
    pub enabled: bool,
    /// Whether the cell is part of the winning line.
    pub highlighted: bool,
}

impl CellView {
    fn blank() -> Self {
        Self {
            label: None,
            color: EMPTY_CELL_COLOR,
            enabled: true,
            highlighted: false,
        }
    }
}

/// [`Renderer`] that records what the terminal should show.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    cells: Vec<Vec<CellView>>,
    message: String,
    message_color: Rgb,
}

impl TerminalRenderer {
    /// Creates blank state for a `size`×`size` board.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![vec![CellView::blank(); size]; size],
            message: String::new(),
            message_color: MESSAGE_COLOR,
        }
    }

    /// The cell at `coord`, if on the board.
    pub fn cell(&self, coord: Coord) -> Option<&CellView> {
        self.cells.get(coord.row)?.get(coord.col)
    }

    /// Current status message and its color.
    pub fn message(&self) -> (&str, Rgb) {
        (&self.message, self.message_color)
    }

    fn cell_mut(&mut self, coord: Coord) -> Option<&mut CellView> {
        self.cells.get_mut(coord.row)?.get_mut(coord.col)
    }
}

impl Renderer for TerminalRenderer {
    fn render_cell(&mut self, coord: Coord, label: Option<char>, color: Rgb, enabled: bool) {
        trace!(%coord, ?label, enabled, "render_cell");
        if let Some(cell) = self.cell_mut(coord) {
            *cell = CellView {
                label,
                color,
                enabled,
                highlighted: false,
            };
        }
    }

    fn render_message(&mut self, text: &str, color: Rgb) {
        trace!(text, %color, "render_message");
        self.message = text.to_string();
        self.message_color = color;
    }

    fn render_winner_highlight(&mut self, combo: &WinningCombo) {
        trace!(cells = ?combo.cells(), "render_winner_highlight");
        for &coord in combo.cells() {
            if let Some(cell) = self.cell_mut(coord) {
                cell.highlighted = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::X_COLOR;

    #[test]
    fn test_highlight_cleared_by_repaint() {
        let mut renderer = TerminalRenderer::new(3);
        let combo = WinningCombo::new(vec![Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]);
        renderer.render_cell(Coord::new(1, 1), Some('X'), X_COLOR, false);
        renderer.render_winner_highlight(&combo);
        assert!(renderer.cell(Coord::new(1, 1)).unwrap().highlighted);
        assert!(!renderer.cell(Coord::new(0, 1)).unwrap().highlighted);

        renderer.render_cell(Coord::new(1, 1), None, EMPTY_CELL_COLOR, true);
        let cell = renderer.cell(Coord::new(1, 1)).unwrap();
        assert!(!cell.highlighted);
        assert!(cell.enabled);
        assert_eq!(cell.label, None);
    }

    #[test]
    fn test_off_board_paint_is_dropped() {
        let mut renderer = TerminalRenderer::new(3);
        renderer.render_cell(Coord::new(3, 3), Some('X'), X_COLOR, false);
        assert!(renderer.cell(Coord::new(3, 3)).is_none());
    }

    #[test]
    fn test_message() {
        let mut renderer = TerminalRenderer::new(3);
        renderer.render_message("X's Turn", X_COLOR);
        assert_eq!(renderer.message(), ("X's Turn", X_COLOR));
    }
}
