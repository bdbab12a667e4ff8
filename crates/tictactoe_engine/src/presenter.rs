//! Drives a [`Game`] from cell selections and pushes every visible
//! change to a [`Renderer`].

use crate::board::{Coord, Move};
use crate::combo::WinningCombo;
use crate::error::GameError;
use crate::game::Game;
use crate::player::Rgb;
use tracing::{debug, info, instrument};

/// Color of status messages that belong to no player.
pub const MESSAGE_COLOR: Rgb = Rgb::new(0xFF, 0xD3, 0x69);
/// Foreground of cells nobody has claimed.
pub const EMPTY_CELL_COLOR: Rgb = Rgb::new(0xEE, 0xEE, 0xEE);
/// Shown at start and after every reset.
pub const READY_MESSAGE: &str = "Ready to Play!";
/// Shown when the board fills without a winner.
pub const TIED_MESSAGE: &str = "Tied game!";

/// Anything that can display the board.
///
/// Implementations keep their own visual state; the presenter only
/// tells them what changed.
pub trait Renderer {
    /// Paints one cell. Painting a cell also drops any winner highlight on it.
    fn render_cell(&mut self, coord: Coord, label: Option<char>, color: Rgb, enabled: bool);

    /// Replaces the status message.
    fn render_message(&mut self, text: &str, color: Rgb);

    /// Marks the cells of the winning line.
    fn render_winner_highlight(&mut self, combo: &WinningCombo);
}

/// What a selection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The cell was taken or the game is over; nothing changed.
    Ignored,
    /// The mark was placed and the turn passed on.
    Placed,
    /// The mark completed a line.
    Won,
    /// The mark filled the board without a winner.
    Tied,
}

/// Glue between a [`Game`] and a [`Renderer`].
#[derive(Debug)]
pub struct BoardPresenter<R> {
    game: Game,
    renderer: R,
}

impl<R: Renderer> BoardPresenter<R> {
    /// Takes ownership of both sides and paints the opening board.
    #[instrument(skip_all)]
    pub fn new(game: Game, renderer: R) -> Self {
        let mut presenter = Self { game, renderer };
        presenter.paint_empty_board();
        presenter.renderer.render_message(READY_MESSAGE, MESSAGE_COLOR);
        presenter
    }

    /// The game being shown.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The renderer being driven.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Plays the current player's mark at `coord`.
    #[instrument(skip(self, coord), fields(%coord))]
    pub fn select(&mut self, coord: Coord) -> Result<Selection, GameError> {
        if self.game.has_winner() {
            debug!("Game already won, ignoring selection");
            return Ok(Selection::Ignored);
        }

        let player = self.game.current_player().clone();
        let mv = Move::new(coord.row, coord.col, player.label());
        if !self.game.is_valid_move(&mv)? {
            debug!("Cell unavailable, ignoring selection");
            return Ok(Selection::Ignored);
        }

        self.renderer
            .render_cell(coord, Some(player.label()), player.color(), false);
        self.game.process_move(mv)?;

        if self.game.is_tied() {
            info!("Game tied");
            self.renderer.render_message(TIED_MESSAGE, MESSAGE_COLOR);
            Ok(Selection::Tied)
        } else if let Some(combo) = self.game.winner_combo() {
            info!(winner = %player.label(), "Game won");
            self.renderer.render_winner_highlight(combo);
            self.renderer
                .render_message(&win_message(player.label()), player.color());
            Ok(Selection::Won)
        } else {
            self.game.toggle_player();
            let next = self.game.current_player();
            self.renderer
                .render_message(&turn_message(next.label()), next.color());
            Ok(Selection::Placed)
        }
    }

    /// Clears the board for another round.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) {
        self.game.reset_game();
        self.renderer.render_message(READY_MESSAGE, MESSAGE_COLOR);
        self.paint_empty_board();
    }

    fn paint_empty_board(&mut self) {
        let size = self.game.board_size();
        for row in 0..size {
            for col in 0..size {
                self.renderer
                    .render_cell(Coord::new(row, col), None, EMPTY_CELL_COLOR, true);
            }
        }
    }
}

/// Status line announcing a winner.
pub fn win_message(label: char) -> String {
    format!("Player \"{label}\" wins!")
}

/// Status line announcing whose turn it is.
pub fn turn_message(label: char) -> String {
    format!("{label}'s Turn")
}
