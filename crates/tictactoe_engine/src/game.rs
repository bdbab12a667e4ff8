//! Game logic and rules for tic-tac-toe.

use crate::board::{Board, Move};
use crate::combo::{winning_combos, WinningCombo};
use crate::error::{GameError, GameErrorKind, IllegalMoveReason};
use crate::player::{Player, TurnOrder};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Side length of the classic board.
pub const BOARD_SIZE: usize = 3;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    Playing,
    /// A line was completed.
    Won,
    /// The board filled up without a winner.
    Tied,
}

/// Mutable per-round state.
#[derive(Debug, Clone, Default)]
struct GameState {
    winner_combo: Option<WinningCombo>,
}

/// Tic-tac-toe game engine.
///
/// Owns the board, the turn order and the winning lines. Moves are
/// stamped by the caller with the current player's label; the engine
/// never advances the turn on its own.
#[derive(Debug, Clone)]
pub struct Game {
    turns: TurnOrder,
    board: Board,
    combos: Vec<WinningCombo>,
    state: GameState,
}

impl Game {
    /// Creates a game for `players` (in turn order) on a `board_size` square board.
    #[instrument(skip(players), fields(players = players.len()))]
    pub fn new(players: Vec<Player>, board_size: usize) -> Result<Self, GameError> {
        if board_size == 0 {
            return Err(GameError::new(GameErrorKind::InvalidBoardSize(board_size)));
        }
        let turns = TurnOrder::new(players)?;
        let game = Self {
            turns,
            board: Board::new(board_size),
            combos: winning_combos(board_size),
            state: GameState::default(),
        };
        info!(
            first = %game.current_player().label(),
            combos = game.combos.len(),
            "Game created"
        );
        Ok(game)
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.turns.current()
    }

    /// All players in turn order.
    pub fn players(&self) -> &[Player] {
        self.turns.players()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the board.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Every line that wins when uniformly labeled, in check order.
    pub fn winning_combos(&self) -> &[WinningCombo] {
        &self.combos
    }

    /// Returns true if `mv` targets an empty cell and nobody has won yet.
    ///
    /// Does not check whose turn it is.
    #[instrument(skip(self))]
    pub fn is_valid_move(&self, mv: &Move) -> Result<bool, GameError> {
        let cell = self.board.get(mv.row, mv.col)?;
        Ok(cell.is_empty() && !self.has_winner())
    }

    /// Places `mv` on the board and checks every line for a winner.
    ///
    /// The first line (rows, then columns, then diagonals) found holding a
    /// single label becomes the winning combo.
    #[instrument(skip(self))]
    pub fn process_move(&mut self, mv: Move) -> Result<GameStatus, GameError> {
        let illegal = |reason| {
            GameError::new(GameErrorKind::IllegalMove {
                row: mv.row,
                col: mv.col,
                reason,
            })
        };

        if !self.board.get(mv.row, mv.col)?.is_empty() {
            return Err(illegal(IllegalMoveReason::Occupied));
        }
        if self.has_winner() {
            return Err(illegal(IllegalMoveReason::GameOver));
        }
        if mv.label.is_none() {
            return Err(illegal(IllegalMoveReason::Unlabeled));
        }

        self.board.place(mv)?;
        debug!(board = %self.board.display(), "Move placed");

        if let Some(combo) = self
            .combos
            .iter()
            .find(|combo| combo.uniform_label(&self.board).is_some())
        {
            info!(combo = ?combo.cells(), "Winning line completed");
            self.state.winner_combo = Some(combo.clone());
        }

        let status = self.status();
        debug!(%status, "Move processed");
        Ok(status)
    }

    /// Returns true once a line has been completed.
    pub fn has_winner(&self) -> bool {
        self.state.winner_combo.is_some()
    }

    /// The line that won the game.
    pub fn winner_combo(&self) -> Option<&WinningCombo> {
        self.state.winner_combo.as_ref()
    }

    /// The player whose label fills the winning line.
    pub fn winner(&self) -> Option<&Player> {
        let label = self.winner_combo()?.uniform_label(&self.board)?;
        self.turns.by_label(label)
    }

    /// Returns true if the board is full and nobody has won.
    pub fn is_tied(&self) -> bool {
        !self.has_winner() && self.board.is_full()
    }

    /// Current position in the Playing/Won/Tied state machine.
    pub fn status(&self) -> GameStatus {
        if self.has_winner() {
            GameStatus::Won
        } else if self.is_tied() {
            GameStatus::Tied
        } else {
            GameStatus::Playing
        }
    }

    /// Hands the turn to the next player, wrapping after the last.
    #[instrument(skip(self))]
    pub fn toggle_player(&mut self) {
        self.turns.advance();
        debug!(current = %self.current_player().label(), "Turn passed");
    }

    /// Clears the board and the winner for another round.
    ///
    /// The current player is left as is, so the next round opens with
    /// whoever held the turn when the previous one ended.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.clear();
        self.state = GameState::default();
        info!(current = %self.current_player().label(), "Game reset");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self {
            turns: TurnOrder::default_pair(),
            board: Board::new(BOARD_SIZE),
            combos: winning_combos(BOARD_SIZE),
            state: GameState::default(),
        }
    }
}
