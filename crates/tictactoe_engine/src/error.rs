//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalMoveReason {
    /// The cell already holds a label.
    #[display("cell is already occupied")]
    Occupied,
    /// A winner has already been declared.
    #[display("game is already won")]
    GameOver,
    /// The move carries no player label.
    #[display("move has no player label")]
    Unlabeled,
}

/// The kinds of failure the engine reports.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// Coordinates fall outside the board.
    #[display("cell ({row}, {col}) is outside the {size}x{size} board")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },
    /// A move was processed that is not legal in the current state.
    #[display("illegal move at ({row}, {col}): {reason}")]
    IllegalMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// What made the move illegal.
        reason: IllegalMoveReason,
    },
    /// Fewer than two players were supplied.
    #[display("a game needs at least two players, got {_0}")]
    NotEnoughPlayers(usize),
    /// Two players share the same label.
    #[display("player label '{_0}' is used more than once")]
    DuplicateLabel(char),
    /// The board side length is zero.
    #[display("board size must be at least 1, got {_0}")]
    InvalidBoardSize(usize),
    /// A color string is not of the form `#RRGGBB`.
    #[display("invalid color '{_0}', expected #RRGGBB")]
    InvalidColor(String),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }
}

impl From<GameErrorKind> for GameError {
    #[track_caller]
    fn from(kind: GameErrorKind) -> Self {
        Self::new(kind)
    }
}
