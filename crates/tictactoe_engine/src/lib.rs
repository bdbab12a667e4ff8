//! Tic-tac-toe rules engine.
//!
//! # Architecture
//!
//! - **Game**: board state, win/tie detection and turn rotation for any
//!   N×N board (3×3 by default)
//! - **Presenter**: turns cell selections into moves and reports every
//!   visible change through the [`Renderer`] trait
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus, Move};
//!
//! let mut game = Game::default();
//! for col in 0..3 {
//!     let mv = Move::new(0, col, 'X');
//!     assert!(game.is_valid_move(&mv).unwrap());
//!     game.process_move(mv).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod combo;
mod error;
mod game;
mod player;
mod presenter;

pub use board::{Board, Coord, Move};
pub use combo::{WinningCombo, winning_combos};
pub use error::{GameError, GameErrorKind, IllegalMoveReason};
pub use game::{BOARD_SIZE, Game, GameStatus};
pub use player::{O_COLOR, Player, Rgb, X_COLOR, default_players};
pub use presenter::{
    BoardPresenter, EMPTY_CELL_COLOR, MESSAGE_COLOR, READY_MESSAGE, Renderer, Selection,
    TIED_MESSAGE, turn_message, win_message,
};
