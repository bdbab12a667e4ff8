//! Keyboard and mouse mapping.

use crossterm::event::KeyCode;
use tictactoe_engine::Coord;

use crate::ui::{MenuItem, ScreenLayout};

/// What an input event asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the keyboard cursor.
    MoveCursor(Coord),
    /// Place the current player's mark.
    Select(Coord),
    /// Start another round.
    PlayAgain,
    /// Leave the program.
    Quit,
    /// Nothing to do.
    Nothing,
}

/// Maps a key press to an action.
pub fn key_action(key: KeyCode, cursor: Coord, size: usize) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::PlayAgain,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Select(cursor),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            digit_cell(c, size).map_or(Action::Nothing, Action::Select)
        }
        code => {
            let moved = move_cursor(cursor, code, size);
            if moved == cursor {
                Action::Nothing
            } else {
                Action::MoveCursor(moved)
            }
        }
    }
}

/// Maps a left click at `(x, y)` to an action.
pub fn click_action(layout: &ScreenLayout, x: u16, y: u16) -> Action {
    if let Some(coord) = layout.cell_at(x, y) {
        return Action::Select(coord);
    }
    match layout.menu_at(x, y) {
        Some(MenuItem::PlayAgain) => Action::PlayAgain,
        Some(MenuItem::Exit) => Action::Quit,
        None => Action::Nothing,
    }
}

/// Moves cursor based on arrow or vi keys, stopping at the edges.
pub fn move_cursor(cursor: Coord, key: KeyCode, size: usize) -> Coord {
    let last = size.saturating_sub(1);
    let Coord { row, col } = cursor;

    match key {
        KeyCode::Right | KeyCode::Char('l') => Coord::new(row, (col + 1).min(last)),
        KeyCode::Left | KeyCode::Char('h') => Coord::new(row, col.saturating_sub(1)),
        KeyCode::Down | KeyCode::Char('j') => Coord::new((row + 1).min(last), col),
        KeyCode::Up | KeyCode::Char('k') => Coord::new(row.saturating_sub(1), col),
        _ => cursor,
    }
}

/// Cell for digit `1..=size²`, counted in row-major order.
pub fn digit_cell(c: char, size: usize) -> Option<Coord> {
    let n = c.to_digit(10)? as usize;
    if n == 0 || n > size * size {
        return None;
    }
    let index = n - 1;
    Some(Coord::new(index / size, index % size))
}
