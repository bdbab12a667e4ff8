//! Application state and logic.

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tictactoe_engine::{BoardPresenter, Coord, Game, Selection};
use tracing::{debug, info, instrument};

use crate::input::{self, Action};
use crate::renderer::TerminalRenderer;
use crate::ui::ScreenLayout;

/// Main application state.
///
/// Everything the screen shows lives here and is handed explicitly to
/// the draw and input code.
pub struct App {
    presenter: BoardPresenter<TerminalRenderer>,
    cursor: Coord,
    area: Rect,
    running: bool,
}

impl App {
    /// Creates a new application around `game`.
    pub fn new(game: Game) -> Self {
        let size = game.board_size();
        Self {
            presenter: BoardPresenter::new(game, TerminalRenderer::new(size)),
            cursor: Coord::new(size / 2, size / 2),
            area: Rect::default(),
            running: true,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        self.presenter.game()
    }

    /// Gets what the renderer was last told to show.
    pub fn view(&self) -> &TerminalRenderer {
        self.presenter.renderer()
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Returns false once the user asked to exit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Records the terminal area the next frame is drawn into.
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    /// Layout of the last drawn frame.
    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::new(self.area, self.game().board_size())
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<()> {
        let action = input::key_action(key, self.cursor, self.game().board_size());
        self.apply(action)
    }

    /// Handles a left click at terminal position `(x, y)`.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, x: u16, y: u16) -> Result<()> {
        let action = input::click_action(&self.layout(), x, y);
        self.apply(action)
    }

    fn apply(&mut self, action: Action) -> Result<()> {
        debug!(?action, "Applying action");
        match action {
            Action::MoveCursor(coord) => self.cursor = coord,
            Action::Select(coord) => {
                self.cursor = coord;
                let selection = self.presenter.select(coord)?;
                if selection != Selection::Ignored {
                    info!(%coord, ?selection, "Mark placed");
                }
            }
            Action::PlayAgain => {
                info!("Starting another round");
                self.presenter.play_again();
            }
            Action::Quit => {
                info!("User quit");
                self.running = false;
            }
            Action::Nothing => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MenuItem;
    use tictactoe_engine::{GameStatus, READY_MESSAGE};

    fn app() -> App {
        let mut app = App::new(Game::default());
        app.resize(Rect::new(0, 0, 80, 24));
        app
    }

    fn click_cell(app: &mut App, coord: Coord) {
        let layout = app.layout();
        let (_, rect) = layout
            .cells
            .iter()
            .find(|(c, _)| *c == coord)
            .copied()
            .unwrap();
        app.handle_click(rect.x + 1, rect.y + 1).unwrap();
    }

    fn click_menu(app: &mut App, item: MenuItem) {
        let layout = app.layout();
        let (_, rect) = layout.menu.iter().find(|(i, _)| *i == item).copied().unwrap();
        app.handle_click(rect.x, rect.y).unwrap();
    }

    #[test]
    fn test_cursor_starts_in_center() {
        assert_eq!(app().cursor(), Coord::new(1, 1));
    }

    #[test]
    fn test_clicks_play_a_winning_game() {
        let mut app = app();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            click_cell(&mut app, Coord::new(row, col));
        }

        assert_eq!(app.game().status(), GameStatus::Won);
        assert_eq!(app.view().message().0, "Player \"X\" wins!");
        assert!(app.view().cell(Coord::new(0, 1)).unwrap().highlighted);
        assert!(!app.view().cell(Coord::new(1, 1)).unwrap().highlighted);
    }

    #[test]
    fn test_keyboard_play() {
        let mut app = app();
        app.handle_key(KeyCode::Enter).unwrap();
        app.handle_key(KeyCode::Left).unwrap();
        app.handle_key(KeyCode::Char(' ')).unwrap();

        assert_eq!(app.cursor(), Coord::new(1, 0));
        assert_eq!(app.view().cell(Coord::new(1, 1)).unwrap().label, Some('X'));
        assert_eq!(app.view().cell(Coord::new(1, 0)).unwrap().label, Some('O'));
        assert_eq!(app.view().message().0, "X's Turn");
    }

    #[test]
    fn test_play_again_menu_resets_view() {
        let mut app = app();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            click_cell(&mut app, Coord::new(row, col));
        }

        click_menu(&mut app, MenuItem::PlayAgain);

        assert_eq!(app.game().status(), GameStatus::Playing);
        assert_eq!(app.view().message().0, READY_MESSAGE);
        let cell = app.view().cell(Coord::new(0, 0)).unwrap();
        assert_eq!(cell.label, None);
        assert!(cell.enabled);
        assert!(!cell.highlighted);
        assert!(app.is_running());
    }

    #[test]
    fn test_exit_menu_and_quit_key() {
        let mut app = app();
        click_menu(&mut app, MenuItem::Exit);
        assert!(!app.is_running());

        let mut app = self::app();
        app.handle_key(KeyCode::Char('q')).unwrap();
        assert!(!app.is_running());
    }
}
