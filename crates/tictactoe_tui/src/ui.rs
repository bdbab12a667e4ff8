//! Screen layout and frame rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use strum::{Display, EnumIter, IntoEnumIterator};
use tictactoe_engine::{Coord, Rgb};

use crate::app::App;

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;
/// Space between neighbouring cells.
pub const CELL_GAP: u16 = 1;

const WINDOW_BG: Color = Color::Rgb(0x22, 0x28, 0x31);
const DISPLAY_BG: Color = Color::Rgb(0x39, 0x3E, 0x46);
const CELL_BG: Color = Color::Rgb(0x00, 0xAD, 0xB5);
const HIGHLIGHT_BG: Color = Color::Rgb(0xFF, 0x2E, 0x63);
const TITLE: &str = "Colorful Tic-Tac-Toe";
const HINT: &str = "arrows/hjkl move  enter place  r again  q quit";

/// Entries of the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum MenuItem {
    /// Clears the board for another round.
    #[strum(to_string = "Play Again")]
    PlayAgain,
    /// Leaves the program.
    Exit,
}

/// Screen regions for one terminal size.
///
/// Drawing and mouse hit-testing both go through this so a click always
/// lands on what was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Status message box.
    pub display: Rect,
    /// Every board cell and where it is drawn.
    pub cells: Vec<(Coord, Rect)>,
    /// Menu entries and where they are drawn.
    pub menu: Vec<(MenuItem, Rect)>,
    /// Free space on the menu line after the entries.
    pub hint: Rect,
}

impl ScreenLayout {
    /// Splits `area` for a `board_size`×`board_size` board.
    pub fn new(area: Rect, board_size: usize) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(3), // Message
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Menu
            ])
            .split(area);

        let (menu, hint) = menu_layout(chunks[3]);
        Self {
            title: chunks[0],
            display: chunks[1],
            cells: board_layout(chunks[2], board_size),
            menu,
            hint,
        }
    }

    /// The board cell under the terminal position `(x, y)`.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<Coord> {
        self.cells
            .iter()
            .find(|(_, rect)| contains(*rect, x, y))
            .map(|(coord, _)| *coord)
    }

    /// The menu entry under the terminal position `(x, y)`.
    pub fn menu_at(&self, x: u16, y: u16) -> Option<MenuItem> {
        self.menu
            .iter()
            .find(|(_, rect)| contains(*rect, x, y))
            .map(|(item, _)| *item)
    }
}

fn board_layout(area: Rect, size: usize) -> Vec<(Coord, Rect)> {
    let n = size as u16;
    let grid_width = n * CELL_WIDTH + n.saturating_sub(1) * CELL_GAP;
    let grid_height = n * CELL_HEIGHT + n.saturating_sub(1) * CELL_GAP;
    let left = area.x + area.width.saturating_sub(grid_width) / 2;
    let top = area.y + area.height.saturating_sub(grid_height) / 2;

    let mut cells = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            let rect = Rect::new(
                left + col as u16 * (CELL_WIDTH + CELL_GAP),
                top + row as u16 * (CELL_HEIGHT + CELL_GAP),
                CELL_WIDTH,
                CELL_HEIGHT,
            );
            cells.push((Coord::new(row, col), rect.intersection(area)));
        }
    }
    cells
}

fn menu_layout(area: Rect) -> (Vec<(MenuItem, Rect)>, Rect) {
    let mut x = area.x + 1;
    let mut items = Vec::new();
    for item in MenuItem::iter() {
        let width = item.to_string().len() as u16 + 2;
        items.push((item, Rect::new(x, area.y, width, area.height).intersection(area)));
        x += width + 2;
    }
    let hint = Rect::new(x, area.y, area.right().saturating_sub(x), area.height).intersection(area);
    (items, hint)
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

fn tui_color(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = ScreenLayout::new(area, app.game().board_size());

    frame.render_widget(Block::default().style(Style::default().bg(WINDOW_BG)), area);

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let (message, color) = app.view().message();
    let display = Paragraph::new(message)
        .style(Style::default().fg(tui_color(color)).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(DISPLAY_BG)),
        );
    frame.render_widget(display, layout.display);

    for (coord, rect) in &layout.cells {
        draw_cell(frame, *rect, app, *coord);
    }

    for (item, rect) in &layout.menu {
        let entry = Paragraph::new(format!(" {item} "))
            .style(Style::default().fg(WINDOW_BG).bg(Color::Rgb(0xEE, 0xEE, 0xEE)));
        frame.render_widget(entry, *rect);
    }
    let hint = Paragraph::new(HINT).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, layout.hint);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, coord: Coord) {
    let Some(view) = app.view().cell(coord) else {
        return;
    };

    let bg = if view.highlighted { HIGHLIGHT_BG } else { CELL_BG };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(bg));
    block = if coord == app.cursor() {
        block
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Yellow))
    } else if view.enabled {
        block.border_style(Style::default().fg(Color::White))
    } else {
        block.border_style(Style::default().fg(DISPLAY_BG))
    };

    let symbol = view.label.map(String::from).unwrap_or_default();
    let mark = Span::styled(
        symbol,
        Style::default()
            .fg(tui_color(view.color))
            .add_modifier(Modifier::BOLD),
    );
    let paragraph = Paragraph::new(Line::from(mark))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
