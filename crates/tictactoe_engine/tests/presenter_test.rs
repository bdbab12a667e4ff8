//! Tests for the board presenter against a recording renderer.

use tictactoe_engine::{
    BoardPresenter, Coord, EMPTY_CELL_COLOR, Game, GameErrorKind, MESSAGE_COLOR, O_COLOR,
    READY_MESSAGE, Renderer, Rgb, Selection, TIED_MESSAGE, WinningCombo, X_COLOR,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Cell(Coord, Option<char>, Rgb, bool),
    Message(String, Rgb),
    Highlight(Vec<Coord>),
}

#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Recorder {
    fn messages(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Message(text, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn last(&self) -> Option<&Call> {
        self.calls.last()
    }
}

impl Renderer for Recorder {
    fn render_cell(&mut self, coord: Coord, label: Option<char>, color: Rgb, enabled: bool) {
        self.calls.push(Call::Cell(coord, label, color, enabled));
    }

    fn render_message(&mut self, text: &str, color: Rgb) {
        self.calls.push(Call::Message(text.to_string(), color));
    }

    fn render_winner_highlight(&mut self, combo: &WinningCombo) {
        self.calls.push(Call::Highlight(combo.cells().to_vec()));
    }
}

fn presenter() -> BoardPresenter<Recorder> {
    BoardPresenter::new(Game::default(), Recorder::default())
}

fn at(row: usize, col: usize) -> Coord {
    Coord::new(row, col)
}

#[test]
fn test_opening_paint() {
    let presenter = presenter();
    let calls = &presenter.renderer().calls;

    assert_eq!(calls.len(), 10);
    assert!(calls[..9]
        .iter()
        .all(|call| matches!(call, Call::Cell(_, None, color, true) if *color == EMPTY_CELL_COLOR)));
    assert_eq!(
        calls[9],
        Call::Message(READY_MESSAGE.to_string(), MESSAGE_COLOR)
    );
}

#[test]
fn test_select_places_and_passes_turn() {
    let mut presenter = presenter();
    let before = presenter.renderer().calls.len();

    assert_eq!(presenter.select(at(1, 1)).unwrap(), Selection::Placed);

    let calls = &presenter.renderer().calls[before..];
    assert_eq!(
        calls,
        &[
            Call::Cell(at(1, 1), Some('X'), X_COLOR, false),
            Call::Message("O's Turn".to_string(), O_COLOR),
        ]
    );
    assert_eq!(presenter.game().current_player().label(), 'O');
}

#[test]
fn test_occupied_cell_is_ignored() {
    let mut presenter = presenter();
    presenter.select(at(0, 0)).unwrap();
    let before = presenter.renderer().calls.len();

    assert_eq!(presenter.select(at(0, 0)).unwrap(), Selection::Ignored);
    assert_eq!(presenter.renderer().calls.len(), before);
    assert_eq!(presenter.game().current_player().label(), 'O');
}

#[test]
fn test_win_highlights_and_announces() {
    let mut presenter = presenter();
    for coord in [at(0, 0), at(1, 1), at(0, 1), at(1, 0)] {
        assert_eq!(presenter.select(coord).unwrap(), Selection::Placed);
    }

    assert_eq!(presenter.select(at(0, 2)).unwrap(), Selection::Won);

    let calls = &presenter.renderer().calls;
    let n = calls.len();
    assert_eq!(
        calls[n - 2],
        Call::Highlight(vec![at(0, 0), at(0, 1), at(0, 2)])
    );
    assert_eq!(
        calls[n - 1],
        Call::Message("Player \"X\" wins!".to_string(), X_COLOR)
    );
    // The winner keeps the turn; nobody toggled after the winning move.
    assert_eq!(presenter.game().current_player().label(), 'X');
}

#[test]
fn test_input_after_win_is_ignored() {
    let mut presenter = presenter();
    for coord in [at(0, 0), at(1, 0), at(0, 1), at(1, 1), at(0, 2)] {
        presenter.select(coord).unwrap();
    }
    let before = presenter.renderer().calls.len();

    assert_eq!(presenter.select(at(2, 2)).unwrap(), Selection::Ignored);
    assert_eq!(presenter.renderer().calls.len(), before);
}

#[test]
fn test_tie_is_announced() {
    let mut presenter = presenter();
    // X O X / X O O / O X X, alternating from X.
    let order = [
        at(0, 0),
        at(0, 1),
        at(0, 2),
        at(1, 1),
        at(1, 0),
        at(1, 2),
        at(2, 1),
        at(2, 0),
        at(2, 2),
    ];
    let (last, rest) = order.split_last().unwrap();
    for &coord in rest {
        assert_eq!(presenter.select(coord).unwrap(), Selection::Placed);
    }

    assert_eq!(presenter.select(*last).unwrap(), Selection::Tied);
    assert_eq!(
        presenter.renderer().last(),
        Some(&Call::Message(TIED_MESSAGE.to_string(), MESSAGE_COLOR))
    );
}

#[test]
fn test_play_again_repaints_and_keeps_turn() {
    let mut presenter = presenter();
    presenter.select(at(2, 2)).unwrap();
    assert_eq!(presenter.game().current_player().label(), 'O');
    let before = presenter.renderer().calls.len();

    presenter.play_again();

    let calls = &presenter.renderer().calls[before..];
    assert_eq!(
        calls[0],
        Call::Message(READY_MESSAGE.to_string(), MESSAGE_COLOR)
    );
    assert_eq!(calls.len(), 10);
    assert!(calls[1..]
        .iter()
        .all(|call| matches!(call, Call::Cell(_, None, _, true))));
    assert!(presenter.game().board().moves().all(|mv| mv.is_empty()));
    assert_eq!(presenter.game().current_player().label(), 'O');
    assert_eq!(
        presenter.renderer().messages().first(),
        Some(&READY_MESSAGE)
    );
}

#[test]
fn test_out_of_range_selection_is_an_error() {
    let mut presenter = presenter();
    let err = presenter.select(at(5, 5)).unwrap_err();
    assert!(matches!(err.kind, GameErrorKind::InvalidCoordinate { .. }));
}
