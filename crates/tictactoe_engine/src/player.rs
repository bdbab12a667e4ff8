//! Players, display colors and turn rotation.

use crate::error::{GameError, GameErrorKind};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A 24-bit display color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("#{:02X}{:02X}{:02X}", r, g, b)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = GameError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::new(GameErrorKind::InvalidColor(s.to_string()));

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// A participant identified by a single-character label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    label: char,
    color: Rgb,
}

impl Player {
    /// Creates a player.
    pub fn new(label: char, color: Rgb) -> Self {
        Self { label, color }
    }

    /// The label this player stamps on the board.
    pub fn label(&self) -> char {
        self.label
    }

    /// The color this player is drawn in.
    pub fn color(&self) -> Rgb {
        self.color
    }
}

/// Dodger blue.
pub const X_COLOR: Rgb = Rgb::new(0x1E, 0x90, 0xFF);
/// Lime green.
pub const O_COLOR: Rgb = Rgb::new(0x32, 0xCD, 0x32);

/// The two default players, X first.
pub fn default_players() -> Vec<Player> {
    vec![Player::new('X', X_COLOR), Player::new('O', O_COLOR)]
}

/// Fixed cyclic order in which players act.
#[derive(Debug, Clone)]
pub(crate) struct TurnOrder {
    players: Vec<Player>,
    current: usize,
}

impl TurnOrder {
    /// Validates the roster and points at the first player.
    #[instrument(skip(players), fields(count = players.len()))]
    pub(crate) fn new(players: Vec<Player>) -> Result<Self, GameError> {
        if players.len() < 2 {
            return Err(GameError::new(GameErrorKind::NotEnoughPlayers(players.len())));
        }
        for (i, player) in players.iter().enumerate() {
            if players[..i].iter().any(|p| p.label == player.label) {
                return Err(GameError::new(GameErrorKind::DuplicateLabel(player.label)));
            }
        }
        Ok(Self {
            players,
            current: 0,
        })
    }

    /// The default X/O pair, X to move.
    pub(crate) fn default_pair() -> Self {
        Self {
            players: default_players(),
            current: 0,
        }
    }

    pub(crate) fn current(&self) -> &Player {
        &self.players[self.current]
    }

    pub(crate) fn players(&self) -> &[Player] {
        &self.players
    }

    /// Moves to the next player, wrapping after the last.
    pub(crate) fn advance(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    pub(crate) fn by_label(&self, label: char) -> Option<&Player> {
        self.players.iter().find(|p| p.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        let color: Rgb = "#1e90FF".parse().unwrap();
        assert_eq!(color, X_COLOR);
        assert_eq!(color.to_string(), "#1E90FF");
    }

    #[test]
    fn test_parse_color_rejects_malformed() {
        for bad in ["1E90FF", "#1E90F", "#1E90FFF", "#GG90FF", ""] {
            let err = bad.parse::<Rgb>().unwrap_err();
            assert_eq!(err.kind, GameErrorKind::InvalidColor(bad.to_string()));
        }
    }

    #[test]
    fn test_turn_order_wraps() {
        let players = vec![
            Player::new('A', X_COLOR),
            Player::new('B', O_COLOR),
            Player::new('C', X_COLOR),
        ];
        let mut order = TurnOrder::new(players).unwrap();
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(order.current().label());
            order.advance();
        }
        assert_eq!(seen, vec!['A', 'B', 'C', 'A', 'B']);
    }

    #[test]
    fn test_turn_order_rejects_single_player() {
        let err = TurnOrder::new(vec![Player::new('X', X_COLOR)]).unwrap_err();
        assert_eq!(err.kind, GameErrorKind::NotEnoughPlayers(1));
    }

    #[test]
    fn test_turn_order_rejects_duplicate_labels() {
        let err = TurnOrder::new(vec![Player::new('X', X_COLOR), Player::new('X', O_COLOR)])
            .unwrap_err();
        assert_eq!(err.kind, GameErrorKind::DuplicateLabel('X'));
    }
}
