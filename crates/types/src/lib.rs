//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! They are plain data with no behavior beyond parsing and small helpers, so
//! they can be shared by the simulation core, the terminal front-end and tests.
//!
//! # Board Dimensions
//!
//! Board size follows the selected difficulty:
//!
//! | Difficulty | Width | Height |
//! |------------|-------|--------|
//! | `Easy`     | 10    | 10     |
//! | `Medium`   | 12    | 12     |
//! | `Hard`     | 15    | 15     |
//!
//! # Tunables
//!
//! | Constant | Default | Description |
//! |----------|---------|-------------|
//! | `DEFAULT_COLORS_ON_FIELD` | 5 | Palette size drawn for one session |
//! | `DEFAULT_SPAWN_PER_TURN` | 5 | Balls spawned after a move that clears nothing |
//! | `DEFAULT_ITEMS_IN_LINE` | 5 | Run length that clears |
//! | `DEFAULT_MOVE_STEP_MS` | 50 | Presentation delay between move steps |
//!
//! # Examples
//!
//! ```
//! use lines_types::{Color, Coord, Difficulty, GameStatus};
//!
//! assert_eq!(Difficulty::Medium.dimensions(), (12, 12));
//! assert_eq!(Color::from_str("DeepPink"), Some(Color::DeepPink));
//! assert_eq!(Coord::new(2, 3).manhattan(Coord::new(0, 0)), 5);
//! assert!(GameStatus::Lost.is_terminal());
//! ```

use serde::{Deserialize, Serialize};

/// Number of colors drawn from the master palette for one session.
pub const DEFAULT_COLORS_ON_FIELD: u8 = 5;

/// Balls materialized per turn.
pub const DEFAULT_SPAWN_PER_TURN: u8 = 5;

/// Minimum run length that gets cleared.
pub const DEFAULT_ITEMS_IN_LINE: u8 = 5;

/// Delay between two move steps when a front-end animates a move.
pub const DEFAULT_MOVE_STEP_MS: u32 = 50;

/// Largest supported board side.
pub const MAX_BOARD_SIDE: u8 = 64;

/// A board position. Rows grow downwards, columns grow to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Sum of absolute row and column differences.
    pub fn manhattan(self, other: Coord) -> u32 {
        (self.row.abs_diff(other.row) as u32) + (self.col.abs_diff(other.col) as u32)
    }

    /// Offset by a signed delta. Returns `None` when the result would be negative
    /// or overflow; callers still need to bounds-check against the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Coord> {
        let row = (self.row as i16) + (d_row as i16);
        let col = (self.col as i16) + (d_col as i16);
        if !(0..=u8::MAX as i16).contains(&row) || !(0..=u8::MAX as i16).contains(&col) {
            return None;
        }
        Some(Coord::new(row as u8, col as u8))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Ball colors. The session palette is a subset of [`Color::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    BlueViolet,
    Brown,
    Coral,
    DarkGreen,
    DarkMagenta,
    DarkOrange,
    DeepPink,
    Gold,
    LimeGreen,
    MediumSlateBlue,
    OrangeRed,
    White,
}

impl Color {
    /// Master list, in a fixed order.
    pub const ALL: [Color; 12] = [
        Color::BlueViolet,
        Color::Brown,
        Color::Coral,
        Color::DarkGreen,
        Color::DarkMagenta,
        Color::DarkOrange,
        Color::DeepPink,
        Color::Gold,
        Color::LimeGreen,
        Color::MediumSlateBlue,
        Color::OrangeRed,
        Color::White,
    ];

    /// Parse a color name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        Self::ALL.into_iter().find(|c| c.as_str() == lower)
    }

    /// Lowercase color name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::BlueViolet => "blueviolet",
            Color::Brown => "brown",
            Color::Coral => "coral",
            Color::DarkGreen => "darkgreen",
            Color::DarkMagenta => "darkmagenta",
            Color::DarkOrange => "darkorange",
            Color::DeepPink => "deeppink",
            Color::Gold => "gold",
            Color::LimeGreen => "limegreen",
            Color::MediumSlateBlue => "mediumslateblue",
            Color::OrangeRed => "orangered",
            Color::White => "white",
        }
    }
}

/// Board size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// `(width, height)` of the board.
    pub fn dimensions(&self) -> (u8, u8) {
        match self {
            Difficulty::Easy => (10, 10),
            Difficulty::Medium => (12, 12),
            Difficulty::Hard => (15, 15),
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Session status.
///
/// `Won` is part of the state space but no rule currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Running,
    Won,
    Lost,
}

impl GameStatus {
    /// Player input is ignored until the next reset.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Running => "running",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Commands a presentation layer can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    SelectOrMove { at: Coord },
    Reset,
    TogglePreview,
}

/// Notifications emitted by the simulation core, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    /// Every cell was wiped; observers should redraw everything.
    BoardReset,
    /// The item in a cell appeared, disappeared or moved.
    CellChanged { at: Coord },
    CellSelectedChanged { at: Coord, selected: bool },
    /// A spawn target hint was set (`Some`) or removed (`None`).
    CellPreviewChanged { at: Coord, color: Option<Color> },
    /// One step of a move in flight.
    MoveStep { from: Coord, to: Coord },
    LineCleared { count: usize },
    /// Colors of the items waiting for a target cell.
    NextBatchGenerated { colors: Vec<Color> },
    ScoreChanged { score: u32 },
    StatusChanged { status: GameStatus },
    PreviewVisibilityChanged { visible: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_dimensions() {
        assert_eq!(Difficulty::Easy.dimensions(), (10, 10));
        assert_eq!(Difficulty::Medium.dimensions(), (12, 12));
        assert_eq!(Difficulty::Hard.dimensions(), (15, 15));
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn test_color_names_roundtrip() {
        for color in Color::ALL {
            assert_eq!(Color::from_str(color.as_str()), Some(color));
        }
        assert_eq!(Color::from_str("MediumSlateBlue"), Some(Color::MediumSlateBlue));
        assert_eq!(Color::from_str("magenta"), None);
    }

    #[test]
    fn test_coord_offset_rejects_negative() {
        let c = Coord::new(0, 3);
        assert_eq!(c.offset(-1, 0), None);
        assert_eq!(c.offset(1, -1), Some(Coord::new(1, 2)));
        assert_eq!(Coord::new(255, 0).offset(1, 0), None);
    }

    #[test]
    fn test_manhattan_is_symmetric() {
        let a = Coord::new(1, 7);
        let b = Coord::new(4, 2);
        assert_eq!(a.manhattan(b), 8);
        assert_eq!(b.manhattan(a), 8);
    }

    #[test]
    fn test_status_terminal() {
        assert!(!GameStatus::Running.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
        assert!(GameStatus::Won.is_terminal());
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let ev = GameEvent::LineCleared { count: 5 };
        let json = serde_json::to_string(&ev).unwrap();
        assert_eq!(json, r#"{"type":"lineCleared","count":5}"#);

        let cmd: Command = serde_json::from_str(r#"{"type":"selectOrMove","at":{"row":1,"col":2}}"#).unwrap();
        assert_eq!(cmd, Command::SelectOrMove { at: Coord::new(1, 2) });
    }
}
