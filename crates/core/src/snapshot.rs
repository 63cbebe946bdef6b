use serde::{Deserialize, Serialize};

use crate::board::Cell;
use crate::types::{Color, Coord, GameStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub color: Option<Color>,
    pub selected: bool,
    pub preview: Option<Color>,
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        Self {
            color: cell.color(),
            selected: cell.selected(),
            preview: cell.preview(),
        }
    }
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major, `width * height` entries.
    pub cells: Vec<CellSnapshot>,
    pub palette: Vec<Color>,
    /// Colors of the next batch, in landing order.
    pub upcoming: Vec<Color>,
    pub active: Option<Coord>,
    pub moving: bool,
    pub show_next_colors: bool,
    pub status: GameStatus,
    pub score: u32,
    pub episode_id: u32,
    /// Seed that replays the session from its first batch.
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.cells.clear();
        self.palette.clear();
        self.upcoming.clear();
        self.active = None;
        self.moving = false;
        self.show_next_colors = true;
        self.status = GameStatus::Running;
        self.score = 0;
        self.episode_id = 0;
        self.seed = 0;
    }

    pub fn cell(&self, at: Coord) -> Option<&CellSnapshot> {
        if at.row >= self.height || at.col >= self.width {
            return None;
        }
        self.cells
            .get((at.row as usize) * (self.width as usize) + (at.col as usize))
    }

    /// Player input would currently be accepted.
    pub fn playable(&self) -> bool {
        !self.status.is_terminal() && !self.moving
    }
}
