//! Keyboard cursor over the board.

use crate::map::Direction;
use crate::types::Coord;

/// The highlighted cell keyboard players act on. Always inside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCursor {
    at: Coord,
    width: u8,
    height: u8,
}

impl BoardCursor {
    /// Cursor at the top-left cell of a `width` x `height` board.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            at: Coord::new(0, 0),
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn position(&self) -> Coord {
        self.at
    }

    /// Step one cell; stops at the board edge.
    pub fn move_by(&mut self, direction: Direction) -> Coord {
        if let Some(next) = direction.step(self.at) {
            if next.row < self.height && next.col < self.width {
                self.at = next;
            }
        }
        self.at
    }

    /// Jump to `at` (e.g. after a mouse click). Off-board targets are ignored.
    pub fn set(&mut self, at: Coord) -> bool {
        if at.row < self.height && at.col < self.width {
            self.at = at;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stops_at_edges() {
        let mut cursor = BoardCursor::new(3, 2);
        assert_eq!(cursor.move_by(Direction::Up), Coord::new(0, 0));
        assert_eq!(cursor.move_by(Direction::Left), Coord::new(0, 0));
        cursor.move_by(Direction::Right);
        cursor.move_by(Direction::Right);
        assert_eq!(cursor.move_by(Direction::Right), Coord::new(0, 2));
        cursor.move_by(Direction::Down);
        assert_eq!(cursor.move_by(Direction::Down), Coord::new(1, 2));
    }

    #[test]
    fn test_set_ignores_off_board() {
        let mut cursor = BoardCursor::new(10, 10);
        assert!(cursor.set(Coord::new(9, 9)));
        assert!(!cursor.set(Coord::new(10, 0)));
        assert_eq!(cursor.position(), Coord::new(9, 9));
    }
}
