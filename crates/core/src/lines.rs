//! Line detection and clearing.
//!
//! Axes are checked in a fixed order (horizontal, vertical, diagonal,
//! anti-diagonal) and only the first qualifying one is reported. A ball that
//! completes two runs at once therefore clears a single run.

use crate::board::Board;
use crate::error::LinesError;
use crate::events::EventLog;
use crate::types::{Coord, GameEvent};

/// Each axis as its two opposite `(d_row, d_col)` directions.
const AXES: [[(i8, i8); 2]; 4] = [
    // horizontal: left, right
    [(0, -1), (0, 1)],
    // vertical: up, down
    [(-1, 0), (1, 0)],
    // diagonal: up-left, down-right
    [(-1, -1), (1, 1)],
    // anti-diagonal: up-right, down-left
    [(-1, 1), (1, -1)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDetector {
    items_in_line: u8,
}

impl LineDetector {
    pub fn new(items_in_line: u8) -> Self {
        Self { items_in_line }
    }

    pub fn items_in_line(&self) -> u8 {
        self.items_in_line
    }

    /// The run through `at`, if one is long enough.
    ///
    /// The returned cells start with `at`, followed by the cells found walking
    /// the axis' first direction, then its second direction.
    pub fn run_through(&self, board: &Board, at: Coord) -> Option<Vec<Coord>> {
        let color = board.color_at(at)?;

        for axis in AXES {
            let mut run = vec![at];
            for (d_row, d_col) in axis {
                let mut cursor = at;
                while let Some(next) = board.neighbor(cursor, d_row, d_col) {
                    if board.color_at(next) != Some(color) {
                        break;
                    }
                    run.push(next);
                    cursor = next;
                }
            }

            if run.len() >= self.items_in_line as usize {
                return Some(run);
            }
        }

        None
    }

    /// Wipe every cell of `run` and report how many were cleared.
    pub fn clear(
        &self,
        board: &mut Board,
        run: &[Coord],
        events: &mut EventLog,
    ) -> Result<usize, LinesError> {
        for &at in run {
            let cell = *board.cell_at(at)?;
            board.reset_cell(at)?;

            events.push(GameEvent::CellChanged { at });
            if cell.selected() {
                events.push(GameEvent::CellSelectedChanged { at, selected: false });
            }
            if cell.preview().is_some() {
                events.push(GameEvent::CellPreviewChanged { at, color: None });
            }
        }

        let count = run.len();
        events.push(GameEvent::LineCleared { count });
        log::debug!("cleared a run of {}", count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Item, ItemId};
    use crate::types::Color;

    fn put(board: &mut Board, row: u8, col: u8, color: Color) {
        let id = ItemId((row as u32) * 100 + col as u32);
        board.place(Coord::new(row, col), Item::new(id, color)).unwrap();
    }

    #[test]
    fn test_empty_cell_has_no_run() {
        let board = Board::new(10, 10);
        assert_eq!(LineDetector::new(5).run_through(&board, Coord::new(3, 3)), None);
    }

    #[test]
    fn test_horizontal_run_order() {
        let mut board = Board::new(10, 10);
        for col in 2..7 {
            put(&mut board, 4, col, Color::Gold);
        }

        let run = LineDetector::new(5)
            .run_through(&board, Coord::new(4, 4))
            .unwrap();
        assert_eq!(
            run,
            vec![
                Coord::new(4, 4),
                Coord::new(4, 3),
                Coord::new(4, 2),
                Coord::new(4, 5),
                Coord::new(4, 6),
            ]
        );
    }

    #[test]
    fn test_run_stops_at_other_color() {
        let mut board = Board::new(10, 10);
        for col in 0..4 {
            put(&mut board, 0, col, Color::Gold);
        }
        put(&mut board, 0, 4, Color::Brown);
        put(&mut board, 0, 5, Color::Gold);

        assert_eq!(LineDetector::new(5).run_through(&board, Coord::new(0, 0)), None);
        assert_eq!(
            LineDetector::new(4)
                .run_through(&board, Coord::new(0, 0))
                .map(|r| r.len()),
            Some(4)
        );
    }

    #[test]
    fn test_anti_diagonal_run() {
        let mut board = Board::new(10, 10);
        for i in 0..5u8 {
            put(&mut board, i, 8 - i, Color::LimeGreen);
        }

        let run = LineDetector::new(5)
            .run_through(&board, Coord::new(2, 6))
            .unwrap();
        assert_eq!(run.len(), 5);
        assert!(run.contains(&Coord::new(0, 8)));
        assert!(run.contains(&Coord::new(4, 4)));
    }

    #[test]
    fn test_longer_runs_are_returned_whole() {
        let mut board = Board::new(10, 10);
        for row in 1..8 {
            put(&mut board, row, 0, Color::White);
        }
        let run = LineDetector::new(5)
            .run_through(&board, Coord::new(7, 0))
            .unwrap();
        assert_eq!(run.len(), 7);
    }

    #[test]
    fn test_clear_emits_events() {
        let mut board = Board::new(10, 10);
        for col in 0..5 {
            put(&mut board, 9, col, Color::Coral);
        }
        board.set_preview(Coord::new(9, 0), Some(Color::Gold)).unwrap();

        let detector = LineDetector::new(5);
        let run = detector.run_through(&board, Coord::new(9, 2)).unwrap();
        let mut events = EventLog::new();
        let count = detector.clear(&mut board, &run, &mut events).unwrap();

        assert_eq!(count, 5);
        assert_eq!(board.filled_cells().len(), 0);
        assert_eq!(board.cell_at(Coord::new(9, 0)).unwrap().preview(), None);
        assert_eq!(
            events.pending().last(),
            Some(&GameEvent::LineCleared { count: 5 })
        );
        assert!(events.pending().contains(&GameEvent::CellPreviewChanged {
            at: Coord::new(9, 0),
            color: None
        }));
    }
}
