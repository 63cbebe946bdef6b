//! Board tests

use lines::core::{Board, Item, ItemId, LinesError};
use lines::types::{Color, Coord};

fn ball(id: u32, color: Color) -> Item {
    Item::new(ItemId(id), color)
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(10, 12);
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 12);
    assert_eq!(board.len(), 120);

    for at in board.coords() {
        let cell = board.cell_at(at).unwrap();
        assert!(cell.is_empty(), "cell {} should be empty", at);
        assert!(!cell.selected());
        assert_eq!(cell.preview(), None);
    }
    assert_eq!(board.empty_cells().len(), 120);
    assert!(board.filled_cells().is_empty());
}

#[test]
fn test_board_out_of_bounds() {
    let mut board = Board::new(10, 10);
    let outside = Coord::new(3, 10);

    assert!(!board.contains(outside));
    assert_eq!(
        board.cell_at(outside).unwrap_err(),
        LinesError::OutOfBounds {
            at: outside,
            width: 10,
            height: 10
        }
    );
    assert!(board.place(outside, ball(1, Color::Gold)).is_err());
    assert!(board.set_selected(outside, true).is_err());
}

#[test]
fn test_empty_and_filled_partition_the_board() {
    let mut board = Board::new(10, 10);
    board.place(Coord::new(0, 9), ball(1, Color::Gold)).unwrap();
    board.place(Coord::new(5, 5), ball(2, Color::Coral)).unwrap();
    board.place(Coord::new(9, 0), ball(3, Color::White)).unwrap();

    let empty = board.empty_cells();
    let filled = board.filled_cells();
    assert_eq!(empty.len() + filled.len(), 100);
    assert_eq!(
        filled,
        vec![Coord::new(0, 9), Coord::new(5, 5), Coord::new(9, 0)]
    );
    assert!(filled.iter().all(|c| !empty.contains(c)));
}

#[test]
fn test_place_take_and_locate() {
    let mut board = Board::new(10, 10);
    let at = Coord::new(4, 7);

    assert_eq!(board.place(at, ball(42, Color::DeepPink)).unwrap(), None);
    assert_eq!(board.color_at(at), Some(Color::DeepPink));
    assert_eq!(board.locate(ItemId(42)), Some(at));

    let taken = board.take(at).unwrap();
    assert_eq!(taken.map(|i| i.id), Some(ItemId(42)));
    assert!(board.is_empty_at(at));
    assert_eq!(board.locate(ItemId(42)), None);
}

#[test]
fn test_reset_cell_clears_flags() {
    let mut board = Board::new(10, 10);
    let at = Coord::new(1, 1);
    board.place(at, ball(1, Color::Gold)).unwrap();
    board.set_selected(at, true).unwrap();
    board.set_preview(at, Some(Color::Brown)).unwrap();

    board.reset_cell(at).unwrap();
    let cell = board.cell_at(at).unwrap();
    assert!(cell.is_empty());
    assert!(!cell.selected());
    assert_eq!(cell.preview(), None);
}

#[test]
fn test_neighbor_respects_edges() {
    let board = Board::new(3, 3);
    assert_eq!(board.neighbor(Coord::new(0, 0), -1, 0), None);
    assert_eq!(board.neighbor(Coord::new(0, 0), 0, -1), None);
    assert_eq!(board.neighbor(Coord::new(2, 2), 1, 1), None);
    assert_eq!(
        board.neighbor(Coord::new(1, 1), 1, -1),
        Some(Coord::new(2, 0))
    );
}

#[test]
fn test_clear_wipes_everything() {
    let mut board = Board::new(10, 10);
    board.place(Coord::new(2, 2), ball(1, Color::Gold)).unwrap();
    board.set_preview(Coord::new(3, 3), Some(Color::Gold)).unwrap();
    board.clear();

    assert_eq!(board.empty_cells().len(), 100);
    assert!(board.cells().iter().all(|c| c.preview().is_none()));
}
