use lines::core::{GameConfig, GameState};
use lines::term::{color_rgb, BoardView, Viewport};
use lines::types::{Coord, GameStatus};

#[test]
fn term_view_renders_border_corners() {
    let game = GameState::new(GameConfig::default(), 1).unwrap();
    let snap = game.snapshot();
    let view = BoardView::default();

    // 10 cells * 3 columns + border = 32 wide, 12 tall; the panel takes 20 more.
    let vp = Viewport::new(52, 12);
    let fb = view.render(&snap, None, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(31, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 11).unwrap().ch, '└');
    assert_eq!(fb.get(31, 11).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_every_ball_of_a_started_game() {
    let mut game = GameState::new(GameConfig::default(), 8).unwrap();
    game.start();
    let snap = game.snapshot();
    let view = BoardView::default();
    let vp = Viewport::new(52, 12);
    let fb = view.render(&snap, None, vp);

    for at in game.board().filled_cells() {
        let x = 1 + (at.col as u16) * 3 + 1;
        let y = 1 + at.row as u16;
        let glyph = fb.get(x, y).unwrap();
        assert_eq!(glyph.ch, '●', "ball at {}", at);
        let color = game.board().color_at(at).unwrap();
        assert_eq!(glyph.style.fg, color_rgb(color));
    }
}

#[test]
fn term_view_side_panel_shows_score_and_next() {
    let mut game = GameState::new(GameConfig::default(), 8).unwrap();
    game.start();
    let mut snap = game.snapshot();
    snap.score = 1234;

    let view = BoardView::default();
    let fb = view.render(&snap, None, Viewport::new(60, 14));
    let text: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();

    assert!(text.iter().any(|row| row.contains("SCORE")));
    assert!(text.iter().any(|row| row.contains("1234")));
    assert!(text.iter().any(|row| row.contains("NEXT")));
    assert!(text.iter().any(|row| row.contains("running")));
}

#[test]
fn term_view_hit_test_round_trip() {
    let game = GameState::new(GameConfig::with_difficulty(lines::types::Difficulty::Hard), 3).unwrap();
    let snap = game.snapshot();
    let view = BoardView::default();
    let vp = Viewport::new(100, 30);
    let layout = view.layout(snap.width, snap.height, vp);

    for at in [Coord::new(0, 0), Coord::new(14, 14), Coord::new(7, 3)] {
        let x = layout.x + 1 + (at.col as u16) * 3 + 2;
        let y = layout.y + 1 + at.row as u16;
        assert_eq!(view.cell_at_screen(&snap, vp, x, y), Some(at));
    }
    assert_eq!(view.cell_at_screen(&snap, vp, 0, 0), None);
}

#[test]
fn term_view_marks_loss() {
    let game = GameState::new(GameConfig::default(), 3).unwrap();
    let mut snap = game.snapshot();
    snap.status = GameStatus::Lost;

    let fb = BoardView::default().render(&snap, None, Viewport::new(52, 12));
    assert!((0..fb.height()).any(|y| fb.row_text(y).contains("GAME OVER")));
}
