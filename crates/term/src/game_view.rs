//! BoardView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CellSnapshot, GameSnapshot};
use crate::fb::{FrameBuffer, GlyphStyle, Rgb};
use crate::types::{Color, Coord, GameStatus};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen placement of the board frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the frame.
    pub x: u16,
    pub y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SELECTED_BG: Rgb = Rgb::new(85, 85, 110);
const GRID_FG: Rgb = Rgb::new(90, 90, 100);
const CURSOR_FG: Rgb = Rgb::new(250, 250, 250);

/// Terminal colors for the ball palette.
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::BlueViolet => Rgb::new(138, 43, 226),
        Color::Brown => Rgb::new(165, 42, 42),
        Color::Coral => Rgb::new(255, 127, 80),
        Color::DarkGreen => Rgb::new(0, 100, 0),
        Color::DarkMagenta => Rgb::new(139, 0, 139),
        Color::DarkOrange => Rgb::new(255, 140, 0),
        Color::DeepPink => Rgb::new(255, 20, 147),
        Color::Gold => Rgb::new(255, 215, 0),
        Color::LimeGreen => Rgb::new(50, 205, 50),
        Color::MediumSlateBlue => Rgb::new(123, 104, 238),
        Color::OrangeRed => Rgb::new(255, 69, 0),
        Color::White => Rgb::new(255, 255, 255),
    }
}

/// A lightweight terminal renderer for the marble board.
pub struct BoardView {
    /// Board cell width in terminal columns. Three leaves room for cursor marks.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_w: 3,
            cell_h: 1,
        }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Where a `width` x `height` board lands inside `viewport` (centered).
    pub fn layout(&self, width: u8, height: u8, viewport: Viewport) -> BoardLayout {
        let frame_w = (width as u16) * self.cell_w + 2;
        let frame_h = (height as u16) * self.cell_h + 2;
        BoardLayout {
            x: viewport.width.saturating_sub(frame_w + PANEL_W) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// The board cell under screen position `(x, y)`, if any.
    pub fn cell_at_screen(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<Coord> {
        let layout = self.layout(snap.width, snap.height, viewport);
        let dx = x.checked_sub(layout.x + 1)?;
        let dy = y.checked_sub(layout.y + 1)?;
        let col = dx / self.cell_w;
        let row = dy / self.cell_h;
        if col >= snap.width as u16 || row >= snap.height as u16 {
            return None;
        }
        Some(Coord::new(row as u8, col as u8))
    }

    /// Render the snapshot into an existing framebuffer, with the keyboard
    /// cursor drawn at `cursor`.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<Coord>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(GlyphStyle::default().glyph(' '));

        let layout = self.layout(snap.width, snap.height, viewport);
        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            GlyphStyle::plain(GRID_FG, BOARD_BG),
        );
        fb.draw_frame(
            layout.x,
            layout.y,
            layout.frame_w,
            layout.frame_h,
            GlyphStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)),
        );

        for row in 0..snap.height {
            for col in 0..snap.width {
                let at = Coord::new(row, col);
                if let Some(cell) = snap.cell(at) {
                    self.draw_cell(fb, &layout, at, cell, snap.show_next_colors);
                }
            }
        }

        if let Some(at) = cursor {
            self.draw_cursor(fb, &layout, at);
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        if snap.status == GameStatus::Lost {
            self.draw_overlay(fb, &layout, "GAME OVER", "press r to restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, cursor: Option<Coord>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, layout: &BoardLayout, at: Coord) -> (u16, u16) {
        (
            layout.x + 1 + (at.col as u16) * self.cell_w,
            layout.y + 1 + (at.row as u16) * self.cell_h,
        )
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        at: Coord,
        cell: &CellSnapshot,
        show_preview: bool,
    ) {
        let (px, py) = self.cell_origin(layout, at);
        let bg = if cell.selected { SELECTED_BG } else { BOARD_BG };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', GlyphStyle::plain(GRID_FG, bg));

        let (ch, style) = match (cell.color, cell.preview) {
            (Some(color), _) => ('●', GlyphStyle::plain(color_rgb(color), bg).bold()),
            (None, Some(color)) if show_preview => {
                ('•', GlyphStyle::plain(color_rgb(color).faded(), bg))
            }
            _ => ('·', GlyphStyle::plain(GRID_FG, bg).dim()),
        };
        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, ch, style);
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, layout: &BoardLayout, at: Coord) {
        if self.cell_w < 3 {
            return;
        }
        let (px, py) = self.cell_origin(layout, at);
        let row = py + self.cell_h / 2;
        for x in [px, px + self.cell_w - 1] {
            let bg = fb.get(x, row).map(|g| g.style.bg).unwrap_or(BOARD_BG);
            let ch = if x == px { '[' } else { ']' };
            fb.put_char(x, row, ch, GlyphStyle::plain(CURSOR_FG, bg).bold());
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let black = Rgb::new(0, 0, 0);
        let label = GlyphStyle::plain(Rgb::new(220, 220, 220), black).bold();
        let value = GlyphStyle::plain(Rgb::new(200, 200, 200), black);

        let mut y = layout.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if snap.show_next_colors {
            let mut x = panel_x;
            for &color in &snap.upcoming {
                fb.put_char(x, y, '●', GlyphStyle::plain(color_rgb(color), black).bold());
                x = x.saturating_add(2);
            }
        } else {
            fb.put_str(panel_x, y, "hidden", value.dim());
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATUS", label);
        y = y.saturating_add(1);
        let status = if snap.moving {
            "moving"
        } else {
            snap.status.as_str()
        };
        fb.put_str(panel_x, y, status, value);
        y = y.saturating_add(2);

        let hint = value.dim();
        for line in ["space: pick/move", "n: toggle next", "r: restart", "q: quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &BoardLayout, title: &str, hint: &str) {
        let mid_y = layout.y.saturating_add(layout.frame_h / 2);
        let style = GlyphStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        for (dy, text) in [(0u16, title), (1, hint)] {
            let text_w = text.chars().count() as u16;
            let x = layout.x.saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, mid_y.saturating_add(dy), text, if dy == 0 { style } else { style.dim() });
        }
    }
}

/// Columns reserved right of the board for the side panel.
const PANEL_W: u16 = 20;

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(width: u8, height: u8) -> GameSnapshot {
        GameSnapshot {
            width,
            height,
            cells: vec![CellSnapshot::default(); (width as usize) * (height as usize)],
            show_next_colors: true,
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn hit_test_matches_drawn_cells() {
        let view = BoardView::default();
        let snap = snapshot(10, 10);
        let viewport = Viewport::new(80, 24);
        let layout = view.layout(10, 10, viewport);

        let (x, y) = view.cell_origin(&layout, Coord::new(3, 7));
        assert_eq!(view.cell_at_screen(&snap, viewport, x + 1, y), Some(Coord::new(3, 7)));
        assert_eq!(view.cell_at_screen(&snap, viewport, layout.x, layout.y), None);
        assert_eq!(
            view.cell_at_screen(&snap, viewport, layout.x + layout.frame_w, y),
            None
        );
    }

    #[test]
    fn ball_and_preview_glyphs() {
        let view = BoardView::default();
        let mut snap = snapshot(10, 10);
        snap.cells[0].color = Some(Color::Gold);
        snap.cells[1].preview = Some(Color::Coral);
        let viewport = Viewport::new(80, 24);
        let layout = view.layout(10, 10, viewport);

        let fb = view.render(&snap, None, viewport);
        let (bx, by) = view.cell_origin(&layout, Coord::new(0, 0));
        let ball = fb.get(bx + 1, by).unwrap();
        assert_eq!(ball.ch, '●');
        assert_eq!(ball.style.fg, color_rgb(Color::Gold));

        let (px, py) = view.cell_origin(&layout, Coord::new(0, 1));
        let hint = fb.get(px + 1, py).unwrap();
        assert_eq!(hint.ch, '•');
        assert_eq!(hint.style.fg, color_rgb(Color::Coral).faded());
        assert_ne!(hint.style.fg, color_rgb(Color::Coral));

        snap.show_next_colors = false;
        let fb = view.render(&snap, None, viewport);
        assert_eq!(fb.get(px + 1, py).unwrap().ch, '·');
    }

    #[test]
    fn selection_and_cursor_are_marked() {
        let view = BoardView::default();
        let mut snap = snapshot(10, 10);
        snap.cells[22].color = Some(Color::White);
        snap.cells[22].selected = true;
        let viewport = Viewport::new(80, 24);
        let layout = view.layout(10, 10, viewport);

        let fb = view.render(&snap, Some(Coord::new(2, 2)), viewport);
        let (x, y) = view.cell_origin(&layout, Coord::new(2, 2));
        assert_eq!(fb.get(x, y).unwrap().ch, '[');
        assert_eq!(fb.get(x + 2, y).unwrap().ch, ']');
        assert_eq!(fb.get(x + 1, y).unwrap().style.bg, SELECTED_BG);
    }

    #[test]
    fn lost_overlay() {
        let view = BoardView::default();
        let mut snap = snapshot(10, 10);
        snap.status = GameStatus::Lost;
        let viewport = Viewport::new(80, 24);
        let fb = view.render(&snap, None, viewport);

        let any_row_has = |needle: &str| (0..fb.height()).any(|y| fb.row_text(y).contains(needle));
        assert!(any_row_has("GAME OVER"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = BoardView::default();
        let snap = snapshot(15, 15);
        let fb = view.render(&snap, Some(Coord::new(14, 14)), Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
