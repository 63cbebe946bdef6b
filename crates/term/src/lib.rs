//! Terminal front-end for the marble board.
//!
//! Rendering goes through a small framebuffer instead of a widget toolkit:
//! [`BoardView`] paints a [`core::GameSnapshot`] into a [`FrameBuffer`] and
//! [`TerminalRenderer`] flushes only what changed since the last frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use lines_core as core;
pub use lines_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{color_rgb, BoardLayout, BoardView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
