//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`InputAction`]s and keeps the
//! keyboard [`BoardCursor`]. Turning a cursor position or a click into a
//! [`crate::types::Command`] is up to the front-end, which knows the board
//! layout on screen.

pub mod cursor;
pub mod map;

pub use lines_types as types;

pub use cursor::BoardCursor;
pub use map::{map_key, map_mouse, should_quit, Direction, InputAction};
