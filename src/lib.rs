//! Lines: a five-in-a-row marble puzzle (workspace facade crate).
//!
//! The game rules live in `lines_core`, the terminal front-end in
//! `lines_term` and `lines_input`; this package re-exports them under one
//! roof and adds the file logger used by the binary.

pub mod logging;

pub use lines_core as core;
pub use lines_input as input;
pub use lines_term as term;
pub use lines_types as types;
