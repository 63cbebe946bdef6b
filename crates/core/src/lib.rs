//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the five-in-a-row marble puzzle and nothing
//! else. It does no terminal, file or network I/O (apart from reading a config
//! file on request), so it can be driven by the terminal front-end, a test or a
//! benchmark alike:
//!
//! - **Deterministic**: the same seed and the same clicks produce the same game
//! - **Observable**: every state change is reported as a [`types::GameEvent`]
//! - **Step-wise**: moves advance one cell per call, the caller owns the clock
//!
//! # Module Structure
//!
//! - [`board`]: grid of cells holding balls, selection and preview hints
//! - [`palette`]: the colors used in one session
//! - [`path`]: shortest-route search and the move in flight
//! - [`lines`]: run detection and clearing
//! - [`spawn`]: generating, telegraphing and placing new balls
//! - [`game_state`]: the match controller tying it all together
//! - [`config`]: TOML-loadable session settings
//!
//! # Example
//!
//! ```
//! use lines_core::{GameConfig, GameState, MoveProgress, SelectOutcome};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345).unwrap();
//! game.start();
//! assert_eq!(game.board().filled_cells().len(), 5);
//!
//! let ball = game.board().filled_cells()[0];
//! assert_eq!(game.select_or_move(ball).unwrap(), SelectOutcome::Selected(ball));
//!
//! // Move to the first reachable empty cell and let it settle.
//! let target = game
//!     .board()
//!     .empty_cells()
//!     .into_iter()
//!     .find(|&c| !game.find_path(ball, c).is_empty())
//!     .unwrap();
//! game.select_or_move(target).unwrap();
//! assert!(matches!(game.finish_move(), MoveProgress::Settled { .. }));
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod game_state;
pub mod lines;
pub mod palette;
pub mod path;
pub mod rng;
pub mod snapshot;
pub mod spawn;

pub use lines_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Item, ItemId};
pub use config::GameConfig;
pub use error::{ConfigError, LinesError};
pub use events::EventLog;
pub use game_state::{CommandOutcome, GameState, MoveProgress, SelectOutcome};
pub use lines::LineDetector;
pub use palette::Palette;
pub use path::{find_path, MoveSequence};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use snapshot::{CellSnapshot, GameSnapshot};
pub use spawn::{PreviewOutcome, SpawnQueue, SpawnReport};
