//! Terminal marble puzzle runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `lines_term`. Moves are animated by calling `advance_move` once per
//! configured step interval.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use lines::core::{CommandOutcome, GameConfig, GameSnapshot, GameState, SelectOutcome};
use lines::input::{map_key, map_mouse, should_quit, BoardCursor, InputAction};
use lines::logging;
use lines::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use lines::types::{Command, Difficulty};

/// Line up five marbles of one color to clear them.
#[derive(Parser)]
#[command(name = "lines", about = "Five-in-a-row marble puzzle for the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "lines.toml")]
    config: PathBuf,

    /// Board size preset: easy, medium or hard
    #[arg(long)]
    difficulty: Option<String>,

    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u32>,

    /// Write log records to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log every move step
    #[arg(long, short)]
    verbose: bool,
}

/// How long to wait for input while no move is animating.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init_log_file(path, logging::level_for(cli.verbose))
            .with_context(|| format!("opening log file {}", path.display()))?;
    }

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(name) = &cli.difficulty {
        let Some(difficulty) = Difficulty::from_str(name) else {
            bail!("unknown difficulty '{}' (expected 'easy', 'medium', or 'hard')", name);
        };
        config.difficulty = difficulty;
    }
    config.validate().context("invalid configuration")?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!(
        "starting {} game ({}x{}), seed {}",
        config.difficulty.as_str(),
        config.dimensions().0,
        config.dimensions().1,
        seed
    );

    let mut game = GameState::new(config, seed)?;
    game.start();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::info!(
        "exiting with score {} after {} resets",
        game.score(),
        game.episode_id()
    );
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = BoardView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut cursor = BoardCursor::new(game.board().width(), game.board().height());

    let step = Duration::from_millis(game.config().move_step_ms as u64);
    let mut last_step = Instant::now();
    let mut dirty = true;

    loop {
        for ev in game.drain_events() {
            log::debug!("event {:?}", ev);
            dirty = true;
        }

        let viewport = current_viewport();
        if dirty {
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Some(cursor.position()), viewport, &mut fb);
            term.present(&mut fb)?;
            dirty = false;
        }

        let timeout = if game.is_moving() {
            step.saturating_sub(last_step.elapsed())
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(key) {
                        let command = match action {
                            InputAction::Cursor(direction) => {
                                cursor.move_by(direction);
                                None
                            }
                            InputAction::Activate => Some(Command::SelectOrMove {
                                at: cursor.position(),
                            }),
                            InputAction::Reset => Some(Command::Reset),
                            InputAction::TogglePreview => Some(Command::TogglePreview),
                        };
                        if let Some(command) = command {
                            if issue(game, command) {
                                last_step = Instant::now();
                            }
                        }
                        dirty = true;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some((x, y)) = map_mouse(mouse) {
                        if let Some(at) = view.cell_at_screen(&snap, viewport, x, y) {
                            cursor.set(at);
                            if issue(game, Command::SelectOrMove { at }) {
                                last_step = Instant::now();
                            }
                            dirty = true;
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if game.is_moving() && last_step.elapsed() >= step {
            last_step = Instant::now();
            game.advance_move();
            dirty = true;
        }
    }
}

/// Apply a command; true when it started a move.
fn issue(game: &mut GameState, command: Command) -> bool {
    match game.apply_command(command) {
        Ok(CommandOutcome::Select(SelectOutcome::MoveStarted { .. })) => true,
        Ok(_) => false,
        Err(err) => {
            log::warn!("{:?} rejected: {}", command, err);
            false
        }
    }
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}
