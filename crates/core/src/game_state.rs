//! Game state module - the match controller
//!
//! [`GameState`] ties the board, palette, spawn queue, line detector and RNG
//! together and runs the turn cycle:
//!
//! 1. the player selects a ball ([`GameState::select_or_move`] on a filled cell)
//! 2. the player picks an empty destination; a path is searched
//! 3. the front-end drives the move with [`GameState::advance_move`], one cell
//!    per call, then one final call settles it
//! 4. a run through the destination is cleared, otherwise the next batch lands
//! 5. running out of room for a batch loses the session
//!
//! Everything observable is also reported as [`GameEvent`]s, drained with
//! [`GameState::drain_events`].

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{ConfigError, LinesError};
use crate::events::EventLog;
use crate::lines::LineDetector;
use crate::palette::Palette;
use crate::path::{find_path, MoveSequence};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{CellSnapshot, GameSnapshot};
use crate::spawn::{PreviewOutcome, SpawnContext, SpawnQueue, SpawnReport};
use crate::types::{Color, Command, Coord, GameEvent, GameStatus};

/// Answer to a [`GameState::select_or_move`] click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing to do: empty cell with no selection, the already selected cell,
    /// or the session is over.
    Ignored,
    /// The ball at this cell is now the move source.
    Selected(Coord),
    /// A move is in flight; drive it with `advance_move`.
    MoveStarted { steps: usize },
    /// No open route to the destination.
    MoveRejected,
    /// Another move is still in flight.
    Busy,
}

/// Progress of the move in flight after one [`GameState::advance_move`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveProgress {
    /// No move in flight.
    Idle,
    /// The ball moved one cell.
    Step { from: Coord, to: Coord },
    /// The ball arrived and the turn was resolved. `cleared` is the length of
    /// the run completed by the move, if any.
    Settled { at: Coord, cleared: Option<usize> },
}

/// Answer to [`GameState::apply_command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Select(SelectOutcome),
    Reset,
    PreviewToggled { visible: bool },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimpleRng> {
    config: GameConfig,
    board: Board,
    palette: Palette,
    spawn: SpawnQueue,
    detector: LineDetector,
    rng: R,
    events: EventLog,
    active: Option<Coord>,
    moving: Option<MoveSequence>,
    score: u32,
    status: GameStatus,
    show_next_colors: bool,
    started: bool,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Seed the RNG started from; 0 when the caller supplied the RNG.
    seed: u32,
}

impl GameState<SimpleRng> {
    /// Create a new session with the default RNG and the given seed
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        let rng = SimpleRng::new(seed);
        // Seed 0 is remapped by the RNG; record the value that replays.
        let seed = rng.state();
        let mut state = Self::with_rng(config, rng)?;
        state.seed = seed;
        Ok(state)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new session drawing all randomness from `rng`.
    ///
    /// The palette is drawn immediately; the board stays empty until
    /// [`start`](Self::start).
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let palette = Palette::draw(config.colors_on_field as usize, &mut rng);
        let (width, height) = config.dimensions();
        Ok(Self::assemble(config, Board::new(width, height), palette, rng))
    }

    /// Resume from a prepared board, e.g. a puzzle or a test scenario.
    ///
    /// The session counts as started; no batch is spawned.
    pub fn with_board(
        config: GameConfig,
        board: Board,
        palette: Palette,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if config.dimensions() != (board.width(), board.height()) {
            return Err(ConfigError::Validation(format!(
                "board is {}x{} but the config asks for {}x{}",
                board.width(),
                board.height(),
                config.dimensions().0,
                config.dimensions().1
            )));
        }
        if palette.is_empty() {
            return Err(ConfigError::Validation("palette is empty".to_string()));
        }
        let mut state = Self::assemble(config, board, palette, rng);
        state.started = true;
        Ok(state)
    }

    fn assemble(config: GameConfig, board: Board, palette: Palette, rng: R) -> Self {
        Self {
            detector: LineDetector::new(config.items_in_line),
            show_next_colors: config.show_next_colors,
            config,
            board,
            palette,
            spawn: SpawnQueue::new(),
            rng,
            events: EventLog::new(),
            active: None,
            moving: None,
            score: 0,
            status: GameStatus::Running,
            started: false,
            episode_id: 0,
            seed: 0,
        }
    }

    /// Spawn the first batch. Only the first call has an effect.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.begin_turn_cycle();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn spawn_queue(&self) -> &SpawnQueue {
        &self.spawn
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The selected move source, if any.
    pub fn active_cell(&self) -> Option<Coord> {
        self.active
    }

    pub fn is_moving(&self) -> bool {
        self.moving.is_some()
    }

    pub fn show_next_colors(&self) -> bool {
        self.show_next_colors
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Seed that replays this session through [`GameState::new`].
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn upcoming_colors(&self) -> Vec<Color> {
        self.spawn.upcoming_colors()
    }

    /// Take every notification emitted since the last drain.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain()
    }

    /// Notifications emitted since the last drain, without consuming them.
    pub fn pending_events(&self) -> &[GameEvent] {
        self.events.pending()
    }

    /// Wipe the board and queue, zero the score and spawn a fresh batch.
    ///
    /// A move in flight is abandoned without further steps.
    pub fn reset(&mut self) {
        if let Some(seq) = self.moving.take() {
            log::debug!("reset abandons move {} -> {}", seq.origin(), seq.destination());
        }
        self.active = None;

        self.score = 0;
        self.events.push(GameEvent::ScoreChanged { score: 0 });
        self.set_status(GameStatus::Running);

        self.board.clear();
        self.spawn.clear();
        self.events.push(GameEvent::BoardReset);

        self.episode_id = self.episode_id.wrapping_add(1);
        self.started = true;
        log::info!("session reset (episode {})", self.episode_id);

        self.begin_turn_cycle();
    }

    fn begin_turn_cycle(&mut self) {
        let n = self.config.spawn_per_turn as usize;
        self.materialize(n);
    }

    /// Flip whether spawn targets are shown; returns the new visibility.
    pub fn toggle_next_preview_visibility(&mut self) -> bool {
        self.show_next_colors = !self.show_next_colors;
        self.events.push(GameEvent::PreviewVisibilityChanged {
            visible: self.show_next_colors,
        });
        self.show_next_colors
    }

    /// Handle a click on a cell.
    ///
    /// A filled cell becomes the selection (replacing any previous one). An
    /// empty cell, while something is selected, starts a move there if a route
    /// exists.
    pub fn select_or_move(&mut self, at: Coord) -> Result<SelectOutcome, LinesError> {
        let cell = *self.board.cell_at(at)?;

        if self.status.is_terminal() {
            return Ok(SelectOutcome::Ignored);
        }
        if self.moving.is_some() {
            return Ok(SelectOutcome::Busy);
        }

        if !cell.is_empty() {
            if cell.selected() {
                return Ok(SelectOutcome::Ignored);
            }
            if let Some(previous) = self.active.take() {
                self.set_selected(previous, false);
            }
            self.set_selected(at, true);
            self.active = Some(at);
            log::debug!("selected {}", at);
            return Ok(SelectOutcome::Selected(at));
        }

        let Some(origin) = self.active else {
            return Ok(SelectOutcome::Ignored);
        };

        let path = find_path(&self.board, origin, at);
        if path.is_empty() {
            log::debug!("no route {} -> {}", origin, at);
            return Ok(SelectOutcome::MoveRejected);
        }
        Ok(self.apply_move(path))
    }

    /// Start moving the ball at `path[0]` along `path`.
    ///
    /// The path must be a chain of orthogonal steps from a filled cell through
    /// empty cells; anything else is rejected. The origin becomes the
    /// selection if it was not already.
    pub fn apply_move(&mut self, path: Vec<Coord>) -> SelectOutcome {
        if self.status.is_terminal() {
            return SelectOutcome::Ignored;
        }
        if self.moving.is_some() {
            return SelectOutcome::Busy;
        }
        if !self.is_walkable(&path) {
            return SelectOutcome::MoveRejected;
        }
        let Some(seq) = MoveSequence::new(path) else {
            return SelectOutcome::MoveRejected;
        };

        let origin = seq.origin();
        if self.active != Some(origin) {
            if let Some(previous) = self.active.take() {
                self.set_selected(previous, false);
            }
            self.set_selected(origin, true);
            self.active = Some(origin);
        }

        let steps = seq.remaining();
        log::debug!("moving {} -> {} in {} steps", origin, seq.destination(), steps);
        self.moving = Some(seq);
        SelectOutcome::MoveStarted { steps }
    }

    fn is_walkable(&self, path: &[Coord]) -> bool {
        let Some((&first, rest)) = path.split_first() else {
            return false;
        };
        self.board.contains(first)
            && !self.board.is_empty_at(first)
            && rest.iter().all(|&at| self.board.is_empty_at(at))
            && path.windows(2).all(|pair| pair[0].manhattan(pair[1]) == 1)
    }

    /// Advance the move in flight by one transition.
    pub fn advance_move(&mut self) -> MoveProgress {
        let Some(seq) = self.moving.as_mut() else {
            return MoveProgress::Idle;
        };

        if let Some((from, to)) = seq.next_hop() {
            match self.board.take(from) {
                Ok(Some(item)) => {
                    let displaced = self.board.place(to, item);
                    debug_assert!(
                        matches!(displaced, Ok(None)),
                        "move step onto {to}: {displaced:?}"
                    );
                }
                other => log::warn!("move step from {} found {:?}", from, other),
            }
            self.events.push(GameEvent::CellChanged { at: from });
            self.events.push(GameEvent::CellChanged { at: to });
            self.events.push(GameEvent::MoveStep { from, to });
            log::trace!("step {} -> {}", from, to);
            return MoveProgress::Step { from, to };
        }

        let origin = seq.origin();
        let at = seq.destination();
        self.moving = None;
        let cleared = self.settle(origin, at);
        MoveProgress::Settled { at, cleared }
    }

    /// Run the move in flight to completion and return its final progress.
    pub fn finish_move(&mut self) -> MoveProgress {
        let mut last = MoveProgress::Idle;
        loop {
            match self.advance_move() {
                MoveProgress::Idle => return last,
                MoveProgress::Step { from, to } => last = MoveProgress::Step { from, to },
                settled @ MoveProgress::Settled { .. } => return settled,
            }
        }
    }

    fn settle(&mut self, origin: Coord, at: Coord) -> Option<usize> {
        self.set_selected(origin, false);
        self.active = None;

        match self.detector.run_through(&self.board, at) {
            Some(run) => match self.clear_run(&run) {
                Ok(count) => Some(count),
                Err(err) => {
                    log::warn!("cannot clear run through {}: {}", at, err);
                    None
                }
            },
            None => {
                let n = self.config.spawn_per_turn as usize;
                self.materialize(n);
                None
            }
        }
    }

    /// Search a route between two cells on the current board.
    pub fn find_path(&self, start: Coord, destination: Coord) -> Vec<Coord> {
        find_path(&self.board, start, destination)
    }

    /// The qualifying run through `at`, if any.
    pub fn run_through(&self, at: Coord) -> Option<Vec<Coord>> {
        self.detector.run_through(&self.board, at)
    }

    /// Clear a run and score it.
    pub fn clear_run(&mut self, run: &[Coord]) -> Result<usize, LinesError> {
        let count = self.detector.clear(&mut self.board, run, &mut self.events)?;
        self.add_cleared(count);
        self.forget_cleared_selection();
        Ok(count)
    }

    /// Generate `n` pending balls without targets.
    pub fn generate(&mut self, n: usize) {
        self.spawn
            .generate(n, &self.palette, &mut self.rng, &mut self.events);
    }

    /// Assign targets to `n` balls; loses the session if the board is too full.
    pub fn preview(&mut self, n: usize) -> PreviewOutcome {
        let outcome = self.with_spawn(|queue, ctx| queue.preview(n, ctx));
        if outcome == PreviewOutcome::Exhausted {
            self.lose();
        }
        outcome
    }

    /// Land `n` previewed balls and telegraph the next batch.
    pub fn materialize(&mut self, n: usize) -> SpawnReport {
        let report = self.with_spawn(|queue, ctx| queue.materialize(n, ctx));
        for &count in &report.cleared {
            self.add_cleared(count);
        }
        if !report.cleared.is_empty() {
            self.forget_cleared_selection();
        }
        if report.exhausted {
            self.lose();
        }
        report
    }

    fn with_spawn<T>(
        &mut self,
        f: impl FnOnce(&mut SpawnQueue, &mut SpawnContext<'_, R>) -> T,
    ) -> T {
        let mut ctx = SpawnContext {
            board: &mut self.board,
            palette: &self.palette,
            rng: &mut self.rng,
            events: &mut self.events,
            detector: self.detector,
            spawn_per_turn: self.config.spawn_per_turn as usize,
        };
        f(&mut self.spawn, &mut ctx)
    }

    /// Score a cleared run: the square of its length.
    fn add_cleared(&mut self, count: usize) {
        let count = count as u32;
        self.score = self.score.saturating_add(count.saturating_mul(count));
        self.events.push(GameEvent::ScoreChanged { score: self.score });
    }

    fn forget_cleared_selection(&mut self) {
        if self.moving.is_some() {
            return;
        }
        if let Some(active) = self.active {
            if self.board.is_empty_at(active) {
                self.active = None;
            }
        }
    }

    fn lose(&mut self) {
        if self.status != GameStatus::Lost {
            log::info!("session lost with score {}", self.score);
        }
        self.set_status(GameStatus::Lost);
    }

    fn set_status(&mut self, status: GameStatus) {
        if self.status != status {
            self.status = status;
            self.events.push(GameEvent::StatusChanged { status });
        }
    }

    fn set_selected(&mut self, at: Coord, selected: bool) {
        if self.board.set_selected(at, selected).is_ok() {
            self.events
                .push(GameEvent::CellSelectedChanged { at, selected });
        }
    }

    /// Apply a presentation-layer command
    pub fn apply_command(&mut self, command: Command) -> Result<CommandOutcome, LinesError> {
        match command {
            Command::SelectOrMove { at } => self.select_or_move(at).map(CommandOutcome::Select),
            Command::Reset => {
                self.reset();
                Ok(CommandOutcome::Reset)
            }
            Command::TogglePreview => Ok(CommandOutcome::PreviewToggled {
                visible: self.toggle_next_preview_visibility(),
            }),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.cells.clear();
        out.cells
            .extend(self.board.cells().iter().map(CellSnapshot::from));
        out.palette.clear();
        out.palette.extend_from_slice(self.palette.colors());
        out.upcoming = self.spawn.upcoming_colors();
        out.active = self.active;
        out.moving = self.moving.is_some();
        out.show_next_colors = self.show_next_colors;
        out.status = self.status;
        out.score = self.score;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        let config = GameConfig::default();
        let mut rng = SimpleRng::new(1);
        let palette = Palette::draw(config.colors_on_field as usize, &mut rng);
        let (width, height) = config.dimensions();
        let mut state = Self::assemble(config, Board::new(width, height), palette, rng);
        state.seed = 1;
        state
    }
}
