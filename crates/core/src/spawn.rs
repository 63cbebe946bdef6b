//! Spawn queue - generating, telegraphing and placing new balls
//!
//! New balls go through two stages before they land:
//!
//! 1. **pending**: generated with a color, no target yet
//! 2. **previewed**: paired with an empty target cell that shows a color hint
//!
//! [`SpawnQueue::materialize`] then moves previewed balls onto the board. A
//! target may have been filled by the player in the meantime; the ball then
//! lands on a random empty cell instead. Running out of empty cells while
//! picking targets is how a session is lost.

use std::collections::VecDeque;

use crate::board::{Board, Item, ItemId};
use crate::events::EventLog;
use crate::lines::LineDetector;
use crate::palette::Palette;
use crate::rng::RandomSource;
use crate::types::{Color, Coord, GameEvent};

/// The session pieces the queue reads and mutates while spawning.
pub struct SpawnContext<'a, R: RandomSource> {
    pub board: &'a mut Board,
    pub palette: &'a Palette,
    pub rng: &'a mut R,
    pub events: &'a mut EventLog,
    pub detector: LineDetector,
    /// Batch size used to refill previews after materializing.
    pub spawn_per_turn: usize,
}

/// Result of [`SpawnQueue::preview`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewOutcome {
    Ready,
    /// Not enough empty cells: the session is lost.
    Exhausted,
}

/// What a call to [`SpawnQueue::materialize`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnReport {
    /// Cells that received a ball, in placement order.
    pub placed: Vec<Coord>,
    /// Length of every run cleared by a placed ball.
    pub cleared: Vec<usize>,
    /// The board ran out of room; the session is lost.
    pub exhausted: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SpawnQueue {
    pending: VecDeque<Item>,
    previewed: VecDeque<(Coord, Item)>,
    next_id: u32,
}

impl SpawnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every pending and previewed ball. Item ids keep counting up.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.previewed.clear();
    }

    pub fn pending(&self) -> impl Iterator<Item = &Item> + '_ {
        self.pending.iter()
    }

    pub fn previewed(&self) -> impl Iterator<Item = &(Coord, Item)> + '_ {
        self.previewed.iter()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn previewed_len(&self) -> usize {
        self.previewed.len()
    }

    /// Colors of the previewed balls, in the order they will land.
    pub fn upcoming_colors(&self) -> Vec<Color> {
        self.previewed.iter().map(|(_, item)| item.color).collect()
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Append `n` new balls with uniformly random palette colors.
    pub fn generate<R: RandomSource>(
        &mut self,
        n: usize,
        palette: &Palette,
        rng: &mut R,
        events: &mut EventLog,
    ) {
        for _ in 0..n {
            let Some(color) = palette.random_color(rng) else {
                break;
            };
            let id = self.allocate_id();
            self.pending.push_back(Item::new(id, color));
        }

        let colors = self.pending.iter().map(|item| item.color).collect();
        events.push(GameEvent::NextBatchGenerated { colors });
    }

    /// Assign target cells to `n` pending balls.
    pub fn preview<R: RandomSource>(
        &mut self,
        n: usize,
        ctx: &mut SpawnContext<'_, R>,
    ) -> PreviewOutcome {
        if self.pending.len() < n {
            let missing = n - self.pending.len();
            self.generate(missing, ctx.palette, &mut *ctx.rng, &mut *ctx.events);
        }

        let empty = ctx.board.empty_cells();
        let Some(targets) = ctx.rng.sample(&empty, n) else {
            log::info!(
                "only {} empty cells left, {} needed for the next batch",
                empty.len(),
                n
            );
            return PreviewOutcome::Exhausted;
        };

        for at in targets {
            let Some(item) = self.pending.pop_front() else {
                break;
            };
            if let Err(err) = ctx.board.set_preview(at, Some(item.color)) {
                log::warn!("cannot preview spawn target: {}", err);
            }
            ctx.events.push(GameEvent::CellPreviewChanged {
                at,
                color: Some(item.color),
            });
            self.previewed.push_back((at, item));
        }

        PreviewOutcome::Ready
    }

    /// Land `n` previewed balls, clearing any run they complete, then preview
    /// the next batch.
    pub fn materialize<R: RandomSource>(
        &mut self,
        n: usize,
        ctx: &mut SpawnContext<'_, R>,
    ) -> SpawnReport {
        let mut report = SpawnReport::default();

        if self.previewed.len() < n {
            let missing = n - self.previewed.len();
            if self.preview(missing, ctx) == PreviewOutcome::Exhausted {
                report.exhausted = true;
                return report;
            }
        }

        for _ in 0..n {
            let Some((target, item)) = self.previewed.pop_front() else {
                break;
            };

            if let Err(err) = ctx.board.set_preview(target, None) {
                log::warn!("cannot clear spawn preview: {}", err);
            }
            ctx.events.push(GameEvent::CellPreviewChanged {
                at: target,
                color: None,
            });

            let at = if ctx.board.is_empty_at(target) {
                target
            } else {
                let empty = ctx.board.empty_cells();
                match ctx.rng.pick(&empty) {
                    Some(fallback) => {
                        log::debug!("spawn target {} taken, landing on {}", target, fallback);
                        fallback
                    }
                    None => {
                        log::info!("no empty cell left for a spawned ball");
                        report.exhausted = true;
                        return report;
                    }
                }
            };

            match ctx.board.place(at, item) {
                Ok(displaced) => {
                    debug_assert!(displaced.is_none(), "spawned ball landed on a ball at {at}")
                }
                Err(err) => {
                    log::warn!("cannot land spawned ball: {}", err);
                    continue;
                }
            }
            ctx.events.push(GameEvent::CellChanged { at });
            report.placed.push(at);

            if let Some(run) = ctx.detector.run_through(&*ctx.board, at) {
                match ctx.detector.clear(&mut *ctx.board, &run, &mut *ctx.events) {
                    Ok(count) => report.cleared.push(count),
                    Err(err) => log::warn!("cannot clear run through {}: {}", at, err),
                }
            }
        }

        log::debug!(
            "materialized {} balls, cleared {} runs",
            report.placed.len(),
            report.cleared.len()
        );

        if self.preview(ctx.spawn_per_turn, ctx) == PreviewOutcome::Exhausted {
            report.exhausted = true;
        }
        report
    }
}
