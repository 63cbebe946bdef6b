//! Path finding and step-wise moves.
//!
//! Balls travel through empty cells using the four cardinal steps only. The
//! search expands the frontier one level at a time; before each level the
//! frontier is stably sorted so that tips farther from the destination (by
//! Manhattan distance) are expanded first, and each tip tries right, down,
//! left, up in that order. The first time the destination is generated the path
//! to it is returned. Because levels are expanded whole, the path length is
//! minimal; the ordering only decides which of several minimal paths is taken.

use std::cmp::Reverse;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::Coord;

/// Expansion order: right, down, left, up.
const STEPS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

fn open_neighbors(board: &Board, at: Coord) -> ArrayVec<Coord, 4> {
    let mut out = ArrayVec::new();
    for (d_row, d_col) in STEPS {
        if let Some(next) = board.neighbor(at, d_row, d_col) {
            if board.is_empty_at(next) {
                out.push(next);
            }
        }
    }
    out
}

/// Route from `start` to `destination` through empty cells, both ends included.
///
/// `start` itself may be occupied (it normally holds the ball being moved).
/// Returns an empty vector when `destination` is occupied, off the board, or
/// not reachable.
pub fn find_path(board: &Board, start: Coord, destination: Coord) -> Vec<Coord> {
    if !board.contains(start) || !board.is_empty_at(destination) {
        return Vec::new();
    }

    let width = board.width() as usize;
    let index = |c: Coord| (c.row as usize) * width + (c.col as usize);

    let mut visited = vec![false; board.len()];
    let mut came_from: Vec<Option<Coord>> = vec![None; board.len()];
    visited[index(start)] = true;

    let mut frontier = vec![start];
    while !frontier.is_empty() {
        frontier.sort_by_key(|tip| Reverse(tip.manhattan(destination)));

        let mut next_frontier = Vec::new();
        for &tip in &frontier {
            for next in open_neighbors(board, tip) {
                let i = index(next);
                if visited[i] {
                    continue;
                }
                visited[i] = true;
                came_from[i] = Some(tip);

                if next == destination {
                    let mut path = vec![destination];
                    let mut cursor = tip;
                    path.push(cursor);
                    while let Some(prev) = came_from[index(cursor)] {
                        path.push(prev);
                        cursor = prev;
                    }
                    path.reverse();
                    return path;
                }
                next_frontier.push(next);
            }
        }
        frontier = next_frontier;
    }

    Vec::new()
}

/// A move in flight: the path plus how far the ball has travelled along it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSequence {
    path: Vec<Coord>,
    step: usize,
}

impl MoveSequence {
    /// `None` for paths shorter than two cells.
    pub fn new(path: Vec<Coord>) -> Option<Self> {
        if path.len() < 2 {
            return None;
        }
        Some(Self { path, step: 0 })
    }

    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    pub fn origin(&self) -> Coord {
        self.path[0]
    }

    pub fn destination(&self) -> Coord {
        self.path[self.path.len() - 1]
    }

    /// Where the ball currently is.
    pub fn position(&self) -> Coord {
        self.path[self.step]
    }

    /// The ball has reached the destination.
    pub fn arrived(&self) -> bool {
        self.step + 1 >= self.path.len()
    }

    /// Steps still to go.
    pub fn remaining(&self) -> usize {
        self.path.len() - 1 - self.step
    }

    /// Advance one cell, returning `(from, to)`; `None` once arrived.
    pub fn next_hop(&mut self) -> Option<(Coord, Coord)> {
        if self.arrived() {
            return None;
        }
        let hop = (self.path[self.step], self.path[self.step + 1]);
        self.step += 1;
        Some(hop)
    }
}
