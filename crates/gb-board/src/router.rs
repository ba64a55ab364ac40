//! Teleporter pathfinding.
//!
//! # Pluggability
//!
//! Decision engines call pathfinding through the [`Router`] trait, so a host
//! can swap in a different search (A*, obstacle-aware, cached) without touching
//! the decision cascade.  The default [`BfsRouter`] is a plain breadth-first
//! search over the open grid.
//!
//! # Search contract
//!
//! - Neighbours are expanded in [`Direction::CARDINALS`] order
//!   (east, south, west, north).
//! - A cell is entered at most once, and never if it is off the board or in
//!   the caller's [`DangerZone`].  The start cell itself is always expanded.
//! - The search stops at the first dequeued cell holding a teleporter, so the
//!   returned route is a shortest 4-connected path.

use std::collections::VecDeque;

use gb_core::{Direction, Position};

use crate::{Board, DangerZone};

// ── TeleportRoute ─────────────────────────────────────────────────────────────

/// The nearest reachable teleporter and the moves that lead to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeleportRoute {
    /// Position of the teleporter that was reached.
    pub teleporter: Position,
    /// Moves to take in order, from the start cell to the teleporter.
    pub steps: Vec<Direction>,
}

impl TeleportRoute {
    /// The move to make this tick, or `None` when already standing on the
    /// teleporter.
    #[inline]
    pub fn first_step(&self) -> Option<Direction> {
        self.steps.first().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable teleporter search.
pub trait Router: Send + Sync {
    /// Find the closest teleporter reachable from `from` without entering any
    /// cell in `avoid`.
    ///
    /// Returns `None` if the board exposes fewer than two teleporters (a lone
    /// teleporter goes nowhere) or none is reachable.
    fn nearest_teleporter(
        &self,
        board: &Board,
        from:  Position,
        avoid: &DangerZone,
    ) -> Option<TeleportRoute>;
}

// ── BfsRouter ─────────────────────────────────────────────────────────────────

/// Breadth-first search over every in-bounds cell.
///
/// Cost is bounded by `board.cell_count()`: each cell is queued at most once.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsRouter;

impl Router for BfsRouter {
    fn nearest_teleporter(
        &self,
        board: &Board,
        from:  Position,
        avoid: &DangerZone,
    ) -> Option<TeleportRoute> {
        bfs(board, from, avoid)
    }
}

// ── BFS internals ─────────────────────────────────────────────────────────────

fn bfs(board: &Board, from: Position, avoid: &DangerZone) -> Option<TeleportRoute> {
    let teleporters = board.teleporter_list();
    if teleporters.len() < 2 {
        return None;
    }
    let start = board.cell_index(from)?;

    let n = board.cell_count();
    // came_by[i] = move that first reached cell i; None for unvisited cells
    // and for the start cell.
    let mut came_by: Vec<Option<Direction>> = vec![None; n];
    let mut visited = vec![false; n];
    visited[start] = true;

    let mut queue = VecDeque::with_capacity(n.min(256));
    queue.push_back(from);

    while let Some(cell) = queue.pop_front() {
        if teleporters.iter().any(|t| t.position == cell) {
            return Some(reconstruct(board, &came_by, cell));
        }

        for dir in Direction::CARDINALS {
            let next = cell.offset(dir);
            let Some(idx) = board.cell_index(next) else {
                continue;
            };
            if visited[idx] || avoid.contains(next) {
                continue;
            }
            visited[idx] = true;
            came_by[idx] = Some(dir);
            queue.push_back(next);
        }
    }

    None
}

/// Walk `came_by` back from `to` to the start cell.
fn reconstruct(board: &Board, came_by: &[Option<Direction>], to: Position) -> TeleportRoute {
    let mut steps = Vec::new();
    let mut cur = to;
    while let Some(dir) = board.cell_index(cur).and_then(|i| came_by[i]) {
        steps.push(dir);
        cur = cur.offset(dir.reversed());
    }
    steps.reverse();
    TeleportRoute { teleporter: to, steps }
}
