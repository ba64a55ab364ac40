//! Per-tick set of cells a bot should steer clear of.

use rustc_hash::FxHashSet;

use gb_core::Position;

/// Cells judged unsafe for the current tick.
///
/// Owned by one decision engine and cleared at the start of every tick; it
/// never accumulates across ticks.
#[derive(Clone, Debug, Default)]
pub struct DangerZone {
    cells: FxHashSet<Position>,
}

impl DangerZone {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Mark `pos` unsafe.  Returns `false` if it was already marked.
    #[inline]
    pub fn insert(&mut self, pos: Position) -> bool {
        self.cells.insert(pos)
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }
}

impl FromIterator<Position> for DangerZone {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}
