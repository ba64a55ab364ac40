//! Grid coordinates, unit moves, and the direction selector.
//!
//! The board is a 4-connected integer grid.  `x` grows to the east and `y`
//! grows to the south, so `(0, 0)` is the top-left cell.  Distances are
//! Manhattan distances, which equal the step count of a shortest path on an
//! obstacle-free grid.

use std::fmt;

// ── Position ──────────────────────────────────────────────────────────────────

/// An integer grid coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `|Δx| + |Δy|` between `self` and `other`.
    #[inline]
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The cell reached by taking `dir` from `self`.  No bounds checking.
    #[inline]
    pub fn offset(self, dir: Direction) -> Position {
        Position::new(self.x + dir.dx, self.y + dir.dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// A movement vector with each component in `{-1, 0, 1}`.
///
/// Everything the decision engine returns is either one of the four
/// [`CARDINALS`](Self::CARDINALS) or [`STAY`](Self::STAY).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const EAST:  Direction = Direction { dx: 1,  dy: 0 };
    pub const SOUTH: Direction = Direction { dx: 0,  dy: 1 };
    pub const WEST:  Direction = Direction { dx: -1, dy: 0 };
    pub const NORTH: Direction = Direction { dx: 0,  dy: -1 };
    pub const STAY:  Direction = Direction { dx: 0,  dy: 0 };

    /// The four unit moves in expansion order.  Breadth-first search and the
    /// random walk both enumerate neighbours in exactly this order.
    pub const CARDINALS: [Direction; 4] = [
        Direction::EAST,
        Direction::SOUTH,
        Direction::WEST,
        Direction::NORTH,
    ];

    #[inline]
    pub fn is_stay(self) -> bool {
        self == Direction::STAY
    }

    #[inline]
    pub fn as_tuple(self) -> (i32, i32) {
        (self.dx, self.dy)
    }

    /// The opposite move.
    #[inline]
    pub fn reversed(self) -> Direction {
        Direction { dx: -self.dx, dy: -self.dy }
    }
}

impl From<Direction> for (i32, i32) {
    fn from(d: Direction) -> (i32, i32) {
        d.as_tuple()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Direction::EAST  => "east",
            Direction::SOUTH => "south",
            Direction::WEST  => "west",
            Direction::NORTH => "north",
            Direction::STAY  => "stay",
            Direction { dx, dy } => return write!(f, "({dx}, {dy})"),
        };
        f.write_str(name)
    }
}

// ── Direction selector ────────────────────────────────────────────────────────

/// One axis-aligned step from `from` that reduces the larger axis delta to `to`.
///
/// The horizontal axis is chosen only when `|Δx| > |Δy|`; equal magnitudes
/// move vertically.  Returns [`Direction::STAY`] iff `from == to`.
pub fn step_toward(from: Position, to: Position) -> Direction {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    if dx == 0 && dy == 0 {
        Direction::STAY
    } else if dx.abs() > dy.abs() {
        Direction { dx: dx.signum(), dy: 0 }
    } else {
        Direction { dx: 0, dy: dy.signum() }
    }
}

/// One axis-aligned step from `from` that increases the distance to `threat`.
///
/// Mirror of [`step_toward`]: same axis choice, opposite sign.  When both
/// positions coincide there is no "away"; the step is [`Direction::NORTH`].
pub fn step_away(from: Position, threat: Position) -> Direction {
    let dx = from.x - threat.x;
    let dy = from.y - threat.y;

    if dx.abs() > dy.abs() {
        Direction { dx: dx.signum(), dy: 0 }
    } else if dy != 0 {
        Direction { dx: 0, dy: dy.signum() }
    } else {
        Direction::NORTH
    }
}
