//! Snapshot types describing the shared board for one tick.
//!
//! Everything here is plain data.  The host rebuilds (or mutates) these
//! structures between ticks; decision code reads them through `&Board`.

use gb_core::{BotId, GbError, GbResult, Position, TimeLeft};

/// Default number of diamonds a bot can carry.
pub const DEFAULT_INVENTORY_SIZE: u32 = 5;

#[cfg(feature = "serde")]
fn default_inventory_size() -> u32 {
    DEFAULT_INVENTORY_SIZE
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// One bot on the board, either the one being controlled or an opponent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BotState {
    pub id: BotId,

    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    pub position: Position,

    /// Where carried diamonds are banked.
    pub base: Position,

    /// Diamonds currently carried (not yet banked).
    pub diamonds: u32,

    /// Carry capacity reported by the host.
    #[cfg_attr(feature = "serde", serde(default = "default_inventory_size"))]
    pub inventory_size: u32,

    pub milliseconds_left: TimeLeft,

    /// Points already banked.
    #[cfg_attr(feature = "serde", serde(default))]
    pub score: u32,
}

impl BotState {
    /// A bot standing on its own base with empty pockets.
    pub fn new(id: BotId, position: Position, milliseconds_left: TimeLeft) -> Self {
        Self {
            id,
            name: String::new(),
            position,
            base: position,
            diamonds: 0,
            inventory_size: DEFAULT_INVENTORY_SIZE,
            milliseconds_left,
            score: 0,
        }
    }

    #[inline]
    pub fn is_carrying(&self) -> bool {
        self.diamonds > 0
    }
}

/// A collectible diamond worth 1 or 2 points.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diamond {
    pub position: Position,
    pub points: u32,
}

/// A teleporter cell.  The host relocates any bot that enters one to its
/// partner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Teleporter {
    pub position: Position,
}

/// An activatable button cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Button {
    pub position: Position,
}

// ── Board ─────────────────────────────────────────────────────────────────────

/// Immutable-for-one-tick snapshot of the shared grid.
///
/// `teleporters` and `buttons` are `None` when the host's board does not
/// expose that collection at all.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    pub width: u32,
    pub height: u32,

    /// Every bot on the board, including the one being controlled.  Order is
    /// significant: "first qualifying bot" rules scan in this order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bots: Vec<BotState>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub diamonds: Vec<Diamond>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub teleporters: Option<Vec<Teleporter>>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub buttons: Option<Vec<Button>>,
}

impl Board {
    /// An empty `width × height` board.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bots: Vec::new(),
            diamonds: Vec::new(),
            teleporters: None,
            buttons: None,
        }
    }

    /// `true` if `pos` lies in `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as u32) < self.width
            && (pos.y as u32) < self.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of `pos`, or `None` if off the board.
    #[inline]
    pub fn cell_index(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    pub fn bot(&self, id: BotId) -> Option<&BotState> {
        self.bots.iter().find(|b| b.id == id)
    }

    pub fn require_bot(&self, id: BotId) -> GbResult<&BotState> {
        self.bot(id).ok_or(GbError::BotNotFound(id))
    }

    pub fn bot_mut(&mut self, id: BotId) -> Option<&mut BotState> {
        self.bots.iter_mut().find(|b| b.id == id)
    }

    /// Bots other than `me`, in board order.
    pub fn opponents(&self, me: BotId) -> impl Iterator<Item = &BotState> + '_ {
        self.bots.iter().filter(move |b| b.id != me)
    }

    /// Teleporters on the board, or an empty slice if the board has none.
    pub fn teleporter_list(&self) -> &[Teleporter] {
        self.teleporters.as_deref().unwrap_or(&[])
    }

    /// Where a bot entering the teleporter at `pos` is sent: the next
    /// teleporter in board order, wrapping around.
    pub fn teleport_partner(&self, pos: Position) -> Option<Position> {
        let list = self.teleporter_list();
        if list.len() < 2 {
            return None;
        }
        let i = list.iter().position(|t| t.position == pos)?;
        Some(list[(i + 1) % list.len()].position)
    }
}
