//! Fluent builder for constructing a validated [`Board`].
//!
//! # Usage
//!
//! ```rust
//! use gb_board::BoardBuilder;
//! use gb_core::{BotId, Position, TimeLeft};
//!
//! let board = BoardBuilder::new(5, 5)
//!     .bot(BotId(0), Position::new(0, 0), TimeLeft::from_secs(60))
//!     .diamond(Position::new(2, 0), 2)
//!     .teleporters([Position::new(4, 0), Position::new(0, 4)])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(board.bots.len(), 1);
//! assert!(board.buttons.is_none());
//! ```

use rustc_hash::FxHashSet;

use gb_core::{BotId, Position, TimeLeft};

use crate::{Board, BoardError, BoardResult, BotState, Button, Diamond, Teleporter};

/// Fluent builder for [`Board`].
///
/// Validation happens once in [`build`](Self::build).  Hosts that already
/// trust their data may construct `Board` directly instead.
pub struct BoardBuilder {
    board: Board,
}

impl BoardBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self { board: Board::new(width, height) }
    }

    /// Add a bot with its base on its starting cell and nothing carried.
    pub fn bot(self, id: BotId, position: Position, time_left: TimeLeft) -> Self {
        self.bot_state(BotState::new(id, position, time_left))
    }

    /// Add a fully specified bot.
    pub fn bot_state(mut self, bot: BotState) -> Self {
        self.board.bots.push(bot);
        self
    }

    pub fn diamond(mut self, position: Position, points: u32) -> Self {
        self.board.diamonds.push(Diamond { position, points });
        self
    }

    /// Add teleporters.  Calling this (even with no positions) marks the
    /// board as exposing a teleporter collection.
    pub fn teleporters(mut self, positions: impl IntoIterator<Item = Position>) -> Self {
        self.board
            .teleporters
            .get_or_insert_with(Vec::new)
            .extend(positions.into_iter().map(|position| Teleporter { position }));
        self
    }

    /// Add buttons.  Calling this (even with no positions) marks the board as
    /// exposing a button collection.
    pub fn buttons(mut self, positions: impl IntoIterator<Item = Position>) -> Self {
        self.board
            .buttons
            .get_or_insert_with(Vec::new)
            .extend(positions.into_iter().map(|position| Button { position }));
        self
    }

    /// Validate and return the board.
    pub fn build(self) -> BoardResult<Board> {
        validate_board(&self.board)?;
        Ok(self.board)
    }
}

/// Check a board assembled elsewhere (e.g. deserialized from JSON).
pub fn validate_board(board: &Board) -> BoardResult<()> {
    if board.width == 0 || board.height == 0 {
        return Err(BoardError::EmptyBoard { width: board.width, height: board.height });
    }

    let check = |what: &'static str, pos: Position| -> BoardResult<()> {
        if board.contains(pos) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds { what, pos, width: board.width, height: board.height })
        }
    };

    let mut seen = FxHashSet::default();
    for bot in &board.bots {
        if !seen.insert(bot.id) {
            return Err(BoardError::DuplicateBot(bot.id));
        }
        check("bot", bot.position)?;
        check("base", bot.base)?;
    }
    for d in &board.diamonds {
        check("diamond", d.position)?;
        if !(1..=2).contains(&d.points) {
            return Err(BoardError::InvalidPoints { pos: d.position, points: d.points });
        }
    }
    for t in board.teleporter_list() {
        check("teleporter", t.position)?;
    }
    for b in board.buttons.as_deref().unwrap_or(&[]) {
        check("button", b.position)?;
    }
    Ok(())
}
