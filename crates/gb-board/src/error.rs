//! Board-subsystem error type.

use thiserror::Error;

use gb_core::{BotId, Position};

/// Errors produced while assembling a [`Board`][crate::Board].
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    EmptyBoard { width: u32, height: u32 },

    #[error("{what} at {pos} lies outside the {width}x{height} board")]
    OutOfBounds {
        what:   &'static str,
        pos:    Position,
        width:  u32,
        height: u32,
    },

    #[error("diamond at {pos} is worth {points} points (expected 1 or 2)")]
    InvalidPoints { pos: Position, points: u32 },

    #[error("bot {0} appears more than once")]
    DuplicateBot(BotId),
}

pub type BoardResult<T> = Result<T, BoardError>;
