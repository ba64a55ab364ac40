//! Framework error type.
//!
//! Sub-crates define their own error enums (`BoardError`, `LogicError`) for
//! their own failure modes; `GbError` covers lookups shared by all of them.

use thiserror::Error;

use crate::BotId;

/// The top-level error type for `gb-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum GbError {
    #[error("bot {0} not found")]
    BotNotFound(BotId),
}

/// Shorthand result type for all `gb-*` crates.
pub type GbResult<T> = Result<T, GbError>;
