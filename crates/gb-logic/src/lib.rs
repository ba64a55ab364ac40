//! `gb-logic` — bot decision trait and the priority-cascade collector.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`model`]   | `BotLogic` trait — one direction per tick                       |
//! | [`status`]  | `Status` label, `Rule`, `Decision`                              |
//! | [`config`]  | `LogicConfig` — every threshold the cascade uses                |
//! | [`duhbot`]  | `DuhBot` — the nine-rule priority cascade                       |
//! | [`error`]   | `LogicError`, `LogicResult<T>`                                  |
//!
//! # Design notes
//!
//! A tick is decided from scratch against the snapshot the host passes in.
//! The only state carried between ticks is the bot's [`Status`] label, which
//! the cascade reads back in exactly one place (teleport suppression while
//! evading).  The danger zone is rebuilt every tick.
//!
//! Deciding is infallible.  Errors only arise when building a bot from a
//! configuration that fails [`LogicConfig::validate`].

pub mod config;
pub mod duhbot;
pub mod error;
pub mod model;
pub mod status;


pub use config::LogicConfig;
pub use duhbot::DuhBot;
pub use error::{LogicError, LogicResult};
pub use model::BotLogic;
pub use status::{Decision, Rule, Status};
