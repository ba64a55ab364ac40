//! `gb-board` — the per-tick board snapshot and grid pathfinding.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`board`]   | `Board`, `BotState`, `Diamond`, `Teleporter`, `Button`        |
//! | [`builder`] | `BoardBuilder`, `validate_board`                              |
//! | [`danger`]  | `DangerZone` — cells judged unsafe for the current tick       |
//! | [`router`]  | `Router` trait, `TeleportRoute`, `BfsRouter`                  |
//! | [`error`]   | `BoardError`, `BoardResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on snapshot types.         |
//!
//! The board is owned by the host.  Decision code only ever borrows it
//! immutably for the duration of one tick.

pub mod board;
pub mod builder;
pub mod danger;
pub mod error;
pub mod router;


pub use board::{Board, BotState, Button, Diamond, Teleporter};
pub use builder::{BoardBuilder, validate_board};
pub use danger::DangerZone;
pub use error::{BoardError, BoardResult};
pub use router::{BfsRouter, Router, TeleportRoute};
