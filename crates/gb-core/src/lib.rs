//! `gb-core` — foundational types for the `rust_gridbot` framework.
//!
//! This crate is a dependency of every other `gb-*` crate.  It has no `gb-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`ids`]     | `BotId`                                                     |
//! | [`grid`]    | `Position`, `Direction`, Manhattan distance, `step_toward`, `step_away` |
//! | [`time`]    | `TimeLeft` (milliseconds remaining in the match)            |
//! | [`rng`]     | `BotRng` (per-bot, seedable)                                |
//! | [`error`]   | `GbError`, `GbResult`                                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GbError, GbResult};
pub use grid::{Direction, Position, step_away, step_toward};
pub use ids::BotId;
pub use rng::BotRng;
pub use time::TimeLeft;
