//! The `BotLogic` trait — the contract between a host and a bot brain.

use gb_board::{Board, BotState};
use gb_core::{BotRng, Direction};

/// Pluggable per-tick bot behavior.
///
/// The host calls [`next_move`][Self::next_move] once per tick with the
/// controlled bot's state and a snapshot of the board, applies the returned
/// direction, and resolves collisions, pickups, and teleports itself.
///
/// Implementations may keep state between ticks (`&mut self`), but each call
/// must run to completion before the next one; hosts never call it
/// concurrently for the same instance.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysEast;
///
/// impl BotLogic for AlwaysEast {
///     fn next_move(&mut self, me: &BotState, board: &Board, _rng: &mut BotRng) -> Direction {
///         if board.contains(me.position.offset(Direction::EAST)) {
///             Direction::EAST
///         } else {
///             Direction::STAY
///         }
///     }
/// }
/// ```
pub trait BotLogic {
    /// Decide this tick's move.
    ///
    /// Must return [`Direction::STAY`] or one of [`Direction::CARDINALS`].
    /// `rng` is the only permitted source of randomness so runs can be
    /// replayed from a seed.
    fn next_move(&mut self, me: &BotState, board: &Board, rng: &mut BotRng) -> Direction;

    /// Short human-readable label, used in logs.
    fn name(&self) -> &str {
        "bot"
    }
}
