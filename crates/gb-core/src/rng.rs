//! Deterministic per-bot RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each bot gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (bot_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive bot IDs uniformly across the seed space.  Two
//! runs with the same seed make the same random-walk choices, which is what
//! tests and replays need.  Gameplay does not depend on any particular seed.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::BotId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-bot deterministic RNG.
pub struct BotRng(SmallRng);

impl BotRng {
    /// Seed deterministically from the run's global seed and a bot ID.
    pub fn new(global_seed: u64, bot: BotId) -> Self {
        let seed = global_seed ^ (bot.0 as u64).wrapping_mul(MIXING_CONSTANT);
        BotRng(SmallRng::seed_from_u64(seed))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
