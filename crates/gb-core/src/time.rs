//! Match clock as seen by one bot.
//!
//! The host reports the remaining match time in whole milliseconds.  Decision
//! thresholds are expressed in seconds, so `TimeLeft` carries the raw value and
//! converts on demand without rounding.

use std::fmt;

/// Milliseconds left in the match for one bot.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TimeLeft(pub u64);

impl TimeLeft {
    pub const ZERO: TimeLeft = TimeLeft(0);

    #[inline]
    pub fn from_secs(secs: u64) -> Self {
        TimeLeft(secs * 1_000)
    }

    /// Remaining time in (fractional) seconds.
    #[inline]
    pub fn secs(self) -> f64 {
        self.0 as f64 / 1_000.0
    }

    #[inline]
    pub fn is_expired(self) -> bool {
        self.0 == 0
    }

    /// Time left after `ms` more milliseconds elapse (floors at zero).
    #[inline]
    pub fn saturating_sub_ms(self, ms: u64) -> TimeLeft {
        TimeLeft(self.0.saturating_sub(ms))
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}s", self.secs())
    }
}
