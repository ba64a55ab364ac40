//! Tunable thresholds for the [`DuhBot`][crate::DuhBot] cascade.
//!
//! The defaults reproduce the tuned tournament bot.  Hosts typically load a
//! `LogicConfig` from JSON (with the `serde` feature) and override only a few
//! fields; missing fields fall back to [`Default`].

use crate::{LogicError, LogicResult};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogicConfig {
    /// Rush-home is only considered with less than this many seconds left.
    pub rush_home_window_secs: f64,

    /// Estimated seconds per cell of travel, calibrated to the game's tick
    /// duration.
    pub secs_per_cell: f64,

    /// Slack added to the travel estimate before rushing home.
    pub rush_home_margin_secs: f64,

    /// Opponents within this Manhattan distance may be attacked.
    pub attack_radius: u32,

    /// Opponents within this Manhattan distance trigger evasion.
    pub evade_radius: u32,

    /// Maximum diamonds carried.  Rule 3 returns at this load and rule 6 never
    /// targets a diamond that would exceed it.
    pub inventory_size: u32,

    /// With exactly this load, any 2-point diamond on the board forces a
    /// return (a 1-point top-up is not worth waiting for).
    pub top_up_cargo: u32,

    /// Late in the match ...
    pub late_game_secs: f64,

    /// ... bots carrying at least this many diamonds return.
    pub late_game_min_cargo: u32,

    /// A teleporter closer than this (Manhattan, exclusive) is taken.
    pub teleport_reach: u32,

    /// A button closer than this (Manhattan, exclusive) is approached.
    pub button_reach: u32,

    /// Score multiplier for 2-point diamonds.
    pub two_point_bonus: f64,

    /// Score multiplier for diamonds on danger cells.
    pub danger_penalty: f64,
}

impl Default for LogicConfig {
    fn default() -> Self {
        Self {
            rush_home_window_secs: 10.0,
            secs_per_cell:         0.3,
            rush_home_margin_secs: 1.0,
            attack_radius:         2,
            evade_radius:          2,
            inventory_size:        5,
            top_up_cargo:          4,
            late_game_secs:        20.0,
            late_game_min_cargo:   3,
            teleport_reach:        4,
            button_reach:          3,
            two_point_bonus:       1.5,
            danger_penalty:        0.3,
        }
    }
}

impl LogicConfig {
    /// Reject configurations the cascade cannot act on sensibly.
    pub fn validate(&self) -> LogicResult<()> {
        let non_negative = [
            ("rush_home_window_secs", self.rush_home_window_secs),
            ("secs_per_cell", self.secs_per_cell),
            ("rush_home_margin_secs", self.rush_home_margin_secs),
            ("late_game_secs", self.late_game_secs),
            ("two_point_bonus", self.two_point_bonus),
            ("danger_penalty", self.danger_penalty),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(LogicError::Config(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if self.inventory_size == 0 {
            return Err(LogicError::Config("inventory_size must be at least 1".into()));
        }
        Ok(())
    }
}
