//! Labels describing what the bot is doing and why.

use std::fmt;

use gb_core::Direction;

/// The bot's persistent mode label.
///
/// Written by the cascade rules that commit to a goal; rules 5 (teleport),
/// 7 (button) and 9 (wander) leave it untouched, so after those ticks the
/// label still names the last goal-setting rule.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Initial label before any goal-setting rule has fired.
    #[default]
    Hunting,
    /// Racing back to base before the match clock runs out.
    RushingHome,
    /// Chasing a nearby loaded opponent.
    Attacking,
    /// Banking cargo because the pockets are full enough.
    ReturningMandatory,
    /// Backing away from a nearby opponent.
    Evading,
    /// Heading for the best-scoring diamond.
    Collecting,
    /// Nothing better to do while carrying; going home.
    ReturningFallback,
}

impl Status {
    /// The status label shown by game clients.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Hunting            => "BERBURU",
            Status::RushingHome        => "CEPAT_PULANG",
            Status::Attacking          => "SERANG",
            Status::ReturningMandatory => "PULANG",
            Status::Evading            => "MENGHINDAR",
            Status::Collecting         => "MENGUMPULKAN",
            Status::ReturningFallback  => "KEMBALI",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which cascade rule produced a tick's direction, in priority order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rule {
    RushHome,
    Attack,
    MandatoryReturn,
    Evade,
    Teleport,
    Collect,
    SeekButton,
    FallbackReturn,
    Wander,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::RushHome        => "rush-home",
            Rule::Attack          => "attack",
            Rule::MandatoryReturn => "mandatory-return",
            Rule::Evade           => "evade",
            Rule::Teleport        => "teleport",
            Rule::Collect         => "collect",
            Rule::SeekButton      => "seek-button",
            Rule::FallbackReturn  => "fallback-return",
            Rule::Wander          => "wander",
        }
    }

    /// The status label this rule writes, or `None` if it leaves the label
    /// unchanged.
    pub fn status(self) -> Option<Status> {
        match self {
            Rule::RushHome        => Some(Status::RushingHome),
            Rule::Attack          => Some(Status::Attacking),
            Rule::MandatoryReturn => Some(Status::ReturningMandatory),
            Rule::Evade           => Some(Status::Evading),
            Rule::Collect         => Some(Status::Collecting),
            Rule::FallbackReturn  => Some(Status::ReturningFallback),
            Rule::Teleport | Rule::SeekButton | Rule::Wander => None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tick's outcome.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Decision {
    pub direction: Direction,
    pub rule: Rule,
}

impl Decision {
    #[inline]
    pub fn new(rule: Rule, direction: Direction) -> Self {
        Self { direction, rule }
    }
}
