//! Match setup and presentation pacing.

use std::time::Duration;

use chaos_core::{God, Side};
use serde::{Deserialize, Serialize};

/// One player's choices for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSettings {
    pub god: God,
    /// Whether the bot agent plays this side.
    #[serde(default)]
    pub bot: bool,
}

/// Settings for a whole match, one entry per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSettings {
    #[serde(default = "default_first")]
    pub first: PlayerSettings,
    #[serde(default = "default_second")]
    pub second: PlayerSettings,
}

fn default_first() -> PlayerSettings {
    PlayerSettings {
        god: God::Khorne,
        bot: false,
    }
}

fn default_second() -> PlayerSettings {
    PlayerSettings {
        god: God::Nurgle,
        bot: true,
    }
}

impl Default for MatchSettings {
    /// A human playing Khorne against a Nurgle bot.
    fn default() -> Self {
        MatchSettings {
            first: default_first(),
            second: default_second(),
        }
    }
}

impl MatchSettings {
    pub fn new(first_god: God, first_bot: bool, second_god: God, second_bot: bool) -> Self {
        MatchSettings {
            first: PlayerSettings {
                god: first_god,
                bot: first_bot,
            },
            second: PlayerSettings {
                god: second_god,
                bot: second_bot,
            },
        }
    }

    pub fn player(&self, side: Side) -> PlayerSettings {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    /// Returns a copy with both sides handed to the bot.
    pub fn all_bots(mut self) -> Self {
        self.first.bot = true;
        self.second.bot = true;
        self
    }
}

/// How long a host should hold each kind of event on screen.
///
/// The engine never waits; hosts read these through
/// [`GameEvent::presentation_delay`](crate::GameEvent::presentation_delay).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pacing {
    /// Pause after a move before the chaos phase starts.
    pub handoff_ms: u64,
    /// Shrink-and-regrow animation of a reshuffled team.
    pub shuffle_ms: u64,
    /// Fake thinking time before a bot commits its move.
    pub bot_think_ms: u64,
    /// Highlight time for a god effect.
    pub god_effect_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing {
            handoff_ms: 500,
            shuffle_ms: 500,
            bot_think_ms: 2000,
            god_effect_ms: 300,
        }
    }
}

impl Pacing {
    /// No delays at all, for headless runs.
    pub const INSTANT: Pacing = Pacing {
        handoff_ms: 0,
        shuffle_ms: 0,
        bot_think_ms: 0,
        god_effect_ms: 0,
    };

    pub(crate) fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }
}
