//! The four gods and the effects they cast on the board.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Whose pieces a god invocation targets, relative to the god's own player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// The god's own player's army.
    Own,
    /// The opposing army.
    Enemy,
}

impl Target {
    #[inline]
    pub const fn is_enemy(self) -> bool {
        matches!(self, Target::Enemy)
    }
}

/// What happens to the piece a god picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    /// Remove the piece from play, onto its owner's dead list.
    Destroy,
    /// Replace the piece with the kind one step down the rank order.
    Downgrade,
    /// Replace the piece with the same kind owned by the opponent.
    Betray,
    /// Replace the piece with the kind one step up the rank order.
    Upgrade,
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EffectKind::Destroy => "destroy",
            EffectKind::Downgrade => "downgrade",
            EffectKind::Betray => "betray",
            EffectKind::Upgrade => "upgrade",
        };
        f.write_str(name)
    }
}

/// A god assigned to a player for the length of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum God {
    Khorne,
    Nurgle,
    Tzeentch,
    Slaanesh,
}

impl God {
    pub const ALL: [God; 4] = [God::Khorne, God::Nurgle, God::Tzeentch, God::Slaanesh];

    /// The effect this god casts.
    pub const fn effect(self) -> EffectKind {
        match self {
            God::Khorne => EffectKind::Destroy,
            God::Nurgle => EffectKind::Downgrade,
            God::Tzeentch => EffectKind::Betray,
            God::Slaanesh => EffectKind::Upgrade,
        }
    }

    /// Probability that an invocation against `target` takes effect.
    ///
    /// Slaanesh favours its own army; the other three favour the enemy's.
    pub const fn proc_chance(self, target: Target) -> f64 {
        match (self, target) {
            (God::Slaanesh, Target::Own) => 0.4,
            (God::Slaanesh, Target::Enemy) => 0.1,
            (_, Target::Own) => 0.1,
            (_, Target::Enemy) => 0.4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            God::Khorne => "Khorne",
            God::Nurgle => "Nurgle",
            God::Tzeentch => "Tzeentch",
            God::Slaanesh => "Slaanesh",
        }
    }
}

impl fmt::Display for God {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for God {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "khorne" => Ok(God::Khorne),
            "nurgle" => Ok(God::Nurgle),
            "tzeentch" | "tzeench" => Ok(God::Tzeentch),
            "slaanesh" => Ok(God::Slaanesh),
            _ => Err(ParseError::UnknownGod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proc_chances() {
        for god in [God::Khorne, God::Nurgle, God::Tzeentch] {
            assert_eq!(god.proc_chance(Target::Own), 0.1);
            assert_eq!(god.proc_chance(Target::Enemy), 0.4);
        }
        assert_eq!(God::Slaanesh.proc_chance(Target::Own), 0.4);
        assert_eq!(God::Slaanesh.proc_chance(Target::Enemy), 0.1);
    }

    #[test]
    fn effects() {
        assert_eq!(God::Khorne.effect(), EffectKind::Destroy);
        assert_eq!(God::Nurgle.effect(), EffectKind::Downgrade);
        assert_eq!(God::Tzeentch.effect(), EffectKind::Betray);
        assert_eq!(God::Slaanesh.effect(), EffectKind::Upgrade);
    }

    #[test]
    fn parse_names() {
        assert_eq!("Khorne".parse::<God>(), Ok(God::Khorne));
        assert_eq!(" slaanesh ".parse::<God>(), Ok(God::Slaanesh));
        assert_eq!("tzeench".parse::<God>(), Ok(God::Tzeentch));
        assert_eq!(
            "malal".parse::<God>(),
            Err(ParseError::UnknownGod("malal".to_string()))
        );
    }

    #[test]
    fn target_flag() {
        assert!(Target::Enemy.is_enemy());
        assert!(!Target::Own.is_enemy());
    }
}
