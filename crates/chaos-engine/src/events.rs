//! Events emitted for presentation and audio layers.
//!
//! Events describe what already happened; nothing a host does with them feeds
//! back into the rules.

use std::time::Duration;

use chaos_core::{Coord, PieceKind, Side};
use serde::Serialize;

use crate::board::PieceId;
use crate::gods::GodEffect;
use crate::settings::{MatchSettings, Pacing};
use crate::shuffle::Relocation;

/// A discrete change a host may animate, play a sound for, or log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A fresh match was set up.
    MatchStarted { settings: MatchSettings },
    PieceMoved {
        piece: PieceId,
        kind: PieceKind,
        side: Side,
        from: Coord,
        to: Coord,
    },
    PieceCaptured {
        piece: PieceId,
        kind: PieceKind,
        side: Side,
        at: Coord,
    },
    PiecePromoted {
        pawn: PieceId,
        queen: PieceId,
        side: Side,
        at: Coord,
    },
    TeamShuffled { side: Side, moves: Vec<Relocation> },
    GodEffectTriggered(GodEffect),
    GameOver { winner: Side },
    TurnHandoff { next: Side, is_bot: bool },
}

impl GameEvent {
    /// How long a host should hold this event before showing the next one.
    pub fn presentation_delay(&self, pacing: &Pacing) -> Duration {
        let ms = match self {
            GameEvent::PieceMoved { .. } => pacing.handoff_ms,
            GameEvent::TeamShuffled { .. } => pacing.shuffle_ms,
            GameEvent::GodEffectTriggered(_) => pacing.god_effect_ms,
            GameEvent::TurnHandoff { is_bot: true, .. } => pacing.bot_think_ms,
            _ => 0,
        };
        Pacing::millis(ms)
    }

    /// A short label, used as the log line for each event.
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::MatchStarted { .. } => "match_started",
            GameEvent::PieceMoved { .. } => "piece_moved",
            GameEvent::PieceCaptured { .. } => "piece_captured",
            GameEvent::PiecePromoted { .. } => "piece_promoted",
            GameEvent::TeamShuffled { .. } => "team_shuffled",
            GameEvent::GodEffectTriggered(_) => "god_effect_triggered",
            GameEvent::GameOver { .. } => "game_over",
            GameEvent::TurnHandoff { .. } => "turn_handoff",
        }
    }
}
