//! Applying a chosen move: capture, promotion, and the king-capture win.

use chaos_core::{Coord, PieceKind, Side};
use serde::Serialize;

use crate::board::PieceId;
use crate::state::GameState;

/// What a resolved move did, for hosts that react to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The piece moved onto an empty cell.
    Moved,
    /// The piece took `captured`.
    MovedAndCaptured { captured: PieceId },
    /// A pawn reached its promotion row and became `queen`, possibly via a capture.
    MovedAndPromoted {
        queen: PieceId,
        captured: Option<PieceId>,
    },
    /// The enemy king fell; `winner` has won the match.
    CapturedKing { king: PieceId, winner: Side },
}

impl MoveOutcome {
    pub fn captured(&self) -> Option<PieceId> {
        match *self {
            MoveOutcome::Moved => None,
            MoveOutcome::MovedAndCaptured { captured } => Some(captured),
            MoveOutcome::MovedAndPromoted { captured, .. } => captured,
            MoveOutcome::CapturedKing { king, .. } => Some(king),
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match *self {
            MoveOutcome::CapturedKing { winner, .. } => Some(winner),
            _ => None,
        }
    }
}

/// A move after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub piece: PieceId,
    pub side: Side,
    pub from: Coord,
    pub to: Coord,
    pub outcome: MoveOutcome,
}

impl GameState {
    /// Applies a move that the caller has already checked for legality.
    ///
    /// Returns `None` only if `id` is not in play.
    pub fn apply_move(&mut self, id: PieceId, to: Coord) -> Option<Resolution> {
        let piece = self.active_piece(id)?;
        let (side, kind) = (piece.side, piece.kind);
        let from = piece.coord?;

        let captured = self.board().occupant(to);
        let mut captured_king = None;
        if let Some(victim) = captured {
            debug_assert_ne!(victim, id);
            let victim_kind = self.board().piece(victim).map(|p| p.kind);
            self.kill(victim);
            if victim_kind == Some(PieceKind::King) {
                captured_king = Some(victim);
            }
        }

        if let Some(king) = captured_king {
            self.relocate(id, to);
            tracing::info!(%side, %from, %to, "king captured");
            return Some(Resolution {
                piece: id,
                side,
                from,
                to,
                outcome: MoveOutcome::CapturedKing { king, winner: side },
            });
        }

        let outcome = if kind == PieceKind::Pawn && to.y() == side.promotion_row() {
            self.relocate(id, to);
            let queen = self.replace(id, PieceKind::Queen, side)?;
            MoveOutcome::MovedAndPromoted { queen, captured }
        } else {
            self.relocate(id, to);
            match captured {
                Some(captured) => MoveOutcome::MovedAndCaptured { captured },
                None => MoveOutcome::Moved,
            }
        };

        tracing::debug!(piece = %id, %kind, %from, %to, ?outcome, "move resolved");
        self.debug_check();
        Some(Resolution {
            piece: id,
            side,
            from,
            to,
            outcome,
        })
    }
}
