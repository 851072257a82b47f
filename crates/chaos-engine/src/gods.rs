//! God effects: the probabilistic half of the chaos phase.
//!
//! An invocation rolls against the god's proc chance, picks a random non-king
//! piece from the targeted army, and applies the god's effect to it. Effects
//! only ever mutate the board after a move; they never touch move legality.

use chaos_core::{Coord, EffectKind, God, PieceKind, Side, Target};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::board::PieceId;
use crate::state::GameState;

/// Rolls one invocation of `god` against `target`.
///
/// Returns the god's effect when a uniform draw in `[0, 1)` does not exceed
/// the proc chance, and `None` otherwise.
pub fn roll_effect<R: Rng + ?Sized>(god: God, target: Target, rng: &mut R) -> Option<EffectKind> {
    let roll: f64 = rng.gen();
    (roll <= god.proc_chance(target)).then(|| god.effect())
}

/// The record of one god effect that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GodEffect {
    pub god: God,
    /// The player whose god cast the effect.
    pub caster: Side,
    pub target: Target,
    pub effect: EffectKind,
    pub cell: Coord,
    /// The piece that was picked.
    pub victim: PieceId,
    pub victim_kind: PieceKind,
    /// The piece that now stands on `cell`, if the effect spawned one.
    pub replacement: Option<PieceId>,
    /// False when the effect hit a rank boundary and left the board as it was.
    pub changed: bool,
}

struct Applied {
    cell: Coord,
    kind: PieceKind,
    replacement: Option<PieceId>,
    changed: bool,
}

impl GameState {
    /// Runs one god invocation.
    ///
    /// `caster`'s god acts on `caster`'s own army when `target` is
    /// [`Target::Own`], and on the opposing army for [`Target::Enemy`].
    pub fn invoke_god<R: Rng + ?Sized>(
        &mut self,
        caster: Side,
        target: Target,
        rng: &mut R,
    ) -> Option<GodEffect> {
        let god = self.player(caster).god();
        let effect = roll_effect(god, target, rng)?;

        let victims = if target.is_enemy() {
            caster.opposite()
        } else {
            caster
        };
        let candidates: Vec<PieceId> = self
            .pieces_of(victims)
            .filter(|p| p.kind != PieceKind::King)
            .map(|p| p.id)
            .collect();
        let &victim = candidates.choose(rng)?;

        let applied = self.apply_effect(effect, victim)?;
        tracing::debug!(
            %god,
            %caster,
            %effect,
            cell = %applied.cell,
            victim = %applied.kind,
            changed = applied.changed,
            "god effect"
        );
        self.debug_check();
        Some(GodEffect {
            god,
            caster,
            target,
            effect,
            cell: applied.cell,
            victim,
            victim_kind: applied.kind,
            replacement: applied.replacement,
            changed: applied.changed,
        })
    }

    /// Applies `effect` to `victim`. Rank changes and betrayal spawn a new piece.
    fn apply_effect(&mut self, effect: EffectKind, victim: PieceId) -> Option<Applied> {
        let piece = self.active_piece(victim)?;
        let (kind, owner) = (piece.kind, piece.side);
        let cell = piece.coord?;

        let swap = match effect {
            EffectKind::Destroy => {
                self.kill(victim)?;
                return Some(Applied {
                    cell,
                    kind,
                    replacement: None,
                    changed: true,
                });
            }
            EffectKind::Downgrade => kind.downgraded().map(|lower| (lower, owner)),
            EffectKind::Upgrade => kind.upgraded().map(|higher| (higher, owner)),
            EffectKind::Betray => Some((kind, owner.opposite())),
        };

        let replacement = match swap {
            Some((new_kind, new_owner)) => Some(self.replace(victim, new_kind, new_owner)?),
            None => None,
        };
        Some(Applied {
            cell,
            kind,
            replacement,
            changed: replacement.is_some(),
        })
    }
}
