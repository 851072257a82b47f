//! The bot: one-ply greedy capture with a random fallback.
//!
//! If any piece can capture, the bot takes the most valuable capture on the
//! board. Ties go to the piece earliest in the roster, then to the earliest
//! destination in generation order. Otherwise it moves a random piece to a
//! random legal cell. There is no look-ahead.

use chaos_core::{Coord, Side};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::PieceId;
use crate::movegen::legal_destinations;
use crate::state::GameState;

/// Picks a move for `side`, or `None` if it has no legal move at all.
pub fn select_move<R: Rng + ?Sized>(state: &GameState, side: Side, rng: &mut R) -> Option<(PieceId, Coord)> {
    best_capture(state, side).or_else(|| random_move(state, side, rng))
}

/// The highest-value capture available to `side`.
pub fn best_capture(state: &GameState, side: Side) -> Option<(PieceId, Coord)> {
    let board = state.board();
    let mut best: Option<(PieceId, Coord, u32)> = None;

    for piece in state.pieces_of(side) {
        for &to in legal_destinations(board, piece).iter() {
            let Some(target) = board.piece_at(to) else {
                continue;
            };
            let value = target.value();
            tracing::trace!(piece = %piece.id, %to, value, "capture candidate");
            if best.map_or(true, |(_, _, v)| value > v) {
                best = Some((piece.id, to, value));
            }
        }
    }

    best.map(|(id, to, _)| (id, to))
}

/// A uniformly random piece with at least one destination, then a uniformly random destination.
fn random_move<R: Rng + ?Sized>(state: &GameState, side: Side, rng: &mut R) -> Option<(PieceId, Coord)> {
    let movable: Vec<_> = state
        .pieces_of(side)
        .map(|piece| (piece.id, legal_destinations(state.board(), piece)))
        .filter(|(_, dests)| !dests.is_empty())
        .collect();
    let (id, dests) = movable.choose(rng)?;
    let &to = dests.as_slice().choose(rng)?;
    Some((*id, to))
}
