//! The reshuffle half of the chaos phase.

use chaos_core::{Coord, PieceKind, Side};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::PieceId;
use crate::state::GameState;

/// One piece's move during a reshuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Relocation {
    pub piece: PieceId,
    pub from: Coord,
    pub to: Coord,
}

impl GameState {
    /// Permutes `side`'s non-king pieces across the cells they occupy.
    ///
    /// The set of occupied cells is unchanged; only which piece stands where
    /// changes. Returns one entry per shuffled piece in roster order,
    /// including pieces that happen to land back on their own cell.
    pub fn shuffle_team<R: Rng + ?Sized>(&mut self, side: Side, rng: &mut R) -> Vec<Relocation> {
        let (ids, mut cells): (Vec<PieceId>, Vec<Coord>) = self
            .pieces_of(side)
            .filter(|p| p.kind != PieceKind::King)
            .filter_map(|p| Some((p.id, p.coord?)))
            .unzip();
        if ids.len() < 2 {
            return Vec::new();
        }

        let from = cells.clone();
        cells.shuffle(rng);

        let assignments: Vec<(PieceId, Coord)> = ids.iter().copied().zip(cells.iter().copied()).collect();
        self.place_all(&assignments);
        self.debug_check();

        let relocations: Vec<Relocation> = ids
            .into_iter()
            .zip(from)
            .zip(cells)
            .map(|((piece, from), to)| Relocation { piece, from, to })
            .collect();
        tracing::debug!(
            %side,
            pieces = relocations.len(),
            moved = relocations.iter().filter(|r| r.from != r.to).count(),
            "team shuffled"
        );
        relocations
    }
}
