//! Legal-destination generation.
//!
//! Every piece kind dispatches to one of three generators:
//! - ray scan for bishops, rooks, and queens
//! - fixed offsets for knights and kings
//! - the asymmetric pawn rule
//!
//! There is no check detection: a move is never vetoed for exposing a king.

use chaos_core::{Coord, PieceKind, Side};

use crate::board::{Board, Piece, PieceId};
use crate::state::GameState;

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (2, -1),
    (1, -2),
    (-2, 1),
    (-1, 2),
    (2, 1),
    (1, 2),
];

/// The legal destinations of one piece, in generation order.
///
/// No piece reaches more than 27 cells, so a fixed array avoids allocating
/// during bot search.
#[derive(Clone)]
pub struct Destinations {
    cells: [Coord; Self::CAPACITY],
    len: usize,
}

impl Destinations {
    pub const CAPACITY: usize = 32;

    const FILLER: Coord = match Coord::new(0, 0) {
        Some(c) => c,
        None => unreachable!(),
    };

    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Destinations {
            cells: [Self::FILLER; Self::CAPACITY],
            len: 0,
        }
    }

    #[inline]
    fn push(&mut self, coord: Coord) {
        debug_assert!(self.len < Self::CAPACITY);
        self.cells[self.len] = coord;
        self.len += 1;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Coord] {
        &self.cells[..self.len]
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.as_slice().contains(&coord)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.as_slice().iter()
    }
}

impl Default for Destinations {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for Destinations {
    type Output = Coord;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a Destinations {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for Destinations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Returns the cells `piece` may move to. Retired pieces have none.
pub fn legal_destinations(board: &Board, piece: &Piece) -> Destinations {
    let mut out = Destinations::new();
    let Some(from) = piece.coord else {
        return out;
    };
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.side, &mut out),
        PieceKind::Knight => offset_moves(board, from, piece.side, &KNIGHT_OFFSETS, &mut out),
        PieceKind::Bishop => ray_moves(board, from, piece.side, &DIAGONAL, &mut out),
        PieceKind::Rook => ray_moves(board, from, piece.side, &ORTHOGONAL, &mut out),
        PieceKind::Queen => ray_moves(board, from, piece.side, &ALL_DIRECTIONS, &mut out),
        PieceKind::King => offset_moves(board, from, piece.side, &ALL_DIRECTIONS, &mut out),
    }
    out
}

/// Legal destinations of the piece with `id`, or an empty list if it is not in play.
pub fn destinations_of(board: &Board, id: PieceId) -> Destinations {
    board
        .piece(id)
        .map(|piece| legal_destinations(board, piece))
        .unwrap_or_default()
}

/// Every legal `(piece, destination)` pair for `side`, in roster order.
pub fn all_moves(state: &GameState, side: Side) -> Vec<(PieceId, Coord)> {
    state
        .pieces_of(side)
        .flat_map(|piece| {
            legal_destinations(state.board(), piece)
                .iter()
                .map(|&to| (piece.id, to))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Returns the owner of the piece on `coord`, if any.
#[inline]
fn owner_at(board: &Board, coord: Coord) -> Option<Side> {
    board.piece_at(coord).map(|p| p.side)
}

fn ray_moves(board: &Board, from: Coord, side: Side, directions: &[(i8, i8)], out: &mut Destinations) {
    for &(dx, dy) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(dx, dy) {
            match owner_at(board, next) {
                None => out.push(next),
                Some(owner) => {
                    if owner != side {
                        out.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
}

fn offset_moves(board: &Board, from: Coord, side: Side, offsets: &[(i8, i8)], out: &mut Destinations) {
    for &(dx, dy) in offsets {
        if let Some(to) = from.offset(dx, dy) {
            if owner_at(board, to) != Some(side) {
                out.push(to);
            }
        }
    }
}

fn pawn_moves(board: &Board, from: Coord, side: Side, out: &mut Destinations) {
    let dir = side.forward();

    // Diagonals only ever capture.
    for dx in [-1, 1] {
        if let Some(to) = from.offset(dx, dir) {
            if matches!(owner_at(board, to), Some(owner) if owner != side) {
                out.push(to);
            }
        }
    }

    let Some(one) = from.offset(0, dir).filter(|&c| board.is_empty(c)) else {
        return;
    };
    out.push(one);

    if from.y() == side.pawn_row() {
        if let Some(two) = from.offset(0, 2 * dir).filter(|&c| board.is_empty(c)) {
            out.push(two);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MatchSettings;
    use proptest::prelude::*;

    fn c(x: u8, y: u8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    fn empty() -> GameState {
        GameState::empty(MatchSettings::default())
    }

    fn dests(state: &GameState, id: PieceId) -> Vec<Coord> {
        destinations_of(state.board(), id).as_slice().to_vec()
    }

    #[test]
    fn opening_position_move_count() {
        let state = GameState::standard(MatchSettings::default());
        // 16 pawn moves and 4 knight moves per side.
        assert_eq!(all_moves(&state, Side::First).len(), 20);
        assert_eq!(all_moves(&state, Side::Second).len(), 20);
    }

    #[test]
    fn rook_on_empty_board() {
        let mut state = empty();
        let rook = state.spawn(PieceKind::Rook, Side::First, c(3, 3));
        assert_eq!(dests(&state, rook).len(), 14);
    }

    #[test]
    fn queen_on_empty_board() {
        let mut state = empty();
        let queen = state.spawn(PieceKind::Queen, Side::First, c(3, 3));
        assert_eq!(dests(&state, queen).len(), 27);
    }

    #[test]
    fn ray_stops_at_first_piece() {
        let mut state = empty();
        let rook = state.spawn(PieceKind::Rook, Side::First, c(0, 0));
        state.spawn(PieceKind::Pawn, Side::Second, c(0, 3));
        state.spawn(PieceKind::Pawn, Side::First, c(2, 0));
        let d = dests(&state, rook);
        assert!(d.contains(&c(0, 1)));
        assert!(d.contains(&c(0, 2)));
        assert!(d.contains(&c(0, 3)), "enemy blocker is capturable");
        assert!(!d.contains(&c(0, 4)), "ray does not see through");
        assert!(d.contains(&c(1, 0)));
        assert!(!d.contains(&c(2, 0)), "friendly blocker is not a destination");
        assert!(!d.contains(&c(3, 0)));
        assert_eq!(d.len(), 4);
    }

    #[test]
    fn bishop_scans_diagonals_only() {
        let mut state = empty();
        let bishop = state.spawn(PieceKind::Bishop, Side::Second, c(2, 0));
        let d = dests(&state, bishop);
        assert_eq!(d, vec![c(3, 1), c(4, 2), c(5, 3), c(6, 4), c(7, 5), c(1, 1), c(0, 2)]);
    }

    #[test]
    fn knight_in_corner() {
        let mut state = empty();
        let knight = state.spawn(PieceKind::Knight, Side::First, c(0, 0));
        state.spawn(PieceKind::Pawn, Side::First, c(1, 2));
        assert_eq!(dests(&state, knight), vec![c(2, 1)]);
    }

    #[test]
    fn king_captures_but_never_lands_on_friends() {
        let mut state = empty();
        let king = state.spawn(PieceKind::King, Side::First, c(4, 0));
        state.spawn(PieceKind::Pawn, Side::First, c(4, 1));
        state.spawn(PieceKind::Pawn, Side::Second, c(3, 1));
        let d = dests(&state, king);
        assert!(!d.contains(&c(4, 1)));
        assert!(d.contains(&c(3, 1)));
        assert_eq!(d.len(), 4);
    }

    #[test]
    fn pawn_double_step_from_start_row() {
        let state = GameState::standard(MatchSettings::default());
        let pawn = state.board().occupant(c(0, 1)).unwrap();
        assert_eq!(dests(&state, pawn), vec![c(0, 2), c(0, 3)]);
        let black = state.board().occupant(c(5, 6)).unwrap();
        assert_eq!(dests(&state, black), vec![c(5, 5), c(5, 4)]);
    }

    #[test]
    fn pawn_double_step_needs_both_cells_empty() {
        let mut state = empty();
        let pawn = state.spawn(PieceKind::Pawn, Side::First, c(2, 1));
        state.spawn(PieceKind::Knight, Side::Second, c(2, 3));
        assert_eq!(dests(&state, pawn), vec![c(2, 2)]);

        let mut state = empty();
        let pawn = state.spawn(PieceKind::Pawn, Side::First, c(2, 1));
        state.spawn(PieceKind::Knight, Side::Second, c(2, 2));
        assert!(dests(&state, pawn).is_empty());
    }

    #[test]
    fn pawn_off_start_row_steps_once() {
        let mut state = empty();
        let pawn = state.spawn(PieceKind::Pawn, Side::Second, c(4, 4));
        assert_eq!(dests(&state, pawn), vec![c(4, 3)]);
    }

    #[test]
    fn pawn_diagonals_capture_only() {
        let mut state = empty();
        let pawn = state.spawn(PieceKind::Pawn, Side::First, c(3, 3));
        state.spawn(PieceKind::Pawn, Side::First, c(2, 4));
        assert_eq!(dests(&state, pawn), vec![c(3, 4)]);
        state.spawn(PieceKind::Rook, Side::Second, c(4, 4));
        assert_eq!(dests(&state, pawn), vec![c(4, 4), c(3, 4)]);
    }

    #[test]
    fn pawn_on_far_row_has_no_forward_move() {
        let mut state = empty();
        let pawn = state.spawn(PieceKind::Pawn, Side::Second, c(0, 0));
        assert!(dests(&state, pawn).is_empty());
    }

    #[test]
    fn retired_piece_has_no_moves() {
        let mut state = empty();
        let rook = state.spawn(PieceKind::Rook, Side::First, c(0, 0));
        state.kill(rook);
        assert!(dests(&state, rook).is_empty());
    }

    fn arb_layout() -> impl Strategy<Value = Vec<(u8, u8, bool)>> {
        // (cell index, kind index, first side?)
        proptest::collection::vec((0u8..64, 0u8..6, any::<bool>()), 1..24)
    }

    fn build(layout: &[(u8, u8, bool)]) -> GameState {
        let mut state = empty();
        for &(index, kind, first) in layout {
            let coord = Coord::from_index(index).unwrap();
            if state.board().is_empty(coord) {
                let side = if first { Side::First } else { Side::Second };
                state.spawn(PieceKind::ALL[kind as usize], side, coord);
            }
        }
        state
    }

    proptest! {
        #[test]
        fn never_lands_on_a_friend(layout in arb_layout()) {
            let state = build(&layout);
            for piece in state.board().active_pieces() {
                let d = legal_destinations(state.board(), piece);
                for &to in &d {
                    prop_assert_ne!(owner_at(state.board(), to), Some(piece.side));
                    prop_assert_ne!(Some(to), piece.coord);
                }
                let mut seen = d.as_slice().to_vec();
                seen.sort();
                seen.dedup();
                prop_assert_eq!(seen.len(), d.len());
            }
        }

        #[test]
        fn rays_never_see_through(layout in arb_layout()) {
            let state = build(&layout);
            for piece in state.board().active_pieces().filter(|p| p.kind.is_slider()) {
                let from = piece.coord.unwrap();
                for to in legal_destinations(state.board(), piece).iter() {
                    let dx = (to.x() as i8 - from.x() as i8).signum();
                    let dy = (to.y() as i8 - from.y() as i8).signum();
                    let mut cursor = from.offset(dx, dy).unwrap();
                    while cursor != *to {
                        prop_assert!(state.board().is_empty(cursor));
                        cursor = cursor.offset(dx, dy).unwrap();
                    }
                }
            }
        }

        #[test]
        fn pawn_diagonals_iff_enemy(layout in arb_layout()) {
            let state = build(&layout);
            for pawn in state.board().active_pieces().filter(|p| p.kind == PieceKind::Pawn) {
                let from = pawn.coord.unwrap();
                let d = legal_destinations(state.board(), pawn);
                for dx in [-1, 1] {
                    if let Some(diag) = from.offset(dx, pawn.side.forward()) {
                        let enemy = matches!(owner_at(state.board(), diag), Some(s) if s != pawn.side);
                        prop_assert_eq!(d.contains(diag), enemy);
                    }
                }
                if let Some(two) = from.offset(0, 2 * pawn.side.forward()) {
                    let one = from.offset(0, pawn.side.forward()).unwrap();
                    let expected = from.y() == pawn.side.pawn_row()
                        && state.board().is_empty(one)
                        && state.board().is_empty(two);
                    prop_assert_eq!(d.contains(two), expected);
                }
            }
        }
    }
}
