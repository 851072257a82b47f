//! Board plus both players: everything the rules read and mutate.

use chaos_core::{Coord, PieceKind, Side};

use crate::board::{Board, Piece, PieceId};
use crate::player::Player;
use crate::settings::MatchSettings;

/// Back-row layout from file a to file h.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The mutable state of one match.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
}

impl GameState {
    /// Creates a state with an empty board.
    pub fn empty(settings: MatchSettings) -> Self {
        GameState {
            board: Board::new(),
            players: [
                Player::new(Side::First, settings.first),
                Player::new(Side::Second, settings.second),
            ],
        }
    }

    /// Creates a state with both armies in their starting layout.
    pub fn standard(settings: MatchSettings) -> Self {
        let mut state = Self::empty(settings);
        state.setup();
        state
    }

    /// Spawns the starting layout: first side's back row, its pawns, then the
    /// second side's pawns and back row. Spawn order is roster order.
    fn setup(&mut self) {
        self.spawn_back_row(Side::First);
        self.spawn_pawn_row(Side::First);
        self.spawn_pawn_row(Side::Second);
        self.spawn_back_row(Side::Second);
    }

    fn spawn_back_row(&mut self, side: Side) {
        for (x, kind) in (0u8..).zip(BACK_ROW) {
            if let Some(coord) = Coord::new(x, side.back_row()) {
                self.spawn(kind, side, coord);
            }
        }
    }

    fn spawn_pawn_row(&mut self, side: Side) {
        for x in 0..chaos_core::BOARD_SIZE {
            if let Some(coord) = Coord::new(x, side.pawn_row()) {
                self.spawn(PieceKind::Pawn, side, coord);
            }
        }
    }

    /// Clears the board and rosters, applies new settings, and sets up again.
    pub fn reset(&mut self, settings: MatchSettings) {
        self.board.clear();
        for side in Side::ALL {
            self.players[side.index()].reset(settings.player(side));
        }
        self.setup();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    #[inline]
    pub(crate) fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }

    /// Returns a piece only while it is in play.
    pub fn active_piece(&self, id: PieceId) -> Option<&Piece> {
        self.board.piece(id).filter(|p| p.is_active())
    }

    /// Puts a new piece on the board and appends it to its owner's roster.
    pub fn spawn(&mut self, kind: PieceKind, side: Side, coord: Coord) -> PieceId {
        let id = self.board.spawn(kind, side, coord);
        self.player_mut(side).add_active(id);
        id
    }

    /// Takes a piece out of play and records it on its owner's dead list.
    pub(crate) fn kill(&mut self, id: PieceId) -> Option<Coord> {
        let side = self.active_piece(id)?.side;
        let coord = self.board.remove(id)?;
        self.player_mut(side).bury(id);
        Some(coord)
    }

    /// Swaps a piece for a freshly spawned one of `kind` owned by `side`, on the same cell.
    ///
    /// The old piece leaves its owner's roster without being counted as dead.
    pub(crate) fn replace(&mut self, id: PieceId, kind: PieceKind, side: Side) -> Option<PieceId> {
        let old_side = self.active_piece(id)?.side;
        let coord = self.board.remove(id)?;
        self.player_mut(old_side).retire(id);
        Some(self.spawn(kind, side, coord))
    }

    pub(crate) fn relocate(&mut self, id: PieceId, to: Coord) {
        self.board.relocate(id, to);
    }

    pub(crate) fn place_all(&mut self, assignments: &[(PieceId, Coord)]) {
        self.board.place_all(assignments);
    }

    /// Iterates over a side's active pieces in roster order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.player(side)
            .active()
            .iter()
            .filter_map(move |&id| self.board.piece(id))
    }

    /// Debug check that the board and both rosters agree.
    pub(crate) fn debug_check(&self) {
        if cfg!(debug_assertions) {
            for side in Side::ALL {
                let kings = self
                    .pieces_of(side)
                    .filter(|p| p.kind == PieceKind::King)
                    .count();
                debug_assert!(kings <= 1, "{} side has {} kings", side, kings);
                for piece in self.pieces_of(side) {
                    debug_assert_eq!(piece.side, side);
                    debug_assert!(piece.is_active());
                }
            }
            let rostered: usize = Side::ALL
                .iter()
                .map(|&s| self.player(s).active().len())
                .sum();
            debug_assert_eq!(rostered, self.board.active_pieces().count());
        }
    }
}
