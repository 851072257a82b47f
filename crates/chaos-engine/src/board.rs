//! The 8x8 board and the arena of pieces it owns.
//!
//! Cells hold an optional [`PieceId`]; every piece records the cell it stands
//! on. Both directions are only ever updated together, through the methods
//! here, so the two views never disagree.

use std::fmt;

use chaos_core::{Coord, PieceKind, Side, BOARD_SIZE};
use serde::{Deserialize, Serialize};

const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Stable handle to a piece in the board's arena. Never reused within a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(u32);

impl PieceId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece, in play or retired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub side: Side,
    /// The cell the piece stands on; `None` once captured or replaced.
    pub coord: Option<Coord>,
}

impl Piece {
    /// Returns true while the piece is on the board.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.coord.is_some()
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.kind.value()
    }

    /// The row on which a pawn promotes; `None` for every other kind.
    pub fn promotion_row(&self) -> Option<u8> {
        match self.kind {
            PieceKind::Pawn => Some(self.side.promotion_row()),
            _ => None,
        }
    }
}

/// A read-only view of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    pub occupant: Option<PieceId>,
}

impl Cell {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    #[inline]
    pub fn is_dark(&self) -> bool {
        self.coord.is_dark()
    }
}

/// The board: 64 occupancy slots plus the arena of every piece spawned this match.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Option<PieceId>; CELL_COUNT],
    pieces: Vec<Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Board {
            cells: [None; CELL_COUNT],
            pieces: Vec::new(),
        }
    }

    /// Looks up a cell by signed coordinates. Off-board positions yield `None`.
    pub fn cell_at(&self, x: i8, y: i8) -> Option<Cell> {
        Coord::from_signed(x, y).map(|coord| self.cell(coord))
    }

    /// Returns the view of an on-board cell.
    #[inline]
    pub fn cell(&self, coord: Coord) -> Cell {
        Cell {
            coord,
            occupant: self.cells[coord.index()],
        }
    }

    #[inline]
    pub fn occupant(&self, coord: Coord) -> Option<PieceId> {
        self.cells[coord.index()]
    }

    #[inline]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.cells[coord.index()].is_none()
    }

    /// Returns a piece by id, including retired ones.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Returns the piece standing on `coord`.
    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.occupant(coord).and_then(|id| self.piece(id))
    }

    /// Iterates over the pieces currently in play, in id order.
    pub fn active_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.is_active())
    }

    /// Number of pieces ever spawned this match.
    pub fn spawned(&self) -> usize {
        self.pieces.len()
    }

    /// Puts a new piece on an empty cell.
    pub fn spawn(&mut self, kind: PieceKind, side: Side, coord: Coord) -> PieceId {
        debug_assert!(self.is_empty(coord), "spawn onto occupied cell {}", coord);
        let id = PieceId(self.pieces.len() as u32);
        self.pieces.push(Piece {
            id,
            kind,
            side,
            coord: Some(coord),
        });
        self.cells[coord.index()] = Some(id);
        id
    }

    /// Takes a piece out of play and returns the cell it stood on.
    pub fn remove(&mut self, id: PieceId) -> Option<Coord> {
        let piece = self.pieces.get_mut(id.index())?;
        let coord = piece.coord.take()?;
        debug_assert_eq!(self.cells[coord.index()], Some(id));
        self.cells[coord.index()] = None;
        Some(coord)
    }

    /// Moves an active piece onto an empty cell.
    pub fn relocate(&mut self, id: PieceId, to: Coord) {
        debug_assert!(self.is_empty(to), "relocate onto occupied cell {}", to);
        if let Some(piece) = self.pieces.get_mut(id.index()) {
            if let Some(from) = piece.coord.replace(to) {
                self.cells[from.index()] = None;
            }
            self.cells[to.index()] = Some(id);
        }
    }

    /// Applies a batch of relocations as one step.
    ///
    /// Every source cell is vacated before any target is filled, so the batch
    /// may freely permute pieces among each other's cells.
    pub fn place_all(&mut self, assignments: &[(PieceId, Coord)]) {
        for &(id, _) in assignments {
            self.remove(id);
        }
        for &(id, to) in assignments {
            self.relocate(id, to);
        }
    }

    /// Empties every cell and forgets every piece.
    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
        self.pieces.clear();
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", y + 1)?;
            for x in 0..BOARD_SIZE {
                let c = Coord::new(x, y)
                    .and_then(|coord| self.piece_at(coord))
                    .map(|p| p.kind.to_char(p.side))
                    .unwrap_or('.');
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: u8, y: u8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn cell_lookup_is_bounds_checked() {
        let board = Board::new();
        assert!(board.cell_at(0, 0).is_some());
        assert!(board.cell_at(7, 7).is_some());
        assert!(board.cell_at(8, 0).is_none());
        assert!(board.cell_at(-1, 4).is_none());
        assert!(board.cell_at(3, 3).unwrap().is_dark());
    }

    #[test]
    fn spawn_sets_both_references() {
        let mut board = Board::new();
        let id = board.spawn(PieceKind::Rook, Side::First, c(0, 0));
        assert_eq!(board.occupant(c(0, 0)), Some(id));
        assert_eq!(board.piece(id).unwrap().coord, Some(c(0, 0)));
    }

    #[test]
    fn relocate_vacates_source() {
        let mut board = Board::new();
        let id = board.spawn(PieceKind::Knight, Side::Second, c(1, 7));
        board.relocate(id, c(2, 5));
        assert!(board.is_empty(c(1, 7)));
        assert_eq!(board.piece_at(c(2, 5)).map(|p| p.id), Some(id));
    }

    #[test]
    fn remove_retires_piece() {
        let mut board = Board::new();
        let id = board.spawn(PieceKind::Pawn, Side::First, c(4, 1));
        assert_eq!(board.remove(id), Some(c(4, 1)));
        assert!(board.is_empty(c(4, 1)));
        assert!(!board.piece(id).unwrap().is_active());
        assert_eq!(board.remove(id), None);
        assert_eq!(board.active_pieces().count(), 0);
    }

    #[test]
    fn place_all_swaps_pieces() {
        let mut board = Board::new();
        let a = board.spawn(PieceKind::Rook, Side::First, c(0, 0));
        let b = board.spawn(PieceKind::Bishop, Side::First, c(2, 0));
        board.place_all(&[(a, c(2, 0)), (b, c(0, 0))]);
        assert_eq!(board.occupant(c(2, 0)), Some(a));
        assert_eq!(board.occupant(c(0, 0)), Some(b));
    }

    #[test]
    fn ids_are_not_reused() {
        let mut board = Board::new();
        let a = board.spawn(PieceKind::Pawn, Side::First, c(0, 1));
        board.remove(a);
        let b = board.spawn(PieceKind::Queen, Side::First, c(0, 1));
        assert_ne!(a, b);
        assert_eq!(board.spawned(), 2);
    }

    #[test]
    fn display_draws_rank_eight_on_top() {
        let mut board = Board::new();
        board.spawn(PieceKind::King, Side::Second, c(4, 7));
        board.spawn(PieceKind::King, Side::First, c(4, 0));
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8 ....k...");
        assert_eq!(lines[7], "1 ....K...");
        assert_eq!(lines[8], "  abcdefgh");
    }
}
