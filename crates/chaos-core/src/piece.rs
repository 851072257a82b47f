//! Piece kinds, material values, and rank order.

use serde::{Deserialize, Serialize};

use crate::Side;

/// The six kinds of pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// The rank order walked by upgrade and downgrade effects. Kings are not ranked.
    pub const RANKED: [PieceKind; 5] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    /// Returns the index of this kind (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the material value used by the bot to rank captures.
    pub const fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 10,
            PieceKind::Knight => 20,
            PieceKind::Bishop => 30,
            PieceKind::Rook => 40,
            PieceKind::Queen => 100,
            PieceKind::King => 1000,
        }
    }

    /// Returns the next kind up the rank order, or `None` for Queen and King.
    pub const fn upgraded(self) -> Option<PieceKind> {
        match self {
            PieceKind::Pawn => Some(PieceKind::Knight),
            PieceKind::Knight => Some(PieceKind::Bishop),
            PieceKind::Bishop => Some(PieceKind::Rook),
            PieceKind::Rook => Some(PieceKind::Queen),
            PieceKind::Queen | PieceKind::King => None,
        }
    }

    /// Returns the next kind down the rank order, or `None` for Pawn and King.
    pub const fn downgraded(self) -> Option<PieceKind> {
        match self {
            PieceKind::Knight => Some(PieceKind::Pawn),
            PieceKind::Bishop => Some(PieceKind::Knight),
            PieceKind::Rook => Some(PieceKind::Bishop),
            PieceKind::Queen => Some(PieceKind::Rook),
            PieceKind::Pawn | PieceKind::King => None,
        }
    }

    /// Returns true if this kind moves by ray scan (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Returns the board-dump letter, uppercase for the first side.
    pub const fn to_char(self, side: Side) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match side {
            Side::First => c.to_ascii_uppercase(),
            Side::Second => c,
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_follow_rank_order() {
        for pair in PieceKind::RANKED.windows(2) {
            assert!(pair[0].value() < pair[1].value());
        }
        assert_eq!(PieceKind::Bishop.value(), 30);
        assert_eq!(PieceKind::King.value(), 1000);
    }

    #[test]
    fn rank_steps_are_inverse() {
        for kind in PieceKind::RANKED {
            if let Some(up) = kind.upgraded() {
                assert_eq!(up.downgraded(), Some(kind));
            }
        }
    }

    #[test]
    fn rank_boundaries() {
        assert_eq!(PieceKind::Pawn.downgraded(), None);
        assert_eq!(PieceKind::Queen.upgraded(), None);
        assert_eq!(PieceKind::King.upgraded(), None);
        assert_eq!(PieceKind::King.downgraded(), None);
    }

    #[test]
    fn board_letters() {
        assert_eq!(PieceKind::Pawn.to_char(Side::First), 'P');
        assert_eq!(PieceKind::Knight.to_char(Side::Second), 'n');
        assert_eq!(PieceKind::King.to_char(Side::First), 'K');
    }

    #[test]
    fn is_slider() {
        assert!(!PieceKind::Pawn.is_slider());
        assert!(!PieceKind::Knight.is_slider());
        assert!(PieceKind::Bishop.is_slider());
        assert!(PieceKind::Rook.is_slider());
        assert!(PieceKind::Queen.is_slider());
        assert!(!PieceKind::King.is_slider());
    }
}
