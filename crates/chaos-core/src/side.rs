//! Player side representation.

use serde::{Deserialize, Serialize};

/// The two sides of a match. `First` moves first and advances towards row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Side {
    First = 0,
    Second = 1,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::First, Side::Second];

    /// Returns the opposite side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Returns the index (0 for First, 1 for Second).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true for the side that opens the match.
    #[inline]
    pub const fn is_first(self) -> bool {
        matches!(self, Side::First)
    }

    /// Returns the forward direction along y (+1 for First, -1 for Second).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::First => 1,
            Side::Second => -1,
        }
    }

    /// Returns the row this side's pawns start on.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Side::First => 1,
            Side::Second => 6,
        }
    }

    /// Returns the row on which this side's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::First => 7,
            Side::Second => 0,
        }
    }

    /// Returns the row holding this side's back-rank pieces at the start.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Side::First => 0,
            Side::Second => 7,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::First => write!(f, "First"),
            Side::Second => write!(f, "Second"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_side() {
        assert_eq!(Side::First.opposite(), Side::Second);
        assert_eq!(Side::Second.opposite(), Side::First);
    }

    #[test]
    fn rows_mirror_each_other() {
        for side in Side::ALL {
            assert_eq!(side.pawn_row() + side.opposite().pawn_row(), 7);
            assert_eq!(side.promotion_row(), side.opposite().back_row());
        }
    }

    #[test]
    fn forward_direction() {
        assert_eq!(Side::First.forward(), 1);
        assert_eq!(Side::Second.forward(), -1);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Side::First), "First");
        assert_eq!(format!("{}", Side::Second), "Second");
    }
}
