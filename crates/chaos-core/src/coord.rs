//! Board coordinates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 8;

/// A cell coordinate on the 8x8 board.
///
/// `x` is the column (file `a`-`h`), `y` is the row (rank `1`-`8`, stored
/// as 0-7). Cells are indexed row-major: `index = y * 8 + x`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Creates a coordinate, returning `None` when off the board.
    #[inline]
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Coord { x, y })
        } else {
            None
        }
    }

    /// Creates a coordinate from signed components, returning `None` when off the board.
    #[inline]
    pub const fn from_signed(x: i8, y: i8) -> Option<Self> {
        if x < 0 || y < 0 {
            return None;
        }
        Self::new(x as u8, y as u8)
    }

    /// Creates a coordinate from a row-major index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Coord {
                x: index % BOARD_SIZE,
                y: index / BOARD_SIZE,
            })
        } else {
            None
        }
    }

    /// Parses algebraic notation (e.g. `"e4"`).
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || rank < b'1' {
            return None;
        }
        Self::new(file - b'a', rank - b'1')
    }

    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        (self.y * BOARD_SIZE + self.x) as usize
    }

    /// Returns the cell shifted by `(dx, dy)`, or `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Self::from_signed(self.x as i8 + dx, self.y as i8 + dy)
    }

    /// Dark cells are those whose column and row share parity.
    #[inline]
    pub const fn is_dark(self) -> bool {
        self.x % 2 == self.y % 2
    }

    /// Returns the algebraic notation for this cell.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.x) as char, self.y + 1)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl FromStr for Coord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coord::from_algebraic(s.trim()).ok_or_else(|| ParseError::InvalidCoord(s.to_string()))
    }
}

impl From<Coord> for String {
    fn from(coord: Coord) -> Self {
        coord.to_algebraic()
    }
}

impl TryFrom<String> for Coord {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bounds_checked_construction() {
        assert!(Coord::new(0, 0).is_some());
        assert!(Coord::new(7, 7).is_some());
        assert!(Coord::new(8, 0).is_none());
        assert!(Coord::new(0, 8).is_none());
        assert!(Coord::from_signed(-1, 3).is_none());
    }

    #[test]
    fn algebraic_names() {
        assert_eq!(Coord::from_algebraic("a2"), Coord::new(0, 1));
        assert_eq!(Coord::from_algebraic("E5"), Coord::new(4, 4));
        assert_eq!(Coord::from_algebraic("h8"), Coord::new(7, 7));
        assert_eq!(Coord::from_algebraic("i1"), None);
        assert_eq!(Coord::from_algebraic("a9"), None);
        assert_eq!(Coord::from_algebraic("a0"), None);
        assert_eq!(Coord::from_algebraic(""), None);
        assert_eq!(Coord::new(4, 3).map(Coord::to_algebraic).as_deref(), Some("e4"));
    }

    #[test]
    fn parse_error_names_input() {
        let err = "z9".parse::<Coord>().unwrap_err();
        assert_eq!(err, ParseError::InvalidCoord("z9".to_string()));
    }

    #[test]
    fn parity() {
        assert!(Coord::new(0, 0).unwrap().is_dark());
        assert!(!Coord::new(1, 0).unwrap().is_dark());
        assert!(Coord::new(3, 5).unwrap().is_dark());
    }

    #[test]
    fn offsets_stop_at_edges() {
        let corner = Coord::new(7, 7).unwrap();
        assert_eq!(corner.offset(1, 0), None);
        assert_eq!(corner.offset(-1, -2), Coord::new(6, 5));
    }

    #[test]
    fn serializes_as_algebraic() {
        let c = Coord::new(2, 6).unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"c7\"");
        let back: Coord = serde_json::from_str("\"c7\"").unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<Coord>("\"k1\"").is_err());
    }

    proptest! {
        #[test]
        fn index_roundtrip(index in 0u8..64) {
            let c = Coord::from_index(index).unwrap();
            prop_assert_eq!(c.index(), index as usize);
            prop_assert_eq!(Coord::from_algebraic(&c.to_algebraic()), Some(c));
        }
    }
}
