//! Players and their piece rosters.

use chaos_core::{God, Side};

use crate::board::PieceId;
use crate::settings::PlayerSettings;

/// A player persists across matches; only the roster, god, and bot flag reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    side: Side,
    god: God,
    is_bot: bool,
    /// Pieces in play, in the order they entered play.
    active: Vec<PieceId>,
    /// Pieces lost to captures and god destruction. Append-only.
    dead: Vec<PieceId>,
}

impl Player {
    pub fn new(side: Side, settings: PlayerSettings) -> Self {
        Player {
            side,
            god: settings.god,
            is_bot: settings.bot,
            active: Vec::new(),
            dead: Vec::new(),
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn is_first(&self) -> bool {
        self.side.is_first()
    }

    #[inline]
    pub fn god(&self) -> God {
        self.god
    }

    #[inline]
    pub fn is_bot(&self) -> bool {
        self.is_bot
    }

    /// Active pieces in enumeration order.
    pub fn active(&self) -> &[PieceId] {
        &self.active
    }

    pub fn dead(&self) -> &[PieceId] {
        &self.dead
    }

    pub fn owns(&self, id: PieceId) -> bool {
        self.active.contains(&id)
    }

    pub(crate) fn add_active(&mut self, id: PieceId) {
        debug_assert!(!self.active.contains(&id));
        self.active.push(id);
    }

    /// Moves a piece from the active roster to the dead list.
    pub(crate) fn bury(&mut self, id: PieceId) {
        if self.retire(id) {
            self.dead.push(id);
        }
    }

    /// Drops a piece from the active roster without recording it as dead.
    pub(crate) fn retire(&mut self, id: PieceId) -> bool {
        match self.active.iter().position(|&p| p == id) {
            Some(index) => {
                self.active.remove(index);
                true
            }
            None => false,
        }
    }

    /// Clears both rosters and takes on new settings for the next match.
    pub(crate) fn reset(&mut self, settings: PlayerSettings) {
        self.god = settings.god;
        self.is_bot = settings.bot;
        self.active.clear();
        self.dead.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use chaos_core::{Coord, PieceKind};

    fn player() -> Player {
        Player::new(
            Side::First,
            PlayerSettings {
                god: God::Slaanesh,
                bot: false,
            },
        )
    }

    #[test]
    fn bury_keeps_order_of_survivors() {
        let mut board = Board::new();
        let mut p = player();
        let ids: Vec<PieceId> = (0..3)
            .map(|x| board.spawn(PieceKind::Pawn, Side::First, Coord::new(x, 1).unwrap()))
            .collect();
        for &id in &ids {
            p.add_active(id);
        }
        p.bury(ids[1]);
        assert_eq!(p.active(), &[ids[0], ids[2]]);
        assert_eq!(p.dead(), &[ids[1]]);
    }

    #[test]
    fn retire_does_not_record_death() {
        let mut board = Board::new();
        let mut p = player();
        let id = board.spawn(PieceKind::Pawn, Side::First, Coord::new(0, 1).unwrap());
        p.add_active(id);
        assert!(p.retire(id));
        assert!(p.active().is_empty());
        assert!(p.dead().is_empty());
        assert!(!p.retire(id));
    }

    #[test]
    fn reset_reassigns_god_and_bot() {
        let mut board = Board::new();
        let mut p = player();
        let id = board.spawn(PieceKind::Rook, Side::First, Coord::new(0, 0).unwrap());
        p.add_active(id);
        p.bury(id);
        p.reset(PlayerSettings {
            god: God::Khorne,
            bot: true,
        });
        assert_eq!(p.god(), God::Khorne);
        assert!(p.is_bot());
        assert!(p.active().is_empty());
        assert!(p.dead().is_empty());
        assert_eq!(p.side(), Side::First);
    }
}
