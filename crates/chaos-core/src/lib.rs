//! Core types for chaos chess.
//!
//! This crate provides the plain value types shared by the engine and its hosts:
//! - [`Side`] for the two players
//! - [`PieceKind`] with material values and the rank order
//! - [`Coord`] for cells on the 8x8 board
//! - [`God`], [`Target`], and [`EffectKind`] for the chaos effects

mod coord;
mod error;
mod god;
mod piece;
mod side;

pub use coord::{Coord, BOARD_SIZE};
pub use error::ParseError;
pub use god::{EffectKind, God, Target};
pub use piece::PieceKind;
pub use side::Side;
