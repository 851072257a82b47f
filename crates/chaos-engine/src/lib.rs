//! Rules engine for chaos chess.
//!
//! Chaos chess plays on a normal 8x8 board with the usual armies, but:
//! - a match is won only by capturing the enemy king (no check, castling, or en passant)
//! - after every move but the first, the mover's army is reshuffled across its own cells
//! - each player serves a [`God`](chaos_core::God) whose effects randomly destroy,
//!   downgrade, betray, or upgrade pieces after each move
//!
//! This crate provides:
//! - [`Board`] and [`GameState`] - the piece arena, occupancy, and player rosters
//! - [`legal_destinations`] - per-kind move generation
//! - [`GameState::apply_move`] - capture, promotion, and the king-capture win
//! - [`GameState::shuffle_team`] and [`GameState::invoke_god`] - the chaos phase
//! - [`bot::select_move`] - the greedy capture bot
//! - [`Game`] - the turn state machine, driven by discrete events
//!
//! # Example
//!
//! ```
//! use chaos_core::{Coord, God};
//! use chaos_engine::{Game, MatchSettings, TurnState};
//!
//! let settings = MatchSettings::new(God::Khorne, false, God::Nurgle, true);
//! let mut game = Game::seeded(settings, 7);
//!
//! let a2 = Coord::from_algebraic("a2").unwrap();
//! let a4 = Coord::from_algebraic("a4").unwrap();
//! let pawn = game.state().board().occupant(a2).unwrap();
//! game.submit_move(pawn, a4).unwrap();
//! assert!(matches!(game.turn(), TurnState::BotThinking(_)));
//!
//! let run = game.advance_bots().unwrap();
//! assert!(!run.events.is_empty());
//! ```

mod board;
pub mod bot;
mod events;
mod game;
mod gods;
pub mod movegen;
mod player;
mod resolve;
mod settings;
mod shuffle;
mod state;

pub use board::{Board, Cell, Piece, PieceId};
pub use events::GameEvent;
pub use game::{BotRun, Game, MoveError, TurnState};
pub use gods::{roll_effect, GodEffect};
pub use movegen::{all_moves, destinations_of, legal_destinations, Destinations};
pub use player::Player;
pub use resolve::{MoveOutcome, Resolution};
pub use settings::{MatchSettings, Pacing, PlayerSettings};
pub use shuffle::Relocation;
pub use state::GameState;
