//! Turn sequencing as an explicit state machine.
//!
//! The [`Game`] only ever rests in one of the [`TurnState`]s. A call to
//! [`Game::submit_move`] or [`Game::bot_tick`] runs the transient phases
//! (resolving, post-move chaos, handoff) to completion and returns the events
//! they produced. Nothing here sleeps or blocks; hosts pace the events
//! themselves.

use std::fmt;

use chaos_core::{Coord, PieceKind, Side, Target};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::board::PieceId;
use crate::bot;
use crate::events::GameEvent;
use crate::movegen::destinations_of;
use crate::resolve::{MoveOutcome, Resolution};
use crate::settings::{MatchSettings, PlayerSettings};
use crate::state::GameState;

/// Why a move request was turned down. The game is unchanged after any of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A king has been captured; only a reset is accepted now.
    #[error("game is over")]
    GameOver,
    /// The bot is to move; human input is not accepted.
    #[error("waiting for the bot to move")]
    BotToMove,
    /// A bot tick arrived while a human is to move.
    #[error("not the bot's turn")]
    NotBotTurn,
    /// The piece belongs to the side not on the move.
    #[error("piece {piece} belongs to {owner}, but {to_move} is to move")]
    NotYourTurn {
        piece: PieceId,
        owner: Side,
        to_move: Side,
    },
    /// No piece with this id is in play.
    #[error("no active piece {0}")]
    UnknownPiece(PieceId),
    /// The target is the cell the piece already stands on.
    #[error("piece is already on {0}")]
    SameCell(Coord),
    /// The target is not among the piece's legal destinations.
    #[error("piece {piece} cannot move to {to}")]
    IllegalDestination { piece: PieceId, to: Coord },
    /// The side on the move has no legal move at all.
    #[error("{0} has no legal moves")]
    NoLegalMoves(Side),
}

/// Where the turn sequence is resting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for a human move from this side.
    AwaitingMove(Side),
    /// Waiting for a bot tick for this side.
    BotThinking(Side),
    /// A king fell. Terminal until the match is reset.
    GameOver { winner: Side },
}

impl TurnState {
    fn waiting_for(side: Side, is_bot: bool) -> Self {
        if is_bot {
            TurnState::BotThinking(side)
        } else {
            TurnState::AwaitingMove(side)
        }
    }
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnState::AwaitingMove(side) => write!(f, "awaiting move from {}", side),
            TurnState::BotThinking(side) => write!(f, "bot thinking for {}", side),
            TurnState::GameOver { winner } => write!(f, "game over, {} wins", winner),
        }
    }
}

/// The outcome of [`Game::advance_bots`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BotRun {
    pub events: Vec<GameEvent>,
    /// The bot side that was left on the move without a legal move, if any.
    pub stalled: Option<Side>,
}

/// A match in progress, with its own random source.
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    state: GameState,
    settings: MatchSettings,
    turn: TurnState,
    /// Suppresses the chaos phase for the opening move of a match.
    first_turn: bool,
    plies: u32,
    rng: R,
}

impl Game<StdRng> {
    /// Starts a standard match with a generator seeded from `seed`.
    pub fn seeded(settings: MatchSettings, seed: u64) -> Self {
        Game::new(settings, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Starts a standard match.
    pub fn new(settings: MatchSettings, rng: R) -> Self {
        let state = GameState::standard(settings);
        let turn = TurnState::waiting_for(Side::First, settings.first.bot);
        Game {
            state,
            settings,
            turn,
            first_turn: true,
            plies: 0,
            rng,
        }
    }

    /// Resumes from an arbitrary position with `to_move` on the move.
    ///
    /// The position counts as mid-match, so the chaos phase runs after the
    /// very next move.
    pub fn from_state(state: GameState, to_move: Side, rng: R) -> Self {
        let settings = MatchSettings {
            first: PlayerSettings {
                god: state.player(Side::First).god(),
                bot: state.player(Side::First).is_bot(),
            },
            second: PlayerSettings {
                god: state.player(Side::Second).god(),
                bot: state.player(Side::Second).is_bot(),
            },
        };
        let turn = TurnState::waiting_for(to_move, state.player(to_move).is_bot());
        Game {
            state,
            settings,
            turn,
            first_turn: false,
            plies: 0,
            rng,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn settings(&self) -> MatchSettings {
        self.settings
    }

    #[inline]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// True until the opening move of the match has been resolved.
    #[inline]
    pub fn is_first_turn(&self) -> bool {
        self.first_turn
    }

    /// Number of moves resolved this match.
    #[inline]
    pub fn plies(&self) -> u32 {
        self.plies
    }

    pub fn winner(&self) -> Option<Side> {
        match self.turn {
            TurnState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Legal destinations of a piece, for highlighting before a move is committed.
    ///
    /// Pieces out of play have none.
    pub fn legal_destinations(&self, id: PieceId) -> Vec<Coord> {
        if self.state.active_piece(id).is_none() {
            return Vec::new();
        }
        destinations_of(self.state.board(), id).as_slice().to_vec()
    }

    /// Human input: move `id` to `to`.
    pub fn submit_move(&mut self, id: PieceId, to: Coord) -> Result<Vec<GameEvent>, MoveError> {
        match self.turn {
            TurnState::GameOver { .. } => Err(MoveError::GameOver),
            TurnState::BotThinking(_) => Err(MoveError::BotToMove),
            TurnState::AwaitingMove(side) => {
                self.validate(side, id, to)?;
                Ok(self.play(side, id, to))
            }
        }
    }

    /// Lets the bot on the move pick and play its move.
    pub fn bot_tick(&mut self) -> Result<Vec<GameEvent>, MoveError> {
        let side = match self.turn {
            TurnState::GameOver { .. } => return Err(MoveError::GameOver),
            TurnState::AwaitingMove(_) => return Err(MoveError::NotBotTurn),
            TurnState::BotThinking(side) => side,
        };
        tracing::trace!(%side, "bot selecting");
        let (id, to) =
            bot::select_move(&self.state, side, &mut self.rng).ok_or(MoveError::NoLegalMoves(side))?;
        self.validate(side, id, to)?;
        Ok(self.play(side, id, to))
    }

    /// Ticks bots until a human is to move or the game ends.
    ///
    /// A bot left without a legal move ends the run early; the events gathered
    /// so far are kept and [`BotRun::stalled`] names the stuck side, which is
    /// still on the move.
    pub fn advance_bots(&mut self) -> Result<BotRun, MoveError> {
        let mut run = BotRun::default();
        while matches!(self.turn, TurnState::BotThinking(_)) {
            match self.bot_tick() {
                Ok(more) => run.events.extend(more),
                Err(MoveError::NoLegalMoves(side)) => {
                    tracing::warn!(%side, plies = self.plies, "bot has no legal move");
                    run.stalled = Some(side);
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(run)
    }

    /// Discards the current match and sets up a fresh one. Accepted in any state.
    pub fn reset_match(&mut self, settings: MatchSettings) -> Vec<GameEvent> {
        self.state.reset(settings);
        self.settings = settings;
        self.turn = TurnState::waiting_for(Side::First, settings.first.bot);
        self.first_turn = true;
        self.plies = 0;
        tracing::info!(
            first = %settings.first.god,
            second = %settings.second.god,
            "match reset"
        );
        vec![
            GameEvent::MatchStarted { settings },
            GameEvent::TurnHandoff {
                next: Side::First,
                is_bot: settings.first.bot,
            },
        ]
    }

    fn validate(&self, side: Side, id: PieceId, to: Coord) -> Result<(), MoveError> {
        let piece = self
            .state
            .active_piece(id)
            .ok_or(MoveError::UnknownPiece(id))?;
        if piece.side != side {
            return Err(MoveError::NotYourTurn {
                piece: id,
                owner: piece.side,
                to_move: side,
            });
        }
        if piece.coord == Some(to) {
            return Err(MoveError::SameCell(to));
        }
        if !destinations_of(self.state.board(), id).contains(to) {
            return Err(MoveError::IllegalDestination { piece: id, to });
        }
        Ok(())
    }

    /// Resolving, then post-move chaos, then handoff. The move must be validated.
    fn play(&mut self, side: Side, id: PieceId, to: Coord) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let kind = self.state.active_piece(id).map(|p| p.kind);
        let Some(resolution) = self.state.apply_move(id, to) else {
            return events;
        };
        self.plies += 1;
        if let Some(kind) = kind {
            self.record_resolution(&resolution, kind, &mut events);
        }

        if let Some(winner) = resolution.outcome.winner() {
            self.turn = TurnState::GameOver { winner };
            events.push(GameEvent::GameOver { winner });
            tracing::info!(%winner, plies = self.plies, "game over");
            return events;
        }

        if self.first_turn {
            tracing::debug!("opening move, chaos phase skipped");
            self.first_turn = false;
        } else {
            self.chaos_phase(side, &mut events);
        }

        let next = side.opposite();
        let is_bot = self.state.player(next).is_bot();
        self.turn = TurnState::waiting_for(next, is_bot);
        tracing::debug!(%next, is_bot, "handoff");
        events.push(GameEvent::TurnHandoff { next, is_bot });
        events
    }

    fn record_resolution(
        &self,
        resolution: &Resolution,
        kind: PieceKind,
        events: &mut Vec<GameEvent>,
    ) {
        events.push(GameEvent::PieceMoved {
            piece: resolution.piece,
            kind,
            side: resolution.side,
            from: resolution.from,
            to: resolution.to,
        });
        if let Some(captured) = resolution.outcome.captured() {
            if let Some(victim) = self.state.board().piece(captured) {
                events.push(GameEvent::PieceCaptured {
                    piece: captured,
                    kind: victim.kind,
                    side: victim.side,
                    at: resolution.to,
                });
            }
        }
        if let MoveOutcome::MovedAndPromoted { queen, .. } = resolution.outcome {
            events.push(GameEvent::PiecePromoted {
                pawn: resolution.piece,
                queen,
                side: resolution.side,
                at: resolution.to,
            });
        }
    }

    /// Reshuffles the mover's army, then lets the opponent's god act on its own
    /// army and the mover's god act on the opponent's.
    fn chaos_phase(&mut self, mover: Side, events: &mut Vec<GameEvent>) {
        let moves = self.state.shuffle_team(mover, &mut self.rng);
        if !moves.is_empty() {
            events.push(GameEvent::TeamShuffled { side: mover, moves });
        }

        let opponent = mover.opposite();
        for (caster, target) in [(opponent, Target::Own), (mover, Target::Enemy)] {
            if let Some(effect) = self.state.invoke_god(caster, target, &mut self.rng) {
                events.push(GameEvent::GodEffectTriggered(effect));
            }
        }
    }
}
