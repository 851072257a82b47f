//! Bot-vs-bot match execution.
//!
//! [`MatchRunner`] plays a series of seeded games with both sides handed to
//! the bot and collects a [`GameRecord`] per game.

use std::fmt;

use chaos_core::{EffectKind, Side};
use chaos_engine::{Game, GameEvent, MatchSettings, MoveError};
use serde::Serialize;

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    /// A king was captured.
    Won(Side),
    /// The side on the move had no legal move at all.
    Stalled(Side),
    /// The ply limit was reached first.
    Unfinished,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Won(side) => write!(f, "{} wins", side),
            GameOutcome::Stalled(side) => write!(f, "{} stuck without moves", side),
            GameOutcome::Unfinished => write!(f, "unfinished"),
        }
    }
}

/// The record of one finished (or abandoned) game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub seed: u64,
    pub settings: MatchSettings,
    pub outcome: GameOutcome,
    pub plies: u32,
    /// Every event the engine emitted, in order.
    pub events: Vec<GameEvent>,
}

impl GameRecord {
    /// Kinds of the god effects that fired, in order.
    pub fn god_effects(&self) -> impl Iterator<Item = EffectKind> + '_ {
        self.events.iter().filter_map(|e| match e {
            GameEvent::GodEffectTriggered(effect) => Some(effect.effect),
            _ => None,
        })
    }

    /// Pieces lost by `side` to captures.
    pub fn captures_against(&self, side: Side) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::PieceCaptured { side: s, .. } if *s == side))
            .count()
    }
}

/// Aggregated results of a series of games.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchSummary {
    pub games: u32,
    pub first_wins: u32,
    pub second_wins: u32,
    pub stalled: u32,
    pub unfinished: u32,
    pub total_plies: u64,
    pub god_effects: u32,
}

impl MatchSummary {
    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        match game.outcome {
            GameOutcome::Won(Side::First) => self.first_wins += 1,
            GameOutcome::Won(Side::Second) => self.second_wins += 1,
            GameOutcome::Stalled(_) => self.stalled += 1,
            GameOutcome::Unfinished => self.unfinished += 1,
        }
        self.total_plies += u64::from(game.plies);
        self.god_effects += game.god_effects().count() as u32;
    }

    pub fn average_plies(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_plies as f64 / f64::from(self.games)
        }
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games:        {}", self.games)?;
        writeln!(f, "First wins:   {}", self.first_wins)?;
        writeln!(f, "Second wins:  {}", self.second_wins)?;
        writeln!(f, "Stalled:      {}", self.stalled)?;
        writeln!(f, "Unfinished:   {}", self.unfinished)?;
        writeln!(f, "Avg plies:    {:.1}", self.average_plies())?;
        write!(f, "God effects:  {}", self.god_effects)
    }
}

/// Plays bot-vs-bot games.
#[derive(Debug, Clone)]
pub struct MatchRunner {
    settings: MatchSettings,
    max_plies: u32,
}

impl MatchRunner {
    /// Creates a runner. Both sides are forced to bots regardless of `settings`.
    pub fn new(settings: MatchSettings, max_plies: u32) -> Self {
        MatchRunner {
            settings: settings.all_bots(),
            max_plies,
        }
    }

    /// Plays one game from `seed` to its end or the ply limit.
    pub fn play_game(&self, seed: u64) -> GameRecord {
        let mut game = Game::seeded(self.settings, seed);
        let mut events = Vec::new();

        let outcome = loop {
            if let Some(winner) = game.winner() {
                break GameOutcome::Won(winner);
            }
            if game.plies() >= self.max_plies {
                break GameOutcome::Unfinished;
            }
            match game.bot_tick() {
                Ok(more) => events.extend(more),
                Err(MoveError::NoLegalMoves(side)) => break GameOutcome::Stalled(side),
                Err(e) => {
                    tracing::warn!(seed, error = %e, "bot tick rejected");
                    break GameOutcome::Unfinished;
                }
            }
        };

        tracing::info!(seed, plies = game.plies(), %outcome, "game finished");
        GameRecord {
            seed,
            settings: self.settings,
            outcome,
            plies: game.plies(),
            events,
        }
    }

    /// Plays `games` games with seeds `base_seed`, `base_seed + 1`, ...
    ///
    /// Each game goes to `on_game`, with its 1-based number, as soon as it
    /// ends. Full records are only retained when `keep_records` is set.
    pub fn play_series<F>(
        &self,
        games: u32,
        base_seed: u64,
        keep_records: bool,
        mut on_game: F,
    ) -> SeriesReport
    where
        F: FnMut(u32, &GameRecord),
    {
        let mut report = SeriesReport::default();
        for i in 0..games {
            let record = self.play_game(base_seed.wrapping_add(u64::from(i)));
            on_game(i + 1, &record);
            report.summary.record(&record);
            if keep_records {
                report.records.push(record);
            }
        }
        report
    }
}

/// What a series of games produced.
#[derive(Debug, Clone, Default)]
pub struct SeriesReport {
    pub summary: MatchSummary,
    /// Empty unless the series was asked to keep records.
    pub records: Vec<GameRecord>,
}
