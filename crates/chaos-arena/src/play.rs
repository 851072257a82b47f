//! Line-oriented human-vs-bot play.
//!
//! The human always plays the first side and the bot the second. Each line of
//! input is one command; moves are written as two cells, e.g. `e2 e4`.

use std::io::{BufRead, Write};

use chaos_core::{Coord, ParseError, Target};
use chaos_engine::{Game, GameEvent, MatchSettings, Pacing, TurnState};
use thiserror::Error;

const HELP: &str = "\
Commands:
  e2 e4      move the piece on e2 to e4
  moves e2   list legal destinations of the piece on e2
  board      print the board
  reset      start a new match
  help       show this text
  quit       leave";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Coord, Coord),
    Moves(Coord),
    Board,
    Reset,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error(transparent)]
    Coord(#[from] ParseError),
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => Err(CommandError::Empty),
            ["board"] => Ok(Command::Board),
            ["reset"] => Ok(Command::Reset),
            ["help"] | ["?"] => Ok(Command::Help),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            ["moves", cell] => Ok(Command::Moves(cell.parse()?)),
            [from, to] => Ok(Command::Move(from.parse()?, to.parse()?)),
            // "e2e4" as a single word
            [word] if word.len() == 4 && word.is_char_boundary(2) => {
                Ok(Command::Move(word[..2].parse()?, word[2..].parse()?))
            }
            _ => Err(CommandError::Unknown(line.trim().to_string())),
        }
    }
}

/// One-line description of an event for the terminal.
pub fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::MatchStarted { settings } => format!(
            "New match: {} (you) against {} (bot)",
            settings.first.god, settings.second.god
        ),
        GameEvent::PieceMoved {
            kind,
            side,
            from,
            to,
            ..
        } => format!("{} {} {} -> {}", side, kind, from, to),
        GameEvent::PieceCaptured { kind, side, at, .. } => {
            format!("{} {} captured on {}", side, kind, at)
        }
        GameEvent::PiecePromoted { side, at, .. } => {
            format!("{} pawn promoted to queen on {}", side, at)
        }
        GameEvent::TeamShuffled { side, moves } => {
            format!("{} army reshuffled ({} pieces)", side, moves.len())
        }
        GameEvent::GodEffectTriggered(effect) => {
            let whose = match effect.target {
                Target::Own => "its own",
                Target::Enemy => "an enemy",
            };
            let mut line = format!(
                "{} ({}) casts {} on {} {} at {}",
                effect.god, effect.caster, effect.effect, whose, effect.victim_kind, effect.cell
            );
            if !effect.changed {
                line.push_str(", nothing happens");
            }
            line
        }
        GameEvent::GameOver { winner } => format!("Game over: {} wins", winner),
        GameEvent::TurnHandoff { next, is_bot } => {
            if *is_bot {
                format!("{} (bot) is thinking", next)
            } else {
                format!("{} to move", next)
            }
        }
    }
}

/// A terminal session: one human against the bot.
pub struct Session<I, O> {
    game: Game,
    settings: MatchSettings,
    pacing: Option<Pacing>,
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Session<I, O> {
    /// The first side is handed to the human and the second to the bot,
    /// whatever `settings` says. With `pacing`, event output is spaced out by
    /// the configured delays.
    pub fn new(
        settings: MatchSettings,
        seed: u64,
        pacing: Option<Pacing>,
        input: I,
        output: O,
    ) -> Self {
        let mut settings = settings;
        settings.first.bot = false;
        settings.second.bot = true;
        Session {
            game: Game::seeded(settings, seed),
            settings,
            pacing,
            input,
            output,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "{}", HELP)?;
        writeln!(self.output, "{}", self.game.state().board())?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(CommandError::Empty) => {}
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) -> std::io::Result<()> {
        match command {
            Command::Move(from, to) => self.human_move(from, to),
            Command::Moves(cell) => {
                let Some(id) = self.game.state().board().occupant(cell) else {
                    return writeln!(self.output, "No piece on {}", cell);
                };
                let cells: Vec<String> = self
                    .game
                    .legal_destinations(id)
                    .iter()
                    .map(Coord::to_string)
                    .collect();
                if cells.is_empty() {
                    writeln!(self.output, "No moves from {}", cell)
                } else {
                    writeln!(self.output, "{}", cells.join(" "))
                }
            }
            Command::Board => writeln!(self.output, "{}", self.game.state().board()),
            Command::Reset => {
                let events = self.game.reset_match(self.settings);
                self.show(&events)?;
                writeln!(self.output, "{}", self.game.state().board())
            }
            Command::Help => writeln!(self.output, "{}", HELP),
            Command::Quit => Ok(()),
        }
    }

    fn human_move(&mut self, from: Coord, to: Coord) -> std::io::Result<()> {
        let Some(id) = self.game.state().board().occupant(from) else {
            return writeln!(self.output, "No piece on {}", from);
        };
        let events = match self.game.submit_move(id, to) {
            Ok(events) => events,
            Err(e) => return writeln!(self.output, "Rejected: {}", e),
        };
        self.show(&events)?;

        if matches!(self.game.turn(), TurnState::BotThinking(_)) {
            match self.game.advance_bots() {
                Ok(run) => {
                    self.show(&run.events)?;
                    if let Some(side) = run.stalled {
                        writeln!(self.output, "{} has no legal move; type 'reset' to start over", side)?;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "bot turn failed");
                    writeln!(self.output, "Bot failed: {}", e)?
                }
            }
        }

        writeln!(self.output, "{}", self.game.state().board())?;
        if self.game.is_game_over() {
            writeln!(self.output, "Type 'reset' to play again or 'quit' to leave.")?;
        }
        Ok(())
    }

    fn show(&mut self, events: &[GameEvent]) -> std::io::Result<()> {
        for event in events {
            tracing::debug!(event = event.name(), "event");
            writeln!(self.output, "{}", describe(event))?;
            if let Some(pacing) = &self.pacing {
                self.output.flush()?;
                std::thread::sleep(event.presentation_delay(pacing));
            }
        }
        Ok(())
    }
}
