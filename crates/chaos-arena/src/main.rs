use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chaos_arena::config::ArenaConfig;
use chaos_arena::json_output;
use chaos_arena::play::Session;
use chaos_arena::runner::MatchRunner;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chaos-arena")]
#[command(about = "Chaos chess: bot matches and terminal play")]
struct Cli {
    /// Configuration file (defaults to ./chaos.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run bot-vs-bot games and print a summary
    Match {
        /// Number of games to play
        #[arg(short, long)]
        games: Option<u32>,
        /// Base seed; game i uses seed + i
        #[arg(short, long)]
        seed: Option<u64>,
        /// Give up on a game after this many moves
        #[arg(long)]
        max_plies: Option<u32>,
        /// Write every game's event log to this file
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Play the bot from the terminal
    Play {
        /// Seed for shuffles, god effects, and the bot
        #[arg(short, long)]
        seed: Option<u64>,
        /// Space out event output using the configured pacing
        #[arg(long)]
        pace: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ArenaConfig::load_from(path)?,
        None => ArenaConfig::load()?,
    };
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Match {
            games,
            seed,
            max_plies,
            json,
        } => {
            let games = games.unwrap_or(config.games);
            let base_seed = seed.or(config.seed).unwrap_or_else(rand::random);
            let max_plies = max_plies.unwrap_or(config.max_plies);
            let settings = config.match_settings();
            let runner = MatchRunner::new(settings, max_plies);

            println!(
                "Running {} games: {} vs {} (base seed {})",
                games, settings.first.god, settings.second.god, base_seed
            );
            tracing::info!(games, base_seed, max_plies, "match started");

            let report = runner.play_series(games, base_seed, json.is_some(), |i, record| {
                println!(
                    "Game {}: {} ({} plies, seed {})",
                    i, record.outcome, record.plies, record.seed
                );
            });

            println!();
            println!("{}", report.summary);

            if let Some(path) = json {
                json_output::write_json(&path, &report.summary, &report.records)
                    .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
                println!("Event logs written to {}", path.display());
            }
        }
        Commands::Play { seed, pace } => {
            let seed = seed.or(config.seed).unwrap_or_else(rand::random);
            tracing::info!(seed, "starting terminal session");
            let pacing = pace.then_some(config.pacing);
            let stdin = io::stdin();
            let mut session = Session::new(
                config.match_settings(),
                seed,
                pacing,
                stdin.lock(),
                io::stdout(),
            );
            session.run()?;
        }
    }

    Ok(())
}
