//! Chaos Arena - a headless host for chaos chess.
//!
//! This crate drives the rules engine without a graphical front end: it plays
//! bot-vs-bot matches, lets a human play the bot over stdin, and exports event
//! logs as JSON.
//!
//! # Modules
//!
//! - [`config`] - `chaos.toml` loading
//! - [`runner`] - bot-vs-bot match execution and summaries
//! - [`play`] - line-oriented human-vs-bot sessions
//! - [`json_output`] - JSON export of match results

pub mod config;
pub mod json_output;
pub mod play;
pub mod runner;
