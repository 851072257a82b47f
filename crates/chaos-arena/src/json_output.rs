//! JSON export of match results.
//!
//! A match file holds the summary plus every game's full event log, so a
//! replay viewer can step through the moves, shuffles, and god effects.

use std::path::Path;

use serde::Serialize;

use crate::runner::{GameRecord, MatchSummary};

/// JSON representation of a whole match.
#[derive(Serialize)]
struct MatchJson<'a> {
    summary: &'a MatchSummary,
    games: &'a [GameRecord],
}

/// Writes a match to `path` as pretty-printed JSON.
///
/// The file looks like:
/// ```json
/// {
///   "summary": { "games": 1, "first_wins": 1, ... },
///   "games": [
///     {
///       "seed": 42,
///       "settings": { "first": { "god": "khorne", "bot": true }, ... },
///       "outcome": { "won": "first" },
///       "plies": 57,
///       "events": [ { "event": "piece_moved", ... }, ... ]
///     }
///   ]
/// }
/// ```
pub fn write_json<P: AsRef<Path>>(
    path: P,
    summary: &MatchSummary,
    games: &[GameRecord],
) -> std::io::Result<()> {
    let json = MatchJson { summary, games };
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::MatchRunner;
    use chaos_engine::MatchSettings;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("chaos-arena-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_write_json_structure() {
        let runner = MatchRunner::new(MatchSettings::default(), 60);
        let report = runner.play_series(2, 5, true, |_, _| {});
        let (summary, games) = (report.summary, report.records);

        let path = temp_path("structure");
        write_json(&path, &summary, &games).expect("Failed to write JSON");
        let content = fs::read_to_string(&path).expect("Failed to read JSON");
        fs::remove_file(&path).ok();

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["summary"]["games"], 2);
        let games_json = value["games"].as_array().unwrap();
        assert_eq!(games_json.len(), 2);
        assert_eq!(games_json[0]["seed"], 5);
        assert_eq!(games_json[1]["seed"], 6);
        assert_eq!(games_json[0]["settings"]["first"]["bot"], true);
        assert_eq!(games_json[0]["events"][0]["event"], "piece_moved");
    }

    #[test]
    fn test_write_json_empty_match() {
        let path = temp_path("empty");
        write_json(&path, &MatchSummary::default(), &[]).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["games"].as_array().unwrap().len(), 0);
        assert_eq!(value["summary"]["games"], 0);
    }

    #[test]
    fn test_write_json_bad_path() {
        let result = write_json(
            "definitely/not/a/dir/out.json",
            &MatchSummary::default(),
            &[],
        );
        assert!(result.is_err());
    }
}
