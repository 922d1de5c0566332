use crate::analytics::types::{MatchRecord, Report};
use crate::conf::{OutputConfig, OutputFormat};
use std::collections::HashMap;

pub fn render(report: &Report, output: &OutputConfig) -> serde_json::Result<String> {
    match output.format {
        OutputFormat::Json => render_json(report),
        OutputFormat::Pretty => render_pretty(report),
        OutputFormat::Text => Ok(render_text(report, output.ranking)),
    }
}

/// One compact `{"game_<n>": {...}}` object per line.
pub fn render_json(report: &Report) -> serde_json::Result<String> {
    let mut out = String::new();
    for (i, game) in report.games.iter().enumerate() {
        out.push_str(&serde_json::to_string(&keyed(i, game))?);
        out.push('\n');
    }
    Ok(out)
}

/// Same objects as [`render_json`], indented for reading.
pub fn render_pretty(report: &Report) -> serde_json::Result<String> {
    let mut out = String::new();
    for (i, game) in report.games.iter().enumerate() {
        out.push_str(&serde_json::to_string_pretty(&keyed(i, game))?);
        out.push('\n');
    }
    Ok(out)
}

pub fn render_text(report: &Report, ranking: bool) -> String {
    let mut out = String::new();

    for (i, game) in report.games.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        out.push_str(&format!(
            "{}\n  total_kills: {}\n  players: {}\n",
            game_key(i),
            game.total_kills,
            game.players.join(", ")
        ));

        out.push_str("  kills:\n");
        write_counts(&mut out, &game.kills);

        out.push_str("  kills_by_means:\n");
        write_counts(&mut out, &game.kills_by_means);

        if ranking {
            out.push_str("Ranking:\n");
            for entry in &game.ranking {
                out.push_str(&format!("  {entry}\n"));
            }
        }
    }

    out
}

fn game_key(index: usize) -> String {
    format!("game_{}", index + 1)
}

/// Serialized straight from the record so fields keep their declared order.
fn keyed(index: usize, game: &MatchRecord) -> HashMap<String, &MatchRecord> {
    HashMap::from([(game_key(index), game)])
}

fn write_counts(out: &mut String, counts: &HashMap<String, u64>) {
    // stable ordering: by name
    let mut counts: Vec<_> = counts.iter().collect();
    counts.sort_by_key(|(name, _)| *name);

    for (name, count) in counts {
        out.push_str(&format!("    {name}: {count}\n"));
    }
}
