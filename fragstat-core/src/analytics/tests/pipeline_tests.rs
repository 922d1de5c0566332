use crate::analytics::tests::test_helpers::{INIT_GAME, SHUTDOWN_GAME, kill, lines, userinfo};
use crate::analytics::{SourceError, analyze_file, analyze_lines};
use crate::conf::PipelineConfig;
use pretty_assertions::assert_eq;
use std::io;
use std::io::Write;
use tempfile::NamedTempFile;

fn config(queue_capacity: usize) -> PipelineConfig {
    PipelineConfig { queue_capacity }
}

#[test]
fn pipeline_preserves_line_order() {
    let raw = vec![
        INIT_GAME.to_string(),
        userinfo("A"),
        SHUTDOWN_GAME.to_string(),
        INIT_GAME.to_string(),
        userinfo("B"),
        SHUTDOWN_GAME.to_string(),
        INIT_GAME.to_string(),
        userinfo("C"),
        SHUTDOWN_GAME.to_string(),
    ];
    let input: Vec<&str> = raw.iter().map(String::as_str).collect();

    // Capacity of one forces the reader to block on every line.
    let analysis = analyze_lines(lines(&input), &config(1)).unwrap();

    let players: Vec<_> = analysis
        .report
        .games
        .iter()
        .map(|g| g.players.clone())
        .collect();
    assert_eq!(players, vec![vec!["A"], vec!["B"], vec!["C"]]);
}

#[test]
fn pipeline_handles_more_lines_than_capacity() {
    let mut raw = vec![INIT_GAME.to_string(), userinfo("Isgalamido")];
    for _ in 0..1_000 {
        raw.push(kill("<world>", "Isgalamido", "MOD_FALLING"));
    }
    raw.push(SHUTDOWN_GAME.to_string());
    let input: Vec<io::Result<String>> = raw.into_iter().map(Ok).collect();

    let analysis = analyze_lines(input, &config(4)).unwrap();

    assert_eq!(analysis.report.games[0].total_kills, 1_000);
    assert_eq!(analysis.stats.lines, 1_003);
}

#[test]
fn empty_source_yields_empty_report() {
    let analysis = analyze_lines(Vec::<io::Result<String>>::new(), &config(8)).unwrap();

    assert!(analysis.report.games.is_empty());
    assert_eq!(analysis.stats.lines, 0);
}

#[test]
fn read_error_aborts_without_partial_report() {
    let input = vec![
        Ok(INIT_GAME.to_string()),
        Ok(userinfo("Isgalamido")),
        Ok(SHUTDOWN_GAME.to_string()),
        Err(io::Error::other("disk on fire")),
        Ok(INIT_GAME.to_string()),
    ];

    let err = analyze_lines(input, &config(8)).unwrap_err();

    assert!(matches!(err, SourceError::Read { line: 4, .. }), "{err:?}");
}

#[test]
fn analyzes_file_on_disk() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{INIT_GAME}").unwrap();
    writeln!(file, "{}", userinfo("Isgalamido")).unwrap();
    writeln!(file, "{}", kill("Isgalamido", "Mocinha", "MOD_RAILGUN")).unwrap();
    writeln!(file, "{SHUTDOWN_GAME}").unwrap();

    let analysis = analyze_file(file.path(), &config(8)).unwrap();

    assert_eq!(analysis.report.games.len(), 1);
    assert_eq!(analysis.report.games[0].ranking, vec!["Isgalamido:1"]);
}

#[test]
fn missing_file_is_source_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.log");

    let err = analyze_file(&path, &config(8)).unwrap_err();

    assert!(matches!(err, SourceError::Open { .. }), "{err:?}");
}
