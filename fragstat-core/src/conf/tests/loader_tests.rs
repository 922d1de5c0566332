use crate::analytics::DEFAULT_QUEUE_CAPACITY;
use crate::conf::{ConfigError, FragstatConfig, OutputFormat, load_config, parse_config};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn empty_file_yields_defaults() {
    let cfg = parse_config(Path::new("fragstat.toml"), "").unwrap();

    assert_eq!(cfg, FragstatConfig::default());
    assert_eq!(cfg.pipeline.queue_capacity, DEFAULT_QUEUE_CAPACITY);
    assert_eq!(cfg.output.format, OutputFormat::Json);
    assert!(cfg.output.ranking);
}

#[test]
fn parses_every_section() {
    let cfg = parse_config(
        Path::new("fragstat.toml"),
        r#"
        [pipeline]
        queue_capacity = 16

        [output]
        format = "text"
        ranking = false
        "#,
    )
    .unwrap();

    assert_eq!(cfg.pipeline.queue_capacity, 16);
    assert_eq!(cfg.output.format, OutputFormat::Text);
    assert!(!cfg.output.ranking);
}

#[test]
fn partial_section_keeps_other_defaults() {
    let cfg = parse_config(
        Path::new("fragstat.toml"),
        r#"
        [output]
        format = "pretty"
        "#,
    )
    .unwrap();

    assert_eq!(cfg.output.format, OutputFormat::Pretty);
    assert!(cfg.output.ranking);
    assert_eq!(cfg.pipeline.queue_capacity, DEFAULT_QUEUE_CAPACITY);
}

#[test]
fn zero_queue_capacity_is_rejected() {
    let err = parse_config(
        Path::new("fragstat.toml"),
        r#"
        [pipeline]
        queue_capacity = 0
        "#,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ConfigError::InvalidQueueCapacity { capacity: 0 }
    ));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = parse_config(
        Path::new("fragstat.toml"),
        r#"
        [pipeline]
        queue_size = 10
        "#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn unknown_format_is_rejected() {
    let err = parse_config(
        Path::new("fragstat.toml"),
        r#"
        [output]
        format = "xml"
        "#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn loads_config_from_disk() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("fragstat.toml");
    fs::write(&path, "[pipeline]\nqueue_capacity = 3\n").unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg.pipeline.queue_capacity, 3);
}

#[test]
fn missing_file_is_read_error() {
    let dir = tempdir().unwrap();

    let err = load_config(&dir.path().join("nope.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}
