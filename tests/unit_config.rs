use std::fs;

use clap::Parser;
use datapoint_viewer::cli::Cli;
use datapoint_viewer::{SelectionPolicy, ViewerConfig};

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["datapoint-cli"];
    argv.extend_from_slice(args);
    argv.push("schema");
    Cli::try_parse_from(argv).expect("parse cli")
}

#[test]
fn defaults_without_flags_or_file() {
    let config = ViewerConfig::from_args(parse(&[]).config).expect("config");
    assert_eq!(config, ViewerConfig::default());
    assert_eq!(config.max_file_bytes, Some(50 * 1024 * 1024));
    assert_eq!(config.supported_extensions, vec!["json".to_string()]);
    assert_eq!(config.selection_policy, SelectionPolicy::Reset);
}

#[test]
fn merges_config_file_and_cli_overrides() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("viewer.yaml");
    fs::write(
        &config_path,
        "max_file_bytes: 1024\nselection_policy: retain\nextensions:\n  - json\n  - JSONL\n",
    )
    .expect("write config");

    let cli = parse(&[
        "--config",
        config_path.to_str().expect("utf8 path"),
        "--extensions",
        ".NDJSON,json",
    ]);
    let config = ViewerConfig::from_args(cli.config).expect("config");

    assert_eq!(config.max_file_bytes, Some(1024));
    assert_eq!(config.selection_policy, SelectionPolicy::Retain);
    assert_eq!(
        config.supported_extensions,
        vec!["json".to_string(), "ndjson".to_string()]
    );
}

#[test]
fn json_config_files_are_accepted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("viewer.json");
    fs::write(&config_path, r#"{"max_file_bytes": 0}"#).expect("write config");

    let cli = parse(&["--config", config_path.to_str().expect("utf8 path")]);
    let config = ViewerConfig::from_args(cli.config).expect("config");
    assert_eq!(config.max_file_bytes, None);
}

#[test]
fn empty_extensions_is_error() {
    let cli = parse(&["--extensions", " , ."]);
    let err = ViewerConfig::from_args(cli.config).expect_err("expected failure");
    assert!(err.to_string().contains("at least one file extension"));
}

#[test]
fn missing_config_file_is_error() {
    let cli = parse(&["--config", "/definitely/not/here.yaml"]);
    let err = ViewerConfig::from_args(cli.config).expect_err("expected failure");
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn unknown_config_keys_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("viewer.yaml");
    fs::write(&config_path, "max_bytes: 10\n").expect("write config");

    let cli = parse(&["--config", config_path.to_str().expect("utf8 path")]);
    let err = ViewerConfig::from_args(cli.config).expect_err("expected failure");
    assert!(format!("{err:#}").contains("max_bytes"));
}
