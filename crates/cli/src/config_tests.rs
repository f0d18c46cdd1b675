// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use serial_test::serial;
use std::io::Write;

#[test]
fn test_defaults() {
    let config = HarnessConfig::default();
    assert_eq!(config.sentinel, "quit");
    assert!(!config.show_all_program_output);
    assert!(!config.always_show_log);
    assert_eq!(config.io_dir, None);
}

#[test]
fn test_parse_empty_uses_defaults() {
    let config = HarnessConfig::from_toml("").unwrap();
    assert_eq!(config, HarnessConfig::default());
}

#[test]
fn test_parse_full_config() {
    let toml_str = r#"
sentinel = "exit"
show_all_program_output = true
always_show_log = true
io_dir = "tests/io"
"#;
    let config = HarnessConfig::from_toml(toml_str).unwrap();
    assert_eq!(config.sentinel, "exit");
    assert!(config.show_all_program_output);
    assert!(config.always_show_log);
    assert_eq!(config.io_dir, Some(PathBuf::from("tests/io")));
}

#[test]
fn test_unknown_field_rejected() {
    let err = HarnessConfig::from_toml("show_progress = true").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_empty_sentinel_rejected() {
    let err = HarnessConfig::from_toml(r#"sentinel = """#).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn test_multi_line_sentinel_rejected() {
    let err = HarnessConfig::from_toml(r#"sentinel = "a\nb""#).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(b"sentinel = \"bye\"\n").unwrap();
    file.flush().unwrap();

    let config = HarnessConfig::load(file.path()).unwrap();
    assert_eq!(config.sentinel, "bye");
}

#[test]
fn test_load_missing_file() {
    let err = HarnessConfig::load(Path::new("/nonexistent/iopairs.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_io_path_joins_relative() {
    let config = HarnessConfig {
        io_dir: Some(PathBuf::from("/data/io")),
        ..Default::default()
    };
    assert_eq!(
        config.io_path(Path::new("simple.io")),
        PathBuf::from("/data/io/simple.io")
    );
    assert_eq!(
        config.io_path(Path::new("/abs/simple.io")),
        PathBuf::from("/abs/simple.io")
    );
}

#[test]
#[serial]
fn test_resolve_env_overrides_io_dir() {
    std::env::remove_var(crate::env::IOPAIRS_CONFIG);
    std::env::set_var(crate::env::IOPAIRS_IO_DIR, "/from/env");
    let result = HarnessConfig::resolve(None);
    std::env::remove_var(crate::env::IOPAIRS_IO_DIR);

    let config = result.unwrap();
    assert_eq!(config.sentinel, "quit");
    assert_eq!(config.io_dir, Some(PathBuf::from("/from/env")));
}
