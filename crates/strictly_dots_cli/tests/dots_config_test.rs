//! Tests for loading game configuration from files and flags.

use std::io::Write;
use std::time::Duration;
use strictly_dots_cli::GameConfig;
use strictly_dots_cli::cli::GameArgs;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = config_file("rows = 5\ncols = 6\ncomputer_delay_ms = 250\n");
    let config = GameConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.rows(), 5);
    assert_eq!(*config.cols(), 6);
    assert_eq!(*config.seed(), None);
    assert_eq!(config.computer_delay(), Duration::from_millis(250));
}

#[test]
fn test_flags_override_file() {
    let file = config_file("rows = 5\ncols = 6\nseed = 1\n");
    let args = GameArgs {
        config: Some(file.path().to_path_buf()),
        cols: Some(3),
        seed: Some(77),
        ..GameArgs::default()
    };
    let config = args.resolve().unwrap();

    assert_eq!(*config.rows(), 5);
    assert_eq!(*config.cols(), 3);
    assert_eq!(*config.seed(), Some(77));
    assert_eq!(*config.computer_delay_ms(), 1000);
}

#[test]
fn test_bad_toml_reported() {
    let file = config_file("rows = \"many\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to read config file"));
}

#[test]
fn test_file_with_tiny_board_rejected() {
    let file = config_file("rows = 1\n");
    let args = GameArgs {
        config: Some(file.path().to_path_buf()),
        ..GameArgs::default()
    };
    assert!(args.resolve().is_err());
}

#[test]
fn test_huge_board_flag_rejected() {
    let args = GameArgs {
        rows: Some(usize::MAX),
        cols: Some(2),
        ..GameArgs::default()
    };
    let err = args.resolve().unwrap_err();
    assert!(err.message.contains("limited to"));
}
