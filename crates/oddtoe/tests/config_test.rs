//! Loading configuration from disk.

use oddtoe::AppConfig;
use oddtoe_rules::BoardSize;
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "size = 7\nmax_size = 11\nplayer_x = \"Ada\"\nplayer_o = \"Bo\""
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(config.size().get(), 7);
    assert_eq!(config.max_size().get(), 11);
    assert_eq!(config.player_x(), "Ada");
    assert_eq!(config.player_o(), "Bo");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "size = 6").unwrap();
    let err = AppConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.to_string().contains("Config error"));
}

#[test]
fn test_cli_overrides_file_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "size = 5\nplayer_o = \"Bo\"").unwrap();

    let config = AppConfig::from_file(file.path()).unwrap().with_overrides(
        Some(BoardSize::new(3).unwrap()),
        None,
        Some("Cy".to_string()),
    );
    assert_eq!(config.size().get(), 3);
    assert_eq!(config.max_size().get(), 9);
    assert_eq!(config.player_o(), "Cy");
}
