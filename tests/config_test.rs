//! Tests for loading configuration files.

use minimax_engine::{AppConfig, Geometry, PlayerKind, SearchMode};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[engine]
search = "alpha-beta"

[board]
rows = 4
cols = 4
run = 3

[players]
x = "engine"
o = "human"
o_name = "Linus"
"#
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.engine().search(), SearchMode::AlphaBeta);
    assert_eq!(config.board().geometry().unwrap(), Geometry::new(4, 4, 3).unwrap());
    assert_eq!(*config.players().x(), PlayerKind::Engine);
    assert_eq!(*config.players().o(), PlayerKind::Human);
    assert_eq!(config.players().o_name(), "Linus");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"), "{err}");
}

#[test]
fn test_load_without_path_uses_defaults() {
    let config = AppConfig::load(None).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_malformed_toml_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[engine\nsearch = ").unwrap();
    assert!(AppConfig::load(Some(file.path())).is_err());
}
