//! Tests for loading front-end configuration from disk.

use laser_games::AppConfig;
use laser_tictactoe::WinAttribution;
use std::io::Write;

#[test]
fn test_load_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[engine]\nlaser_probability = 0.75\nseed = 3\nwin_attribution = \"line_owner\"\n\n[timing]\nbeam_delay_ms = 10"
    )
    .unwrap();

    let config = AppConfig::load(Some(file.path()), None).unwrap();
    assert_eq!(*config.engine().laser_probability(), 0.75);
    assert_eq!(*config.engine().seed(), Some(3));
    assert_eq!(*config.engine().win_attribution(), WinAttribution::LineOwner);
    assert_eq!(*config.timing().beam_delay_ms(), 10);
    assert_eq!(*config.timing().clear_stagger_ms(), 100);
}

#[test]
fn test_seed_flag_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[engine]\nseed = 3").unwrap();

    let config = AppConfig::load(Some(file.path()), Some(42)).unwrap();
    assert_eq!(*config.engine().seed(), Some(42));
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    let err = AppConfig::load(Some(&path), None).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_out_of_range_probability_in_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[engine]\nlaser_probability = -0.1").unwrap();

    assert!(AppConfig::from_file(file.path()).is_err());
}
