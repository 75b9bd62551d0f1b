//! Tests for configuration loading and overrides.

use std::io::Write;
use std::path::PathBuf;

use clap::CommandFactory;
use tictactoe::{Cli, GameConfig, SOUND_HELP, SoundKey};

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert!(*config.sounds().enabled());
    assert_eq!(config.sounds().path(SoundKey::Place), PathBuf::from("assets/place.mp3"));
    assert_eq!(config.sounds().path(SoundKey::Win), PathBuf::from("assets/win.mp3"));
    assert_eq!(config.log().filter(), "info");
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = GameConfig::from_toml(
        r#"
        [sounds]
        win = "sfx/fanfare.wav"
        "#,
    )
    .expect("Valid config");

    assert_eq!(config.sounds().win(), &PathBuf::from("sfx/fanfare.wav"));
    assert_eq!(config.sounds().place(), &PathBuf::from("assets/place.mp3"));
    assert_eq!(config.log(), GameConfig::default().log());
}

#[test]
fn test_invalid_toml() {
    let err = GameConfig::from_toml("[sounds]\nenabled = \"maybe\"").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "[sounds]\nenabled = false\n\n[log]\nfilter = \"debug\"").expect("Write");

    let config = GameConfig::from_file(file.path()).expect("Valid config");
    assert!(!*config.sounds().enabled());
    assert_eq!(config.log().filter(), "debug");
}

#[test]
fn test_cli_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "[sounds]\nplace = \"from_file.mp3\"\nwin = \"win_file.mp3\"").expect("Write");

    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        place_sound: Some(PathBuf::from("from_cli.wav")),
        mute: true,
        log_file: Some(PathBuf::from("game.log")),
        ..Default::default()
    };
    let config = GameConfig::resolve(&cli).expect("Valid config");

    assert_eq!(config.sounds().place(), &PathBuf::from("from_cli.wav"));
    assert_eq!(config.sounds().win(), &PathBuf::from("win_file.mp3"));
    assert!(!*config.sounds().enabled());
    assert_eq!(config.log().file(), &PathBuf::from("game.log"));
}

#[test]
fn test_explicit_missing_config_fails() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let cli = Cli {
        config: Some(dir.path().join("nope.toml")),
        ..Default::default()
    };

    let err = GameConfig::resolve(&cli).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_help_explains_sound_feature() {
    let help = Cli::command().render_help().to_string();
    assert!(help.contains(SOUND_HELP));

    #[cfg(not(feature = "audio"))]
    assert!(SOUND_HELP.contains("--features audio"));
    #[cfg(feature = "audio")]
    assert!(SOUND_HELP.contains("--mute"));
}
