//! Command-line interface for tictactoe.

use std::path::PathBuf;

use clap::Parser;

/// Sound status shown under `--help`.
#[cfg(feature = "audio")]
pub const SOUND_HELP: &str = "Sound: plays through the default output device. \
Use --mute to disable.";

/// Sound status shown under `--help`.
#[cfg(not(feature = "audio"))]
pub const SOUND_HELP: &str = "Sound: this build is silent. Rebuild with \
`--features audio` (needs system audio headers, e.g. ALSA on Linux) to hear \
sound cues.";

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
#[command(after_help = SOUND_HELP)]
pub struct Cli {
    /// Path to the TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sound played when a mark is placed
    #[arg(long)]
    pub place_sound: Option<PathBuf>,

    /// Sound played when a player wins
    #[arg(long)]
    pub win_sound: Option<PathBuf>,

    /// Disable sound entirely
    #[arg(long)]
    pub mute: bool,

    /// Log file (the terminal is taken by the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
