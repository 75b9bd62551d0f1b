//! Two-player tic-tac-toe for the terminal.
//!
//! # Architecture
//!
//! - **Engine**: game rules from [`tictactoe_engine`], no I/O
//! - **Presenter**: routes input into the engine and results onto a [`Surface`]
//! - **Audio**: sounds load in the background and play when available
//! - **TUI**: a ratatui [`Surface`] with mouse and keyboard input
//!
//! # Example
//!
//! ```
//! use tictactoe::{InputEvent, Presenter, SilentOutput, SoundBank, TerminalSurface};
//!
//! let mut presenter = Presenter::new(TerminalSurface::new(), SilentOutput, SoundBank::new());
//! presenter.handle(InputEvent::CellActivated(4));
//! assert_eq!(presenter.surface().status(), "Player O's Turn");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod audio;
mod cli;
mod config;
mod presenter;
mod surface;
mod tui;

// Crate-level exports - Game rules
pub use tictactoe_engine::{
    BOARD_SIZE, Board, Cell, Engine, GameStatus, Line, MoveError, MoveOutcome, Player,
    WINNING_LINES,
};

// Crate-level exports - Audio
#[cfg(feature = "audio")]
pub use audio::DeviceOutput;
pub use audio::{
    AudioError, AudioErrorKind, AudioOutput, SilentOutput, SoundBank, SoundBuffer, SoundKey,
    decode, open_output,
};

// Crate-level exports - Configuration
pub use cli::{Cli, SOUND_HELP};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig, LogConfig, SoundConfig};

// Crate-level exports - Presentation
pub use presenter::{Presenter, status_text};
pub use surface::{Flow, InputEvent, Surface};
pub use tui::{TerminalSurface, run};
