//! Audio error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong with a sound.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AudioErrorKind {
    /// The asset could not be read.
    #[display("I/O error: {_0}")]
    Io(String),
    /// The asset is not a supported audio format.
    #[display("Decode error: {_0}")]
    Decode(String),
    /// No output device, or audio support not built in.
    #[display("Audio unavailable: {_0}")]
    Unavailable(String),
    /// The output stream failed to start or play.
    #[display("Stream error: {_0}")]
    Stream(String),
}

/// Audio error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Audio error: {} at {}:{}", kind, file, line)]
pub struct AudioError {
    /// Error category and message.
    pub kind: AudioErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AudioError {
    /// Creates a new audio error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: AudioErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for AudioError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(AudioErrorKind::Io(err.to_string()))
    }
}

impl From<symphonia::core::errors::Error> for AudioError {
    #[track_caller]
    fn from(err: symphonia::core::errors::Error) -> Self {
        Self::new(AudioErrorKind::Decode(err.to_string()))
    }
}
