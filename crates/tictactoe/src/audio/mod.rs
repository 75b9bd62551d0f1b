//! Sound cues: decoding, background loading and playback.

mod bank;
mod decode;
#[cfg(feature = "audio")]
mod device;
mod error;
mod output;

pub use bank::{SoundBank, SoundKey};
pub use decode::{SoundBuffer, decode};
#[cfg(feature = "audio")]
pub use device::DeviceOutput;
pub use error::{AudioError, AudioErrorKind};
pub use output::{AudioOutput, SilentOutput, open_output};
