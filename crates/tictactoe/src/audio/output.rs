//! Playback seam between the presenter and the sound hardware.

use tracing::{info, instrument, warn};

use super::decode::SoundBuffer;
use super::error::AudioError;

/// Something that can play decoded sounds.
///
/// Outputs may start suspended (no stream running yet); callers resume them
/// before the first cue.
pub trait AudioOutput {
    /// True until the output has been resumed.
    fn is_suspended(&self) -> bool;

    /// Starts or restarts the output stream.
    fn resume(&mut self) -> Result<(), AudioError>;

    /// Queues `sound` for playback and returns immediately.
    fn play(&mut self, sound: &SoundBuffer) -> Result<(), AudioError>;
}

impl<A: AudioOutput + ?Sized> AudioOutput for Box<A> {
    fn is_suspended(&self) -> bool {
        (**self).is_suspended()
    }

    fn resume(&mut self) -> Result<(), AudioError> {
        (**self).resume()
    }

    fn play(&mut self, sound: &SoundBuffer) -> Result<(), AudioError> {
        (**self).play(sound)
    }
}

/// Output that discards every sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentOutput;

impl AudioOutput for SilentOutput {
    fn is_suspended(&self) -> bool {
        false
    }

    fn resume(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn play(&mut self, _sound: &SoundBuffer) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Opens the default output device, falling back to [`SilentOutput`].
///
/// Failure is logged and never fatal.
#[instrument]
pub fn open_output(enabled: bool) -> Box<dyn AudioOutput> {
    if !enabled {
        info!("Sound disabled, playing silently");
        return Box::new(SilentOutput);
    }

    #[cfg(feature = "audio")]
    let output: Box<dyn AudioOutput> = match super::device::DeviceOutput::open() {
        Ok(output) => Box::new(output),
        Err(e) => {
            warn!(error = %e, "Audio output unavailable, playing silently");
            Box::new(SilentOutput)
        }
    };

    #[cfg(not(feature = "audio"))]
    let output: Box<dyn AudioOutput> = {
        warn!("Built without the `audio` feature, playing silently");
        Box::new(SilentOutput)
    };

    output
}
