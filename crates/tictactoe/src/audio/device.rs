//! Default output device via `cpal`, mixed with `oddio`.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::Stream;
use oddio::{Frames, FramesSignal, Handle, Mixer};
use tracing::{debug, info, instrument, warn};

use super::decode::SoundBuffer;
use super::error::{AudioError, AudioErrorKind};
use super::output::AudioOutput;

/// Stereo mixer feeding the default output device.
///
/// The stream is built suspended and starts on the first [`resume`].
///
/// [`resume`]: AudioOutput::resume
pub struct DeviceOutput {
    mixer_handle: Handle<Mixer<[f32; 2]>>,
    stream: Stream,
    suspended: bool,
}

impl std::fmt::Debug for DeviceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceOutput")
            .field("suspended", &self.suspended)
            .finish_non_exhaustive()
    }
}

impl DeviceOutput {
    /// Builds a stereo stream on the default output device.
    #[instrument]
    pub fn open() -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or_else(|| {
            AudioError::new(AudioErrorKind::Unavailable(
                "No output device available".to_string(),
            ))
        })?;
        if let Ok(name) = device.name() {
            info!(device = %name, "Using default audio device");
        }

        let sample_rate = device
            .default_output_config()
            .map_err(|e| AudioError::new(AudioErrorKind::Unavailable(e.to_string())))?
            .sample_rate();
        let config = cpal::StreamConfig {
            channels: 2,
            sample_rate,
            buffer_size: cpal::BufferSize::Default,
        };
        debug!(?config, "Audio stream config");

        let (mixer_handle, mixer) = oddio::split(Mixer::new());

        let stream = device
            .build_output_stream(
                &config,
                move |out_flat: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let out_stereo: &mut [[f32; 2]] = oddio::frame_stereo(out_flat);
                    oddio::run(&mixer, sample_rate.0, out_stereo);
                },
                |err| warn!(error = %err, "Audio stream error"),
                None,
            )
            .map_err(|e| AudioError::new(AudioErrorKind::Stream(e.to_string())))?;

        Ok(Self {
            mixer_handle,
            stream,
            suspended: true,
        })
    }
}

impl AudioOutput for DeviceOutput {
    fn is_suspended(&self) -> bool {
        self.suspended
    }

    #[instrument(skip(self))]
    fn resume(&mut self) -> Result<(), AudioError> {
        self.stream
            .play()
            .map_err(|e| AudioError::new(AudioErrorKind::Stream(e.to_string())))?;
        self.suspended = false;
        debug!("Audio stream resumed");
        Ok(())
    }

    fn play(&mut self, sound: &SoundBuffer) -> Result<(), AudioError> {
        let frames = Frames::from_slice(*sound.sample_rate(), sound.frames());
        // Mixer owns the signal; the control handle is not needed afterwards.
        let _handle = self.mixer_handle.control().play(FramesSignal::from(frames));
        Ok(())
    }
}
