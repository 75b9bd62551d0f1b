//! Decoding sound assets into playable frames.

use std::io::{Cursor, ErrorKind};
use std::sync::Arc;

use derive_getters::Getters;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::{debug, instrument, warn};

use super::error::{AudioError, AudioErrorKind};

/// A fully decoded sound, as interleaved stereo frames.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct SoundBuffer {
    /// Frames per second.
    sample_rate: u32,
    /// Left/right sample pairs.
    frames: Arc<[[f32; 2]]>,
}

impl SoundBuffer {
    /// Creates a buffer from stereo frames.
    pub fn new(sample_rate: u32, frames: Vec<[f32; 2]>) -> Self {
        Self {
            sample_rate,
            frames: frames.into(),
        }
    }

    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames.len() as f32 / self.sample_rate as f32
    }
}

/// Decodes an encoded asset (mp3 or wav) into a [`SoundBuffer`].
///
/// `extension` is a probe hint, e.g. `Some("mp3")`. Mono input is duplicated
/// onto both channels; channels past the second are dropped.
///
/// # Errors
///
/// Returns [`AudioErrorKind::Decode`] when the format is unsupported or the
/// stream is malformed.
#[instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode(bytes: Vec<u8>, extension: Option<&str>) -> Result<SoundBuffer, AudioError> {
    let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes)), Default::default());
    let mut hint = Hint::new();
    if let Some(ext) = extension {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;
    let mut reader = probed.format;

    let track = reader
        .default_track()
        .ok_or_else(|| AudioError::new(AudioErrorKind::Decode("No audio track".to_string())))?;
    let track_id = track.id;
    let params = track.codec_params.clone();

    let mut decoder = symphonia::default::get_codecs().make(&params, &DecoderOptions::default())?;
    let sample_rate = params
        .sample_rate
        .ok_or_else(|| AudioError::new(AudioErrorKind::Decode("Unknown sample rate".to_string())))?;

    let mut samples: Vec<f32> = Vec::new();
    let mut channels = params.channels.map(|c| c.count()).unwrap_or(1);

    loop {
        let packet = match reader.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                channels = spec.channels.count();
                let mut sample_buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
                sample_buf.copy_interleaved_ref(decoded);
                samples.extend_from_slice(sample_buf.samples());
            }
            // Corrupt packets are skipped, the rest of the stream still plays.
            Err(SymphoniaError::DecodeError(msg)) => {
                warn!(error = %msg, "Skipping undecodable packet");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let frames = to_stereo(&samples, channels);
    debug!(sample_rate, frames = frames.len(), channels, "Sound decoded");
    Ok(SoundBuffer::new(sample_rate, frames))
}

fn to_stereo(samples: &[f32], channels: usize) -> Vec<[f32; 2]> {
    match channels {
        0 => Vec::new(),
        1 => samples.iter().map(|&s| [s, s]).collect(),
        n => samples.chunks_exact(n).map(|c| [c[0], c[1]]).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_is_duplicated() {
        assert_eq!(to_stereo(&[0.5, -0.5], 1), vec![[0.5, 0.5], [-0.5, -0.5]]);
    }

    #[test]
    fn test_extra_channels_dropped() {
        let surround = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
        assert_eq!(to_stereo(&surround, 3), vec![[0.1, 0.2], [0.4, 0.5]]);
    }

    #[test]
    fn test_duration() {
        let buffer = SoundBuffer::new(4, vec![[0.0, 0.0]; 8]);
        assert_eq!(buffer.duration_secs(), 2.0);
    }
}
