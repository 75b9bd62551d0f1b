//! Background loading of sound assets.
//!
//! Each [`SoundBank::load`] spawns a task that reads and decodes one asset.
//! Results come back over a channel and only land in the bank when the owner
//! calls [`SoundBank::poll`], so game state is never touched from another
//! task. Playback asks [`SoundBank::get`] and skips the cue if the buffer is
//! not there yet.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use strum::{Display, EnumIter};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, instrument, warn};

use super::decode::{SoundBuffer, decode};
use super::error::{AudioError, AudioErrorKind};

/// Logical name of a sound cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SoundKey {
    /// A mark was placed.
    Place,
    /// A player completed a line.
    Win,
}

type LoadResult = (SoundKey, Result<SoundBuffer, AudioError>);

/// Availability map of decoded sounds, filled in as loads complete.
#[derive(Debug)]
pub struct SoundBank {
    buffers: HashMap<SoundKey, SoundBuffer>,
    pending: usize,
    tx: UnboundedSender<LoadResult>,
    rx: UnboundedReceiver<LoadResult>,
}

impl SoundBank {
    /// Creates an empty bank.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            buffers: HashMap::new(),
            pending: 0,
            tx,
            rx,
        }
    }

    /// Starts loading `path` under `key` in the background.
    ///
    /// Never blocks. Needs a tokio runtime; without one the load is skipped
    /// and the key stays silent.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load(&mut self, key: SoundKey, path: impl AsRef<Path>) {
        self.start(key, load_file(path.as_ref().to_path_buf()));
    }

    /// Runs `task` in the background and reports its result under `key`.
    ///
    /// A task that panics or is cancelled still reports, as an error.
    fn start<F>(&mut self, key: SoundKey, task: F)
    where
        F: Future<Output = Result<SoundBuffer, AudioError>> + Send + 'static,
    {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No async runtime, sound will not load");
            return;
        };

        let tx = self.tx.clone();
        self.pending += 1;
        let handle = runtime.spawn(task);
        runtime.spawn(async move {
            let result = handle.await.unwrap_or_else(|e| {
                Err(AudioError::new(AudioErrorKind::Io(format!(
                    "Load task failed: {e}"
                ))))
            });
            // The bank may already be gone.
            let _ = tx.send((key, result));
        });
        debug!(pending = self.pending, "Sound load started");
    }

    /// Stores an already decoded buffer.
    #[instrument(skip(self, buffer))]
    pub fn insert(&mut self, key: SoundKey, buffer: SoundBuffer) {
        self.buffers.insert(key, buffer);
    }

    /// Returns the buffer for `key` if it has finished loading.
    pub fn get(&self, key: SoundKey) -> Option<&SoundBuffer> {
        self.buffers.get(&key)
    }

    /// Checks if `key` is ready to play.
    pub fn is_loaded(&self, key: SoundKey) -> bool {
        self.buffers.contains_key(&key)
    }

    /// Number of loads still running.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Applies every finished load without waiting. Returns how many finished.
    pub fn poll(&mut self) -> usize {
        let mut finished = 0;
        while let Ok(result) = self.rx.try_recv() {
            self.complete(result);
            finished += 1;
        }
        finished
    }

    /// Waits until every started load has reported, successfully or not.
    #[instrument(skip(self))]
    pub async fn settle(&mut self) {
        while self.pending > 0 {
            match self.rx.recv().await {
                Some(result) => self.complete(result),
                None => break,
            }
        }
    }

    fn complete(&mut self, (key, result): LoadResult) {
        self.pending = self.pending.saturating_sub(1);
        match result {
            Ok(buffer) => {
                info!(
                    key = %key,
                    secs = buffer.duration_secs(),
                    "Sound loaded"
                );
                self.buffers.insert(key, buffer);
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Sound failed to load, cue will be silent");
            }
        }
    }
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads an asset from disk and decodes it off the async threads.
async fn load_file(path: PathBuf) -> Result<SoundBuffer, AudioError> {
    let bytes = tokio::fs::read(&path).await?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_owned);

    tokio::task::spawn_blocking(move || decode(bytes, extension.as_deref()))
        .await
        .map_err(|e| AudioError::new(AudioErrorKind::Decode(format!("Decoder task failed: {e}"))))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{Duration, timeout};

    async fn crashing_load() -> Result<SoundBuffer, AudioError> {
        panic!("decoder crashed")
    }

    #[tokio::test]
    async fn test_settle_survives_crashed_load() {
        let mut sounds = SoundBank::new();
        sounds.start(SoundKey::Win, crashing_load());
        assert_eq!(sounds.pending(), 1);

        timeout(Duration::from_secs(5), sounds.settle())
            .await
            .expect("settle should not hang");

        assert_eq!(sounds.pending(), 0);
        assert!(!sounds.is_loaded(SoundKey::Win));
    }

    #[tokio::test]
    async fn test_started_load_lands_in_bank() {
        let mut sounds = SoundBank::new();
        sounds.start(SoundKey::Place, async {
            Ok(SoundBuffer::new(8000, vec![[0.0, 0.0]; 4]))
        });

        sounds.settle().await;

        assert_eq!(sounds.get(SoundKey::Place).map(|s| s.frames().len()), Some(4));
    }
}
