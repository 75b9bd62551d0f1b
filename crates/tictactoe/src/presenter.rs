//! Glue between input, the engine, the surface and the speakers.

use tictactoe_engine::{BOARD_SIZE, Engine, GameStatus, MoveOutcome};
use tracing::{debug, info, instrument, warn};

use crate::audio::{AudioOutput, SoundBank, SoundKey};
use crate::surface::{Flow, InputEvent, Surface};

/// Drives one game on a surface.
///
/// Owns the [`Engine`]; every input goes through [`Presenter::handle`] and
/// every visible change goes out through the [`Surface`].
#[derive(Debug)]
pub struct Presenter<S, A> {
    engine: Engine,
    surface: S,
    audio: A,
    sounds: SoundBank,
}

impl<S: Surface, A: AudioOutput> Presenter<S, A> {
    /// Creates a presenter and draws the empty board.
    #[instrument(skip_all)]
    pub fn new(surface: S, audio: A, sounds: SoundBank) -> Self {
        let mut presenter = Self {
            engine: Engine::new(),
            surface,
            audio,
            sounds,
        };
        presenter.render_all();
        presenter
    }

    /// Returns the engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably, for drawing and input translation.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Returns the audio output.
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Returns the sound bank.
    pub fn sounds_mut(&mut self) -> &mut SoundBank {
        &mut self.sounds
    }

    /// Routes one input event.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: InputEvent) -> Flow {
        match event {
            InputEvent::CellActivated(index) => {
                self.activate_cell(index);
                Flow::Continue
            }
            InputEvent::ResetActivated => {
                self.reset();
                Flow::Continue
            }
            InputEvent::Quit => {
                info!("Quit requested");
                Flow::Quit
            }
        }
    }

    /// Plays a move at `index`. Rejected moves change nothing on screen.
    #[instrument(skip(self))]
    pub fn activate_cell(&mut self, index: usize) -> Option<MoveOutcome> {
        let outcome = match self.engine.apply_move(index) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                return None;
            }
        };

        info!(%outcome, "Move accepted");
        debug!(board = %self.engine.board().display(), "Board after move");
        if let Some(cell) = self.engine.board().get(index) {
            self.surface.render_cell(index, cell);
        }
        self.play(SoundKey::Place);

        match outcome.status {
            GameStatus::Won { player, line } => {
                info!(%player, ?line, "Game won");
                self.surface.highlight(line);
                self.surface.set_status_text(&status_text(&self.engine));
                self.play(SoundKey::Win);
            }
            GameStatus::Draw => {
                info!("Game drawn");
                self.surface.set_status_text(&status_text(&self.engine));
            }
            GameStatus::InProgress => {
                self.surface.set_status_text(&status_text(&self.engine));
            }
        }

        Some(outcome)
    }

    /// Starts a new game and redraws everything.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.engine.reset();
        self.render_all();
    }

    fn render_all(&mut self) {
        self.surface.clear_highlights();
        for index in 0..BOARD_SIZE {
            if let Some(cell) = self.engine.board().get(index) {
                self.surface.render_cell(index, cell);
            }
        }
        self.surface.set_status_text(&status_text(&self.engine));
    }

    /// Plays a cue if its buffer is loaded. Audio problems are only logged.
    fn play(&mut self, key: SoundKey) {
        self.sounds.poll();
        let Some(buffer) = self.sounds.get(key) else {
            debug!(%key, "Sound not loaded, skipping cue");
            return;
        };

        if self.audio.is_suspended()
            && let Err(e) = self.audio.resume()
        {
            warn!(%key, error = %e, "Could not resume audio output");
            return;
        }
        if let Err(e) = self.audio.play(buffer) {
            warn!(%key, error = %e, "Could not play sound");
        }
    }
}

/// Status line for the current game phase.
pub fn status_text(engine: &Engine) -> String {
    match engine.status() {
        GameStatus::InProgress => format!("Player {}'s Turn", engine.turn()),
        GameStatus::Won { player, .. } => format!("Player {player} Wins!"),
        GameStatus::Draw => "It's a Draw!".to_string(),
    }
}
