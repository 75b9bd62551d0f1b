//! Terminal front end: setup, teardown and the event loop.

mod input;
mod view;

pub use view::TerminalSurface;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use strum::IntoEnumIterator;
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument};

use crate::audio::{AudioOutput, SoundBank, SoundKey, open_output};
use crate::config::GameConfig;
use crate::presenter::Presenter;
use crate::surface::Flow;

/// Restores the terminal when dropped, including on panic unwinds.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            crossterm::cursor::Show
        );
    }
}

/// Runs the game in the current terminal until the user quits.
#[instrument(skip_all)]
pub async fn run(config: &GameConfig) -> Result<()> {
    info!("Starting tic-tac-toe");

    let sound_config = config.sounds();
    let mut sounds = SoundBank::new();
    if *sound_config.enabled() {
        for key in SoundKey::iter() {
            sounds.load(key, sound_config.path(key));
        }
    }
    let audio = open_output(*sound_config.enabled());

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut presenter = Presenter::new(TerminalSurface::new(), audio, sounds);

    let result = event_loop(&mut terminal, &mut presenter).await;
    drop(guard);

    if let Err(e) = &result {
        error!(error = ?e, "Game loop error");
    }
    info!("Goodbye");
    result
}

/// Draws, waits briefly for input, and dispatches it.
async fn event_loop<A: AudioOutput>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    presenter: &mut Presenter<TerminalSurface, A>,
) -> Result<()> {
    loop {
        presenter.sounds_mut().poll();
        terminal.draw(|frame| presenter.surface_mut().draw(frame))?;

        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            if let Some(input) = presenter.surface_mut().translate(&event)
                && presenter.handle(input) == Flow::Quit
            {
                return Ok(());
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
}
