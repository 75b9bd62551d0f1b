//! Keyboard and mouse translation.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tictactoe_engine::BOARD_SIZE;

use crate::surface::InputEvent;

/// Moves the keyboard cursor one cell, staying on the board.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);
    match key {
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Right if col < 2 => cursor + 1,
        KeyCode::Up if row > 0 => cursor - 3,
        KeyCode::Down if row < 2 => cursor + 3,
        _ => cursor,
    }
}

/// Result of translating a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Translated {
    /// Something the presenter should handle.
    Input(InputEvent),
    /// Only the cursor moved.
    Cursor(usize),
    /// Nothing of interest.
    Ignored,
}

/// Maps a key press to an intent. `cursor` is the currently selected cell.
pub(crate) fn translate_key(key: KeyEvent, cursor: usize) -> Translated {
    // crossterm reports releases on some platforms.
    if key.kind == KeyEventKind::Release {
        return Translated::Ignored;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Translated::Input(InputEvent::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            Translated::Input(InputEvent::Quit)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Translated::Input(InputEvent::ResetActivated),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Translated::Input(InputEvent::CellActivated(index))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Translated::Input(InputEvent::CellActivated(cursor)),
        code @ (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down) => {
            Translated::Cursor(move_cursor(cursor, code))
        }
        _ => Translated::Ignored,
    }
}

/// Maps a left click to the cell or button under it.
pub(crate) fn translate_mouse(
    mouse: MouseEvent,
    cell_areas: &[Rect; BOARD_SIZE],
    reset_area: Rect,
) -> Translated {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Translated::Ignored;
    }

    let position = Position::new(mouse.column, mouse.row);
    if let Some(index) = cell_areas.iter().position(|area| area.contains(position)) {
        return Translated::Input(InputEvent::CellActivated(index));
    }
    if reset_area.contains(position) {
        return Translated::Input(InputEvent::ResetActivated);
    }
    Translated::Ignored
}

/// Dispatches any terminal event.
pub(crate) fn translate(
    event: &Event,
    cursor: usize,
    cell_areas: &[Rect; BOARD_SIZE],
    reset_area: Rect,
) -> Translated {
    match event {
        Event::Key(key) => translate_key(*key, cursor),
        Event::Mouse(mouse) => translate_mouse(*mouse, cell_areas, reset_area),
        _ => Translated::Ignored,
    }
}
