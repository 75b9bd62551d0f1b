//! Rendering seam between the presenter and a display.

use tictactoe_engine::{Cell, Line};

/// Anything that can show the board and a status line.
///
/// The presenter pushes every visible change through these calls; a surface
/// keeps no game rules of its own.
pub trait Surface {
    /// Shows `cell` at `index`, with the player's styling.
    fn render_cell(&mut self, index: usize, cell: Cell);

    /// Marks the cells of a winning line.
    fn highlight(&mut self, line: Line);

    /// Removes every highlight.
    fn clear_highlights(&mut self);

    /// Replaces the status text.
    fn set_status_text(&mut self, text: &str);
}

/// User intent, as produced by a surface's input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A cell (0-8) was clicked or selected.
    CellActivated(usize),
    /// The reset control was used.
    ResetActivated,
    /// The user asked to leave.
    Quit,
}

/// Whether the event loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep handling events.
    Continue,
    /// Leave the event loop.
    Quit,
}
