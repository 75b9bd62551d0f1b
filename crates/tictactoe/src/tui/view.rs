//! Terminal rendering of the board.

use crossterm::event::Event;
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{BOARD_SIZE, Cell, Line as WinLine, Player};
use tracing::{debug, instrument};

use super::input::{Translated, translate};
use crate::surface::{InputEvent, Surface};

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const RESET_LABEL: &str = "[ Reset ]";
const HELP: &str = "click a cell or press 1-9 | arrows + enter | r: reset | q: quit";

/// Board surface drawn with ratatui.
///
/// Holds what is on screen plus the areas of the last draw, which mouse
/// clicks are tested against.
#[derive(Debug, Clone, Getters)]
pub struct TerminalSurface {
    cells: [Cell; BOARD_SIZE],
    highlighted: [bool; BOARD_SIZE],
    status: String,
    cursor: usize,
    cell_areas: [Rect; BOARD_SIZE],
    reset_area: Rect,
}

impl TerminalSurface {
    /// Creates a blank surface with the cursor on the center cell.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
            highlighted: [false; BOARD_SIZE],
            status: String::new(),
            cursor: 4,
            cell_areas: [Rect::default(); BOARD_SIZE],
            reset_area: Rect::default(),
        }
    }

    /// Turns a terminal event into an input event, moving the cursor as needed.
    #[instrument(skip(self, event))]
    pub fn translate(&mut self, event: &Event) -> Option<InputEvent> {
        match translate(event, self.cursor, &self.cell_areas, self.reset_area) {
            Translated::Input(input) => {
                if let InputEvent::CellActivated(index) = input {
                    self.cursor = index;
                }
                debug!(?input, "Input translated");
                Some(input)
            }
            Translated::Cursor(cursor) => {
                self.cursor = cursor;
                None
            }
            Translated::Ignored => None,
        }
    }

    /// Draws the whole screen and records clickable areas.
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                // Title
                Constraint::Min(CELL_HEIGHT * 3 + 2), // Board
                Constraint::Length(3),                // Status
                Constraint::Length(1),                // Reset
                Constraint::Length(1),                // Help
            ])
            .split(area);

        let title = Paragraph::new("Tic Tac Toe")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        self.draw_board(frame, chunks[1]);

        let status = Paragraph::new(self.status.as_str())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[2]);

        self.reset_area = center_rect(chunks[3], RESET_LABEL.len() as u16, 1);
        let reset = Paragraph::new(RESET_LABEL)
            .style(Style::default().fg(Color::Black).bg(Color::Gray));
        frame.render_widget(reset, self.reset_area);

        let help = Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[4]);
    }

    fn draw_board(&mut self, frame: &mut Frame, area: Rect) {
        let board_area = center_rect(area, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
            ])
            .split(board_area);

        for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(row_area);

            for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
                let index = row * 3 + col;
                self.cell_areas[index] = cell_area;
                self.draw_cell(frame, cell_area, index);
            }
        }
    }

    fn draw_cell(&self, frame: &mut Frame, area: Rect, index: usize) {
        let (symbol, style) = match self.cells[index] {
            Cell::Empty => (
                (index + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Cell::Occupied(Player::X) => (
                "X".to_string(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Cell::Occupied(Player::O) => (
                "O".to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };
        let border = if index == self.cursor {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
            .alignment(Alignment::Center)
            .style(if self.highlighted[index] {
                Style::default().bg(Color::Green)
            } else {
                Style::default()
            })
            .block(Block::default().borders(Borders::ALL).border_style(border));

        frame.render_widget(paragraph, area);
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn render_cell(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }

    fn highlight(&mut self, line: WinLine) {
        for index in line {
            if let Some(slot) = self.highlighted.get_mut(index) {
                *slot = true;
            }
        }
    }

    fn clear_highlights(&mut self) {
        self.highlighted = [false; BOARD_SIZE];
    }

    fn set_status_text(&mut self, text: &str) {
        self.status = text.to_string();
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
