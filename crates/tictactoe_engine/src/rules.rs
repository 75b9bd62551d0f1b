//! Move application and win/draw evaluation.

use super::error::MoveError;
use super::types::{BOARD_SIZE, Board, Cell, GameStatus, Line, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Every line that wins, in tie-break order.
pub const WINNING_LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Result of an accepted move.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[display("{player} played cell {index}")]
pub struct MoveOutcome {
    /// The cell that was filled.
    pub index: usize,
    /// The player whose mark was placed.
    pub player: Player,
    /// Status after the move.
    pub status: GameStatus,
}

/// Tic-tac-toe game engine.
///
/// Holds the board, the player to move and the derived status. The status is
/// recomputed after every accepted move and frozen once terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    board: Board,
    turn: Player,
    status: GameStatus,
}

impl Engine {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Checks if the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] without touching any state when the game is
    /// over, the index is off the board, or the cell is taken.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if index >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds(index));
        }
        if !self.board.is_empty(index) {
            return Err(MoveError::CellOccupied(index));
        }

        let player = self.turn;
        self.board.place(index, player);
        self.status = evaluate(&self.board);

        if !self.is_over() {
            self.turn = player.opponent();
        }

        debug!(status = ?self.status, "Move applied");
        Ok(MoveOutcome {
            index,
            player,
            status: self.status,
        })
    }

    /// Clears the board and starts over with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives the status of a board.
fn evaluate(board: &Board) -> GameStatus {
    if let Some((player, line)) = winning_line(board) {
        GameStatus::Won { player, line }
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Finds the first completed line in [`WINNING_LINES`] order.
fn winning_line(board: &Board) -> Option<(Player, Line)> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(player) if cells[b] == cells[a] && cells[c] == cells[a] => {
            Some((player, [a, b, c]))
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_wins_tie_break() {
        // X at 0,1,2,3,6 completes both the top row and the left column.
        let mut board = Board::new();
        for index in [0, 1, 2, 3, 6] {
            board.place(index, Player::X);
        }
        assert_eq!(winning_line(&board), Some((Player::X, [0, 1, 2])));
    }

    #[test]
    fn test_empty_line_never_wins() {
        assert_eq!(winning_line(&Board::new()), None);
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }
}
