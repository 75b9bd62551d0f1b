//! Move rejection reasons.

use derive_more::{Display, Error};

/// Why a move was not applied.
///
/// A rejected move leaves the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game already ended in a win or draw.
    #[display("Game is already over")]
    GameOver,
    /// The target cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] usize),
    /// The index is not a board cell.
    #[display("Cell {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(#[error(not(source))] usize),
}
