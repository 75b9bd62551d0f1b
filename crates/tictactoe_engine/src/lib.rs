//! Pure tic-tac-toe game logic.
//!
//! The [`Engine`] owns the board, the player to move and the game status.
//! All mutation goes through [`Engine::apply_move`] and [`Engine::reset`], so
//! the engine can be driven and tested without any rendering surface.
//!
//! ```
//! use tictactoe_engine::{Engine, GameStatus, Player};
//!
//! let mut engine = Engine::new();
//! for index in [0, 4, 1, 3, 2] {
//!     engine.apply_move(index).unwrap();
//! }
//! assert_eq!(
//!     engine.status(),
//!     &GameStatus::Won { player: Player::X, line: [0, 1, 2] }
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod rules;
mod types;

pub use error::MoveError;
pub use rules::{Engine, MoveOutcome, WINNING_LINES};
pub use types::{BOARD_SIZE, Board, Cell, GameStatus, Line, Player};
