//! Pure tic-tac-toe logic.
//!
//! A [`Board`] is a 9-square value, a [`GameState`] pairs it with the
//! player to move and a won flag. Transitions return new values:
//!
//! ```
//! use tictac_board::{GameState, Player, Position};
//!
//! let state = GameState::new().apply_move(Position::Center, Player::PlayerOne);
//! assert_eq!(state.current_player(), Player::PlayerTwo);
//!
//! // Occupied squares are ignored.
//! let again = state.apply_move(Position::Center, Player::PlayerTwo);
//! assert_eq!(again, state);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use engine::{GameState, Phase, reset};
pub use position::Position;
pub use rules::{check_winner, has_win, is_full};
pub use types::{Board, Player, Square};
