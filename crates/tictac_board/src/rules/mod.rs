//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from the
//! turn state machine so they can be checked on any board value.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, has_win};
