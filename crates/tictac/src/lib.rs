//! Terminal front end for the tic-tac-toe engine and the option picker.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod pick;
pub mod play;
