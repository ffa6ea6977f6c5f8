//! Terminal tic-tac-toe session.

use anyhow::Result;
use std::io::{BufRead, Write};
use tictac_board::{GameState, Position, reset};
use tracing::{info, instrument, warn};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the current player's mark.
    Place(Position),
    /// Start a new game.
    Reset,
    /// Stop playing.
    Quit,
}

impl Input {
    /// Parses a line; `None` when the line means nothing.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "reset" | "r" => Some(Input::Reset),
            "quit" | "q" => Some(Input::Quit),
            other => Position::from_label_or_number(other).map(Input::Place),
        }
    }
}

/// Applies one input to the game.
///
/// Returns `None` on [`Input::Quit`].
pub fn step(state: GameState, input: Input) -> Option<GameState> {
    match input {
        Input::Place(position) => Some(state.apply_move(position, state.current_player())),
        Input::Reset => Some(reset()),
        Input::Quit => None,
    }
}

fn show(out: &mut impl Write, state: &GameState) -> Result<()> {
    writeln!(out, "{}\n{}\n", state.board().display(), state.status_message())?;
    out.flush()?;
    Ok(())
}

/// Plays `moves` (board indices) from the initial state, printing each board.
#[instrument(skip(out))]
pub fn replay(moves: &[usize], out: &mut impl Write) -> Result<GameState> {
    let mut state = GameState::new();
    for &index in moves {
        let position = Position::try_from(index)?;
        let next = state.apply_move(position, state.current_player());
        if next == state {
            warn!(%position, "Move ignored");
            writeln!(out, "{} ignored", position)?;
        }
        state = next;
        show(out, &state)?;
    }
    info!(status = %state.status_message(), "Replay finished");
    Ok(state)
}

/// Reads moves from `input` until it ends or the player quits.
#[instrument(skip(input, out))]
pub fn interactive(input: impl BufRead, out: &mut impl Write) -> Result<GameState> {
    let mut state = GameState::new();
    show(out, &state)?;

    for line in input.lines() {
        let line = line?;
        let Some(parsed) = Input::parse(&line) else {
            writeln!(out, "Unknown input {:?}: type 0-8, reset or quit", line.trim())?;
            continue;
        };
        match step(state, parsed) {
            Some(next) => state = next,
            None => break,
        }
        show(out, &state)?;
    }

    info!(status = %state.status_message(), "Session finished");
    Ok(state)
}
