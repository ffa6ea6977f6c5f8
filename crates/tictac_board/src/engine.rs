//! Turn and win state machine.
//!
//! ```text
//! InProgress --legal, non-winning move--> InProgress (turn passes)
//! InProgress --legal, winning move------> Won        (turn kept by winner)
//! Won        --any move-----------------> Won        (no-op)
//! *          --reset--------------------> InProgress (empty board, Player 1)
//! ```

use crate::rules::{has_win, is_full};
use crate::{Board, Move, MoveError, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    InProgress,
    /// A line was completed; only reset leaves this phase.
    Won,
}

/// Complete game state.
///
/// A plain value. Every transition returns a fresh state and leaves
/// the receiver as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    won: bool,
}

impl GameState {
    /// Creates the initial state: empty board, Player 1 to move, not won.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::PlayerOne,
            won: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move, or the winner once the game is won.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Whether the last move completed a line.
    pub fn won(&self) -> bool {
        self.won
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.won.then_some(self.current_player)
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        if self.won { Phase::Won } else { Phase::InProgress }
    }

    /// Board is full and nobody won.
    pub fn is_draw(&self) -> bool {
        !self.won && is_full(&self.board)
    }

    /// Turn / win line shown under the board.
    pub fn status_message(&self) -> String {
        if self.won {
            format!("{} has won!", self.current_player)
        } else if self.is_draw() {
            "Draw".to_string()
        } else {
            self.current_player.to_string()
        }
    }

    /// Places `player`'s mark at `position`, or explains why it can't.
    ///
    /// The turn passes to the opponent of `player` unless the move wins,
    /// in which case `player` stays as the current player.
    #[instrument(skip(self), fields(player = %action.player, position = %action.position))]
    pub fn try_apply_move(&self, action: Move) -> Result<GameState, MoveError> {
        if self.won {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(action.position) {
            return Err(MoveError::SquareOccupied(action.position));
        }
        if action.player != self.current_player {
            debug!(expected = %self.current_player, "Move played out of turn");
        }

        let board = self
            .board
            .with(action.position, Square::Occupied(action.player));
        let won = has_win(&board);
        let current_player = if won {
            info!(winner = %action.player, "Game won");
            action.player
        } else {
            action.player.opponent()
        };

        Ok(GameState {
            board,
            current_player,
            won,
        })
    }

    /// Places `player`'s mark at `position`.
    ///
    /// Illegal moves (occupied square, game already won) return the
    /// state unchanged.
    #[instrument(skip(self))]
    pub fn apply_move(&self, position: Position, player: Player) -> GameState {
        match self.try_apply_move(Move::new(player, position)) {
            Ok(next) => next,
            Err(error) => {
                debug!(%error, "Move rejected");
                *self
            }
        }
    }

    /// Returns the initial state, whatever this state is.
    #[instrument(skip(self))]
    pub fn reset(&self) -> GameState {
        reset()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the initial state: empty board, Player 1 to move, not won.
#[instrument]
pub fn reset() -> GameState {
    GameState::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.current_player(), Player::PlayerOne);
        assert_eq!(state.phase(), Phase::InProgress);
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_try_apply_move_reports_occupied() {
        let state = GameState::new().apply_move(Position::Center, Player::PlayerOne);
        let result = state.try_apply_move(Move::new(Player::PlayerTwo, Position::Center));
        assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    }

    #[test]
    fn test_try_apply_move_reports_game_over() {
        let state = [Position::TopLeft, Position::MiddleLeft, Position::TopCenter]
            .into_iter()
            .zip([Player::PlayerOne, Player::PlayerTwo, Player::PlayerOne])
            .fold(GameState::new(), |s, (pos, player)| s.apply_move(pos, player))
            .apply_move(Position::Center, Player::PlayerTwo)
            .apply_move(Position::TopRight, Player::PlayerOne);
        assert!(state.won());

        let result = state.try_apply_move(Move::new(Player::PlayerTwo, Position::BottomRight));
        assert_eq!(result, Err(MoveError::GameOver));
    }

    #[test]
    fn test_status_message() {
        let state = GameState::new();
        assert_eq!(state.status_message(), "Player 1");
        let state = state.apply_move(Position::Center, Player::PlayerOne);
        assert_eq!(state.status_message(), "Player 2");
    }
}
