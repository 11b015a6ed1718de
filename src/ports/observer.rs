//! Observer port - per-game event hooks
//!
//! Observers let the driver report progress (console output, structured logs)
//! without the turn loop knowing about any output format.

use crate::{
    Result,
    tictactoe::{Board, GameOutcome, Move},
};

/// Observer trait for monitoring a game.
///
/// # Event Sequence
///
/// 1. `on_game_start(board)` - once, before the first move is requested
/// 2. `on_move(board, mv)` - after each applied move, with the updated board
/// 3. `on_game_end(board, outcome)` - once the board is terminal
///
/// All methods default to doing nothing.
pub trait GameObserver: Send {
    /// Called before the first move of a game.
    fn on_game_start(&mut self, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called after a move has been applied.
    fn on_move(&mut self, _board: &Board, _mv: Move) -> Result<()> {
        Ok(())
    }

    /// Called when the game reaches a terminal state.
    fn on_game_end(&mut self, _board: &Board, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }
}
