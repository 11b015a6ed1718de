//! Finished-game types

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Board, Mark, Move};

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Tie,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while the game is still running
    pub fn from_board(board: &Board) -> Option<Self> {
        if let Some(winner) = board.last_winner() {
            Some(GameOutcome::Win(winner))
        } else if board.is_full() {
            Some(GameOutcome::Tie)
        } else {
            None
        }
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            GameOutcome::Win(mark) => Some(mark),
            GameOutcome::Tie => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(mark) => write!(f, "{mark} wins"),
            GameOutcome::Tie => f.write_str("Tie"),
        }
    }
}

/// A complete game: its outcome and the moves that led there
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub moves: Vec<Move>,
}

impl GameRecord {
    /// Record a finished board; `None` if the board is not terminal
    pub fn from_board(board: &Board) -> Option<Self> {
        GameOutcome::from_board(board).map(|outcome| GameRecord {
            outcome,
            moves: board.move_history().to_vec(),
        })
    }
}
