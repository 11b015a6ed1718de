//! Tic-Tac-Toe game-state engine

pub mod board;
pub mod game;
pub mod lines;
pub mod snapshot;

pub use board::{Board, Cell, Mark, Move};
pub use game::{GameOutcome, GameRecord};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use snapshot::BoardSnapshot;
