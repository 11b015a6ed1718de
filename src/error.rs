//! Error types for the noughts crate

use thiserror::Error;

use crate::tictactoe::Mark;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("game already over: {winner} has won")]
    GameOver { winner: Mark },

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("strategy '{strategy}' proposed square {index}, which was rejected by the board")]
    RejectedMove { index: usize, strategy: String },

    #[error("input closed while waiting for {expected}")]
    InputClosed { expected: String },

    #[error("board string has the wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must differ by at most one)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("both players have a winning line in '{context}'")]
    ConflictingWinners { context: String },

    #[error("snapshot has {got} cells, expected 9")]
    InvalidCellCount { got: usize },

    #[error("snapshot records {mark} as winner but no line is complete for {mark}")]
    InconsistentWinner { mark: Mark },

    #[error("snapshot move history is inconsistent: {reason}")]
    InconsistentHistory { reason: String },

    #[error("unknown strategy '{input}'. Expected one of: {expected}")]
    ParseStrategyKind { input: String, expected: String },

    #[error("invalid mark '{input}' (expected 'X' or 'O')")]
    ParseMark { input: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
