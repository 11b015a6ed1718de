//! Flat persistence record of a board

use serde::{Deserialize, Serialize};

use super::board::{Cell, Mark};

/// Serializable snapshot of a [`Board`](super::Board).
///
/// Field names and encodings follow the save-file layout:
///
/// ```json
/// {"board": ["X", " ", "O", " ", " ", " ", " ", " ", " "],
///  "current_winner": null,
///  "move_history": [[0, "X"], [2, "O"]]}
/// ```
///
/// `board` is a `Vec` rather than an array so that a file with the wrong
/// number of cells still deserializes and can be rejected by
/// [`Board::import_state`](super::Board::import_state) with a precise error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub board: Vec<Cell>,
    #[serde(default)]
    pub current_winner: Option<Mark>,
    #[serde(default)]
    pub move_history: Vec<(usize, Mark)>,
}
