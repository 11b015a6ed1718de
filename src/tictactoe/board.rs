//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{lines::LineAnalyzer, snapshot::BoardSnapshot};

/// A cell on the Tic-Tac-Toe board
///
/// Serializes as `" "`, `"X"` or `"O"`, the encoding used by saved games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[serde(rename = " ")]
    Empty,
    X,
    O,
}

impl Cell {
    /// Compact character used by [`Board::encode`] and accepted by `FromStr`
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
            Cell::Empty => None,
        }
    }
}

/// A player's symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

impl FromStr for Mark {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            other => Err(crate::Error::ParseMark {
                input: other.to_string(),
            }),
        }
    }
}

/// A move: a cell index plus the mark placed there
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub index: usize,
    pub mark: Mark,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {} moved to square {}", self.mark, self.index)
    }
}

/// The 3x3 grid plus the recorded winner and the order of applied moves
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; 9],
    last_winner: Option<Mark>,
    move_history: Vec<Move>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
            last_winner: None,
            move_history: Vec::new(),
        }
    }

    /// Create a board from a snapshot, validating it first
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> crate::Result<Self> {
        let mut board = Board::new();
        board.import_state(snapshot)?;
        Ok(board)
    }

    /// Get cell at position (0-8); out-of-range positions read as `None`
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// The mark whose move completed a line, if any
    pub fn last_winner(&self) -> Option<Mark> {
        self.last_winner
    }

    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    /// Check if a position is empty
    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index) == Some(Cell::Empty)
    }

    /// All empty positions, in ascending order
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Empty).count()
    }

    pub fn has_empty(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        !self.has_empty()
    }

    /// Full board and nobody won
    pub fn is_tie(&self) -> bool {
        self.is_full() && self.last_winner.is_none()
    }

    /// Check if the game is over (win or tie)
    pub fn is_terminal(&self) -> bool {
        self.last_winner.is_some() || self.is_full()
    }

    /// True when no cell has been played
    pub fn is_initial(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Cell::Empty)
    }

    /// Place `mark` at `index`.
    ///
    /// Returns `false` without touching the board when the index is out of
    /// range or the cell is occupied.
    #[instrument(level = "trace", skip(self))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> bool {
        if !self.is_empty(index) {
            return false;
        }

        self.cells[index] = mark.to_cell();
        self.move_history.push(Move { index, mark });
        if self.check_win(index, mark) {
            self.last_winner = Some(mark);
        }
        true
    }

    /// Clear `index` back to empty and forget the recorded winner.
    ///
    /// Removes the most recent history entry for `index`, so undoing and
    /// re-applying the same move restores the board exactly.
    #[instrument(level = "trace", skip(self))]
    pub fn undo_move(&mut self, index: usize) {
        if index >= self.cells.len() {
            return;
        }
        self.cells[index] = Cell::Empty;
        self.last_winner = None;
        if let Some(pos) = self.move_history.iter().rposition(|m| m.index == index) {
            self.move_history.remove(pos);
        }
    }

    /// Whether the line(s) through `index` are all `mark`.
    ///
    /// Rows and columns are always checked. Diagonals only pass through even
    /// indices (corners and center), so they are only checked for those.
    pub fn check_win(&self, index: usize, mark: Mark) -> bool {
        if index >= self.cells.len() {
            return false;
        }

        let target = mark.to_cell();
        let filled = |line: [usize; 3]| line.iter().all(|&i| self.cells[i] == target);

        let row = index / 3;
        if filled([row * 3, row * 3 + 1, row * 3 + 2]) {
            return true;
        }

        let col = index % 3;
        if filled([col, col + 3, col + 6]) {
            return true;
        }

        index.is_multiple_of(2) && (filled([0, 4, 8]) || filled([2, 4, 6]))
    }

    /// The mark due to play next.
    ///
    /// Inferred from the piece counts; on equal counts the opponent of the
    /// last recorded mover, or X on a fresh board.
    pub fn next_mark(&self) -> Mark {
        let (xs, os) = LineAnalyzer::occupied(&self.cells);
        if xs.len() > os.len() {
            Mark::O
        } else if os.len() > xs.len() {
            Mark::X
        } else {
            self.move_history
                .last()
                .map(|m| m.mark.opponent())
                .unwrap_or(Mark::X)
        }
    }

    /// Clear all state back to a fresh board
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Flat persistence record of this board
    pub fn export_state(&self) -> BoardSnapshot {
        BoardSnapshot {
            board: self.cells.to_vec(),
            current_winner: self.last_winner,
            move_history: self.move_history.iter().map(|m| (m.index, m.mark)).collect(),
        }
    }

    /// Replace this board with `snapshot`.
    ///
    /// The snapshot is validated in full first; on error the board is left
    /// untouched. A snapshot without a recorded winner takes the winner from
    /// the cells.
    pub fn import_state(&mut self, snapshot: &BoardSnapshot) -> crate::Result<()> {
        let cells: [Cell; 9] = snapshot
            .board
            .as_slice()
            .try_into()
            .map_err(|_| crate::Error::InvalidCellCount {
                got: snapshot.board.len(),
            })?;

        if let Some(mark) = snapshot.current_winner
            && !LineAnalyzer::has_won(&cells, mark)
        {
            return Err(crate::Error::InconsistentWinner { mark });
        }

        let history = Self::validate_history(&cells, &snapshot.move_history)?;

        self.cells = cells;
        self.last_winner = snapshot
            .current_winner
            .or_else(|| LineAnalyzer::winner(&cells));
        self.move_history = history;
        Ok(())
    }

    fn validate_history(cells: &[Cell; 9], entries: &[(usize, Mark)]) -> crate::Result<Vec<Move>> {
        let inconsistent = |reason: String| crate::Error::InconsistentHistory { reason };

        let mut seen = [false; 9];
        let mut history = Vec::with_capacity(entries.len());
        for &(index, mark) in entries {
            if index >= 9 {
                return Err(inconsistent(format!("square {index} is out of range")));
            }
            if seen[index] {
                return Err(inconsistent(format!("square {index} was played twice")));
            }
            if cells[index] != mark.to_cell() {
                return Err(inconsistent(format!(
                    "square {index} holds '{}' but history says {mark}",
                    cells[index].to_char()
                )));
            }
            seen[index] = true;
            history.push(Move { index, mark });
        }

        let occupied = cells.iter().filter(|&&c| c != Cell::Empty).count();
        if history.len() != occupied {
            return Err(inconsistent(format!(
                "{} moves recorded for {occupied} occupied squares",
                history.len()
            )));
        }

        Ok(history)
    }

    /// Compact nine-character encoding, e.g. `XX.OO....`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// The numbered guide board shown before a game
    pub fn render_numbers() -> String {
        (0..3)
            .map(|row| {
                let nums: Vec<String> = (row * 3..row * 3 + 3).map(|i| i.to_string()).collect();
                format!("| {} |", nums.join(" | "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            let symbols: Vec<&str> = chunk
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => " ",
                    Cell::X => "X",
                    Cell::O => "O",
                })
                .collect();
            write!(f, "| {} |", symbols.join(" | "))?;
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    /// Parse nine cells such as `"XX. OO. ..."`; whitespace is ignored.
    ///
    /// The move history is reconstructed by alternating the marks in
    /// ascending index order, starting with the mark that has more pieces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let (xs, os) = LineAnalyzer::occupied(&cells);
        if xs.len().abs_diff(os.len()) > 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: xs.len(),
                o_count: os.len(),
            });
        }

        if LineAnalyzer::has_won(&cells, Mark::X) && LineAnalyzer::has_won(&cells, Mark::O) {
            return Err(crate::Error::ConflictingWinners {
                context: s.to_string(),
            });
        }

        let (first, second) = if os.len() > xs.len() {
            ((os, Mark::O), (xs, Mark::X))
        } else {
            ((xs, Mark::X), (os, Mark::O))
        };
        let mut move_history = Vec::with_capacity(first.0.len() + second.0.len());
        for turn in 0..first.0.len() {
            move_history.push(Move {
                index: first.0[turn],
                mark: first.1,
            });
            if let Some(&index) = second.0.get(turn) {
                move_history.push(Move {
                    index,
                    mark: second.1,
                });
            }
        }

        Ok(Board {
            cells,
            last_winner: LineAnalyzer::winner(&cells),
            move_history,
        })
    }
}
