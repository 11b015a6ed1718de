//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Mark};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Whole-board line queries.
///
/// [`Board::check_win`](super::Board::check_win) only looks at the lines
/// through the last move; these scan every line and are used where no last
/// move is known (parsing, snapshot validation, position analysis).
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a mark has three in a row anywhere
    pub fn has_won(cells: &[Cell; 9], mark: Mark) -> bool {
        let target = mark.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// The mark owning a complete line, X checked first
    pub fn winner(cells: &[Cell; 9]) -> Option<Mark> {
        [Mark::X, Mark::O]
            .into_iter()
            .find(|&mark| Self::has_won(cells, mark))
    }

    /// Empty squares that would complete a line for `mark`, ascending
    pub fn winning_moves(cells: &[Cell; 9], mark: Mark) -> Vec<usize> {
        let mut moves: Vec<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, mark, line))
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    /// Squares `mark` must take to stop the opponent winning next move
    pub fn blocking_moves(cells: &[Cell; 9], mark: Mark) -> Vec<usize> {
        Self::winning_moves(cells, mark.opponent())
    }

    /// Indices held by X and by O, each ascending
    pub fn occupied(cells: &[Cell; 9]) -> (Vec<usize>, Vec<usize>) {
        let mut xs = Vec::new();
        let mut os = Vec::new();
        for (i, cell) in cells.iter().enumerate() {
            match cell {
                Cell::X => xs.push(i),
                Cell::O => os.push(i),
                Cell::Empty => {}
            }
        }
        (xs, os)
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], mark: Mark, line: &[usize; 3]) -> Option<usize> {
        let target = mark.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}
