//! Exhaustive minimax search
//!
//! The search walks every remaining move sequence on a scratch copy of the
//! board, applying and undoing moves in place. There is no pruning and no
//! transposition cache; from a one-move board the tree has under 60 000
//! nodes, and from the empty board under 550 000.

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use tracing::{debug, instrument};

use super::ensure_playable;
use crate::{
    Error, Result,
    ports::Strategy,
    tictactoe::{Board, Mark},
};

/// Best move found by the search and its score.
///
/// Scores are positive when `self_mark` wins, negative when it loses and
/// zero for a tie; the magnitude is `empty squares + 1` at the terminal
/// position, so faster wins and slower losses score better. `index` is
/// `None` for terminal positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub index: Option<usize>,
    pub score: i32,
}

struct Search {
    self_mark: Mark,
    nodes: u64,
}

impl Search {
    fn run(&mut self, board: &mut Board, turn: Mark) -> SearchResult {
        self.nodes += 1;

        // In the recursion the recorded winner is always the mark that just moved.
        if let Some(winner) = board.last_winner() {
            let magnitude = board.empty_count() as i32 + 1;
            let score = if winner == self.self_mark {
                magnitude
            } else {
                -magnitude
            };
            return SearchResult { index: None, score };
        }
        if !board.has_empty() {
            return SearchResult {
                index: None,
                score: 0,
            };
        }

        let maximizing = turn == self.self_mark;
        let mut best = SearchResult {
            index: None,
            score: if maximizing { i32::MIN } else { i32::MAX },
        };

        for index in board.available_moves() {
            board.apply_move(index, turn);
            let child = self.run(board, turn.opponent());
            board.undo_move(index);

            // Strict comparison: the first of equally scored moves is kept.
            let better = if maximizing {
                child.score > best.score
            } else {
                child.score < best.score
            };
            if better {
                best = SearchResult {
                    index: Some(index),
                    score: child.score,
                };
            }
        }

        best
    }
}

/// Score every continuation of `board` with `turn` to move, from the point
/// of view of `self_mark`.
///
/// Every exploratory move is undone before the next one, so `board` is left
/// exactly as it was passed in.
pub fn minimax(board: &mut Board, self_mark: Mark, turn: Mark) -> SearchResult {
    Search {
        self_mark,
        nodes: 0,
    }
    .run(board, turn)
}

/// Optimal player backed by [`minimax`]
pub struct MinimaxStrategy {
    name: String,
    rng: StdRng,
    random_opening: bool,
}

impl MinimaxStrategy {
    /// Create a minimax strategy that opens an empty board at random
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(random()),
            random_opening: true,
        }
    }

    /// Create a minimax strategy with a deterministic opening seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
            random_opening: true,
        }
    }

    /// Create a minimax strategy that searches the empty board too.
    ///
    /// Every position, the opening included, then gets the same
    /// deterministic move.
    pub fn exhaustive(name: impl Into<String>) -> Self {
        Self {
            random_opening: false,
            ..Self::with_seed(name, 0)
        }
    }

    /// Search `board` for `mark` and return the best move with its score.
    ///
    /// Never takes the random opening shortcut.
    ///
    /// # Errors
    ///
    /// Returns an error if the game on `board` is already over.
    #[instrument(skip(self, board), fields(board = %board.encode()))]
    pub fn evaluate(&self, board: &Board, mark: Mark) -> Result<SearchResult> {
        ensure_playable(board)?;

        let mut scratch = board.clone();
        let mut search = Search {
            self_mark: mark,
            nodes: 0,
        };
        let result = search.run(&mut scratch, mark);
        debug!(
            strategy = %self.name,
            nodes = search.nodes,
            index = ?result.index,
            score = result.score,
            "minimax search complete"
        );
        Ok(result)
    }
}

impl Strategy for MinimaxStrategy {
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize> {
        ensure_playable(board)?;

        if self.random_opening && board.is_initial() {
            let moves = board.available_moves();
            let index = moves[self.rng.random_range(0..moves.len())];
            debug!(strategy = %self.name, index, "random opening move");
            return Ok(index);
        }

        self.evaluate(board, mark)?.index.ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &str) -> Board {
        cells.parse().unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut strategy = MinimaxStrategy::with_seed("minimax", 1);
        assert_eq!(strategy.choose_move(&board("XX.OO...."), Mark::X).unwrap(), 2);
    }

    #[test]
    fn test_immediate_win_scores_by_remaining_squares() {
        let strategy = MinimaxStrategy::with_seed("minimax", 1);
        let result = strategy.evaluate(&board("XX.OO...."), Mark::X).unwrap();
        // Four squares left after the winning move.
        assert_eq!(result, SearchResult { index: Some(2), score: 5 });
    }

    #[test]
    fn test_blocks_opponent_win() {
        // X threatens the top row; O has no win of its own.
        let mut strategy = MinimaxStrategy::with_seed("minimax", 1);
        assert_eq!(strategy.choose_move(&board("XX..O...."), Mark::O).unwrap(), 2);
    }

    #[test]
    fn test_lost_position_keeps_first_candidate() {
        // X threatens both 6 and 8; every O reply loses with the same score.
        let strategy = MinimaxStrategy::with_seed("minimax", 1);
        let result = strategy.evaluate(&board("XOXOXO..."), Mark::O).unwrap();
        assert_eq!(result, SearchResult { index: Some(6), score: -2 });
    }

    #[test]
    fn test_last_square_tie() {
        let strategy = MinimaxStrategy::with_seed("minimax", 1);
        let result = strategy.evaluate(&board("XOXXOOO.X"), Mark::X).unwrap();
        assert_eq!(result, SearchResult { index: Some(7), score: 0 });
    }

    #[test]
    fn test_search_restores_board() {
        let mut scratch = board("X...O....");
        let before = scratch.clone();
        minimax(&mut scratch, Mark::X, Mark::X);
        assert_eq!(scratch, before);
    }

    #[test]
    fn test_terminal_base_cases() {
        let mut won = board("XXXOO....");
        assert_eq!(
            minimax(&mut won, Mark::X, Mark::O),
            SearchResult { index: None, score: 5 }
        );
        assert_eq!(
            minimax(&mut won, Mark::O, Mark::O),
            SearchResult { index: None, score: -5 }
        );

        let mut tied = board("XOXXOOOXX");
        assert_eq!(
            minimax(&mut tied, Mark::O, Mark::O),
            SearchResult { index: None, score: 0 }
        );
    }

    #[test]
    fn test_finished_board_is_an_error() {
        let mut strategy = MinimaxStrategy::with_seed("minimax", 1);
        assert!(matches!(
            strategy.choose_move(&board("XXXOO...."), Mark::O),
            Err(Error::GameOver { winner: Mark::X })
        ));
        assert!(matches!(
            strategy.choose_move(&board("XOXXOOOXX"), Mark::O),
            Err(Error::NoValidMoves)
        ));
    }

    #[test]
    fn test_random_opening_is_seeded() {
        let mut a = MinimaxStrategy::with_seed("a", 99);
        let mut b = MinimaxStrategy::with_seed("b", 99);
        let empty = Board::new();
        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&empty, Mark::X).unwrap(),
                b.choose_move(&empty, Mark::X).unwrap()
            );
        }
    }

    #[test]
    fn test_exhaustive_opening_is_first_square() {
        // Every opening is a theoretical tie, so the first one is kept.
        let mut strategy = MinimaxStrategy::exhaustive("minimax");
        assert_eq!(strategy.choose_move(&Board::new(), Mark::X).unwrap(), 0);
    }
}
