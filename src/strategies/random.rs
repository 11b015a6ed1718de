//! Uniform random strategy

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use super::ensure_playable;
use crate::{
    Result,
    ports::Strategy,
    tictactoe::{Board, Mark},
};

/// Picks uniformly among the free squares
pub struct RandomStrategy {
    name: String,
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a new random strategy
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random strategy with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, board: &Board, _mark: Mark) -> Result<usize> {
        ensure_playable(board)?;
        let moves = board.available_moves();
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_picks_available_squares() {
        let board: Board = "XOX.O.X..".parse().unwrap();
        let available = board.available_moves();
        let mut strategy = RandomStrategy::with_seed("random", 7);

        for _ in 0..100 {
            let index = strategy.choose_move(&board, Mark::O).unwrap();
            assert!(available.contains(&index));
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomStrategy::with_seed("a", 42);
        let mut b = RandomStrategy::with_seed("b", 42);

        for _ in 0..20 {
            assert_eq!(
                a.choose_move(&board, Mark::X).unwrap(),
                b.choose_move(&board, Mark::X).unwrap()
            );
        }
    }

    #[test]
    fn test_single_free_square() {
        let board: Board = "XOXXOO.XO".parse().unwrap();
        let mut strategy = RandomStrategy::with_seed("random", 3);
        assert_eq!(strategy.choose_move(&board, Mark::X).unwrap(), 6);
    }

    #[test]
    fn test_full_board_is_an_error() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let mut strategy = RandomStrategy::with_seed("random", 3);
        assert!(strategy.choose_move(&board, Mark::O).is_err());
    }
}
