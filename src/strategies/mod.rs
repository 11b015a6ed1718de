//! Player strategies
//!
//! Three implementations of the [`Strategy`] port:
//! - [`HumanStrategy`]: reads squares from a line-based input
//! - [`RandomStrategy`]: uniform choice among the free squares
//! - [`MinimaxStrategy`]: exhaustive adversarial search

pub mod human;
pub mod minimax;
pub mod random;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use human::HumanStrategy;
pub use minimax::{MinimaxStrategy, SearchResult, minimax};
pub use random::RandomStrategy;

use crate::{
    Error, Result,
    ports::Strategy,
    tictactoe::Board,
};

/// The strategy variants selectable at game setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    Human,
    Random,
    Minimax,
}

impl StrategyKind {
    /// Whether this strategy needs a person at the terminal
    pub fn is_interactive(self) -> bool {
        matches!(self, StrategyKind::Human)
    }

    /// Build the boxed strategy; `seed` fixes the random choices, if any.
    ///
    /// Human strategies are bound to stdin/stdout.
    pub fn into_strategy(self, name: impl Into<String>, seed: Option<u64>) -> Box<dyn Strategy> {
        let name = name.into();
        match (self, seed) {
            (StrategyKind::Human, _) => Box::new(HumanStrategy::stdio(name)),
            (StrategyKind::Random, Some(seed)) => Box::new(RandomStrategy::with_seed(name, seed)),
            (StrategyKind::Random, None) => Box::new(RandomStrategy::new(name)),
            (StrategyKind::Minimax, Some(seed)) => {
                Box::new(MinimaxStrategy::with_seed(name, seed))
            }
            (StrategyKind::Minimax, None) => Box::new(MinimaxStrategy::new(name)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrategyKind::Human => "human",
            StrategyKind::Random => "random",
            StrategyKind::Minimax => "smart",
        };
        f.write_str(label)
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(StrategyKind::Human),
            "random" => Ok(StrategyKind::Random),
            "smart" | "minimax" => Ok(StrategyKind::Minimax),
            _ => Err(Error::ParseStrategyKind {
                input: s.to_string(),
                expected: "human, random, smart/minimax".to_string(),
            }),
        }
    }
}

/// Reject boards on which no strategy can move
pub(crate) fn ensure_playable(board: &Board) -> Result<()> {
    if let Some(winner) = board.last_winner() {
        return Err(Error::GameOver { winner });
    }
    if board.is_full() {
        return Err(Error::NoValidMoves);
    }
    Ok(())
}
