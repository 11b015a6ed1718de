//! Shared configuration types for CLI commands

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{adapters::SaveFormat, strategies::StrategyKind};

/// Save file used when none is given
pub const DEFAULT_SAVE_FILE: &str = "tictactoe_save.json";

/// Pause between moves in interactive play, in milliseconds
pub const DEFAULT_MOVE_DELAY_MS: u64 = 800;

/// Games per series when none is given
pub const DEFAULT_SERIES_GAMES: usize = 100;

/// Interactive play configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Strategy for X; prompted each round when `None`
    pub x: Option<StrategyKind>,

    /// Strategy for O; prompted each round when `None`
    pub o: Option<StrategyKind>,

    /// Where games are saved and loaded
    pub save_file: PathBuf,

    pub format: SaveFormat,

    /// Pause after each move
    pub move_delay: Duration,

    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            x: None,
            o: None,
            save_file: PathBuf::from(DEFAULT_SAVE_FILE),
            format: SaveFormat::Json,
            move_delay: Duration::from_millis(DEFAULT_MOVE_DELAY_MS),
            seed: None,
        }
    }
}

impl PlayConfig {
    /// Seeds for X and O in round `round` (0-based), if play is seeded.
    ///
    /// Each round and each player gets its own stream.
    pub fn round_seeds(&self, round: u64) -> (Option<u64>, Option<u64>) {
        match self.seed {
            Some(seed) => {
                let base = seed.wrapping_add(round.wrapping_mul(2));
                (Some(base), Some(base.wrapping_add(1)))
            }
            None => (None, None),
        }
    }
}

/// AI-only series configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub x: StrategyKind,
    pub o: StrategyKind,

    /// Number of games
    pub games: usize,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Export per-game results to CSV
    pub export: Option<PathBuf>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            x: StrategyKind::Minimax,
            o: StrategyKind::Random,
            games: DEFAULT_SERIES_GAMES,
            seed: None,
            export: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_defaults() {
        let config = PlayConfig::default();
        assert_eq!(config.save_file, PathBuf::from("tictactoe_save.json"));
        assert_eq!(config.move_delay, Duration::from_millis(800));
        assert_eq!(config.round_seeds(3), (None, None));
    }

    #[test]
    fn test_round_seeds_are_distinct() {
        let config = PlayConfig {
            seed: Some(10),
            ..PlayConfig::default()
        };
        assert_eq!(config.round_seeds(0), (Some(10), Some(11)));
        assert_eq!(config.round_seeds(1), (Some(12), Some(13)));
    }
}
