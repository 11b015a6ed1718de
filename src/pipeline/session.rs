//! Multi-game tallies and AI-vs-AI series

use serde::{Deserialize, Serialize};
use tracing::info;

use super::runner::GameRunner;
use crate::{
    Result,
    ports::Strategy,
    tictactoe::{Board, GameOutcome, GameRecord, Mark, Move},
};

/// Win/tie tallies and the per-game history of a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub x_wins: usize,
    pub o_wins: usize,
    pub ties: usize,
    pub games: Vec<GameRecord>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished game
    pub fn record(&mut self, outcome: GameOutcome, moves: Vec<Move>) {
        match outcome {
            GameOutcome::Win(Mark::X) => self.x_wins += 1,
            GameOutcome::Win(Mark::O) => self.o_wins += 1,
            GameOutcome::Tie => self.ties += 1,
        }
        self.games.push(GameRecord { outcome, moves });
    }

    /// Count a terminal board; returns false for a game still running
    pub fn record_board(&mut self, board: &Board) -> bool {
        match GameRecord::from_board(board) {
            Some(record) => {
                self.record(record.outcome, record.moves);
                true
            }
            None => false,
        }
    }

    pub fn total(&self) -> usize {
        self.games.len()
    }

    /// One line per game: `"Game 1: X wins"`, `"Game 2: Tie"`
    pub fn summary_lines(&self) -> Vec<String> {
        self.games
            .iter()
            .enumerate()
            .map(|(i, game)| format!("Game {}: {}", i + 1, game.outcome))
            .collect()
    }

    /// `"After 100 games, X won 12 times, O won 3 times, and there were 85 ties"`
    pub fn overview(&self) -> String {
        format!(
            "After {} games, X won {} times, O won {} times, and there were {} ties",
            self.total(),
            self.x_wins,
            self.o_wins,
            self.ties
        )
    }
}

/// Plays a fixed number of games between two strategies
pub struct MatchSeries {
    runner: GameRunner,
    games: usize,
}

impl MatchSeries {
    pub fn new(games: usize) -> Self {
        Self {
            runner: GameRunner::new(),
            games,
        }
    }

    /// Use a configured runner (observers, delay) for every game
    pub fn with_runner(mut self, runner: GameRunner) -> Self {
        self.runner = runner;
        self
    }

    /// Play every game on a fresh board.
    ///
    /// `progress` is called after each game with the number of games done
    /// and the stats so far.
    pub fn run<F>(
        &mut self,
        x: &mut dyn Strategy,
        o: &mut dyn Strategy,
        mut progress: F,
    ) -> Result<SessionStats>
    where
        F: FnMut(usize, &SessionStats),
    {
        let mut stats = SessionStats::new();
        for game in 1..=self.games {
            let mut board = Board::new();
            let outcome = self.runner.play(&mut board, x, o)?;
            stats.record(outcome, board.move_history().to_vec());
            progress(game, &stats);
        }

        info!(
            games = stats.total(),
            x_wins = stats.x_wins,
            o_wins = stats.o_wins,
            ties = stats.ties,
            "series complete"
        );
        Ok(stats)
    }
}
