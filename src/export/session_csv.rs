//! CSV export of a session's games

use std::path::Path;

use serde::Serialize;

use crate::{
    Result,
    pipeline::SessionStats,
    tictactoe::{GameOutcome, GameRecord},
};

/// A single row in the session CSV export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionCsvRecord {
    /// 1-based game number
    pub game: usize,
    /// `X`, `O` or `tie`
    pub result: String,
    pub num_moves: usize,
    /// Squares in play order, space separated (`"4 0 8"`)
    pub moves: String,
}

impl SessionCsvRecord {
    fn new(game: usize, record: &GameRecord) -> Self {
        let result = match record.outcome {
            GameOutcome::Win(mark) => mark.to_string(),
            GameOutcome::Tie => "tie".to_string(),
        };
        let moves = record
            .moves
            .iter()
            .map(|m| m.index.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            game,
            result,
            num_moves: record.moves.len(),
            moves,
        }
    }
}

/// Exporter for session CSV files
pub struct SessionCsvExporter;

impl SessionCsvExporter {
    /// Rows for every game in `stats`, in play order
    pub fn records(stats: &SessionStats) -> Vec<SessionCsvRecord> {
        stats
            .games
            .iter()
            .enumerate()
            .map(|(i, record)| SessionCsvRecord::new(i + 1, record))
            .collect()
    }

    /// Write one row per game to `path`, with a header.
    ///
    /// Returns the number of rows written.
    pub fn write(stats: &SessionStats, path: &Path) -> Result<usize> {
        let mut writer = csv::Writer::from_path(path)?;
        let records = Self::records(stats);
        for record in &records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(records.len())
    }
}
