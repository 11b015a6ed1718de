//! JSON save files.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use tracing::debug;

use super::{create_error, open_error};
use crate::{
    Error, Result,
    ports::GameRepository,
    tictactoe::{Board, BoardSnapshot},
};

/// JSON-based game repository.
///
/// Writes the snapshot layout documented on [`BoardSnapshot`], which is the
/// format of `tictactoe_save.json`.
///
/// # Examples
///
/// ```no_run
/// use noughts::adapters::JsonRepository;
/// use noughts::ports::GameRepository;
/// use noughts::tictactoe::{Board, Mark};
/// use std::path::Path;
///
/// let repo = JsonRepository::new();
/// let mut board = Board::new();
/// board.apply_move(4, Mark::X);
///
/// repo.save(&board, Path::new("tictactoe_save.json"))?;
/// let loaded = repo.load(Path::new("tictactoe_save.json"))?;
/// assert_eq!(loaded, board);
/// # Ok::<(), noughts::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepository;

impl JsonRepository {
    pub fn new() -> Self {
        Self
    }
}

impl GameRepository for JsonRepository {
    fn save(&self, board: &Board, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| create_error(path, source))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &board.export_state())?;
        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush {path:?}"),
            source,
        })?;

        debug!(path = %path.display(), moves = board.move_history().len(), "saved game");
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Board> {
        let file = File::open(path).map_err(|source| open_error(path, source))?;
        let snapshot: BoardSnapshot = serde_json::from_reader(BufReader::new(file))?;
        Board::from_snapshot(&snapshot)
    }
}
