//! MessagePack save files.
//!
//! Same snapshot as the JSON adapter, encoded with rmp_serde for a compact
//! binary file.

use std::{fs::File, path::Path};

use super::{create_error, open_error};
use crate::{
    Result,
    error::Error,
    ports::GameRepository,
    tictactoe::{Board, BoardSnapshot},
};

/// MessagePack-based game repository.
///
/// # Examples
///
/// ```no_run
/// use noughts::adapters::MsgPackRepository;
/// use noughts::ports::GameRepository;
/// use noughts::tictactoe::Board;
/// use std::path::Path;
///
/// let repo = MsgPackRepository;
/// repo.save(&Board::new(), Path::new("game.msgpack"))?;
/// let loaded = repo.load(Path::new("game.msgpack"))?;
/// # Ok::<(), noughts::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl GameRepository for MsgPackRepository {
    fn save(&self, board: &Board, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| create_error(path, source))?;

        rmp_serde::encode::write(&mut file, &board.export_state()).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize board to MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Board> {
        let file = File::open(path).map_err(|source| open_error(path, source))?;

        let snapshot: BoardSnapshot =
            rmp_serde::decode::from_read(&file).map_err(|e| Error::SerializationContext {
                operation: "deserialize board from MessagePack".to_string(),
                message: e.to_string(),
            })?;

        Board::from_snapshot(&snapshot)
    }
}
