//! Repository port for saved games.

use std::path::Path;

use tracing::warn;

use crate::{Result, tictactoe::Board};

/// Port for persisting and loading a game board.
///
/// This trait abstracts the storage format, so the driver can save and
/// resume games without knowing whether the file is JSON, MessagePack or an
/// in-memory map.
///
/// # Examples
///
/// ```no_run
/// use noughts::ports::GameRepository;
/// use noughts::tictactoe::Board;
/// use std::path::Path;
///
/// fn checkpoint<R: GameRepository>(repo: &R, board: &Board) -> noughts::Result<()> {
///     repo.save(board, Path::new("tictactoe_save.json"))
/// }
/// ```
pub trait GameRepository {
    /// Save a board to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be written or serialization
    /// fails.
    fn save(&self, board: &Board, path: &Path) -> Result<()>;

    /// Load a board from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be read, the data cannot be
    /// decoded, or the decoded snapshot is inconsistent.
    fn load(&self, path: &Path) -> Result<Board>;
}

/// Load a board, falling back to a fresh one on any failure.
///
/// A missing file, an undecodable file and a corrupt snapshot are all
/// reported with `warn!` and replaced by an empty board.
pub fn load_or_new<R: GameRepository + ?Sized>(repo: &R, path: &Path) -> Board {
    match repo.load(path) {
        Ok(board) => board,
        Err(error) => {
            warn!(path = %path.display(), %error, "could not load saved game, starting a new one");
            Board::new()
        }
    }
}
