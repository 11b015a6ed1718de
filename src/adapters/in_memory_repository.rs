//! In-memory game repository for testing.
//!
//! Stores snapshots keyed by path, so driver and CLI logic can be tested
//! without touching the file system.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{
    Result,
    error::Error,
    ports::GameRepository,
    tictactoe::{Board, BoardSnapshot},
};

/// In-memory repository for testing.
///
/// # Examples
///
/// ```
/// use noughts::adapters::InMemoryRepository;
/// use noughts::ports::GameRepository;
/// use noughts::tictactoe::{Board, Mark};
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// let mut board = Board::new();
/// board.apply_move(4, Mark::X);
///
/// repo.save(&board, Path::new("slot"))?;
/// assert_eq!(repo.load(Path::new("slot"))?, board);
/// # Ok::<(), noughts::Error>(())
/// ```
///
/// # Thread Safety
///
/// Clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, BoardSnapshot>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw snapshot without going through a [`Board`].
    ///
    /// Lets tests plant inconsistent data that `load` must reject.
    pub fn insert_snapshot(&self, path: &Path, snapshot: BoardSnapshot) {
        self.storage().insert(key(path), snapshot);
    }

    /// Number of saved games
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    pub fn clear(&self) {
        self.storage().clear();
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.storage().contains_key(&key(path))
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, BoardSnapshot>> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl GameRepository for InMemoryRepository {
    fn save(&self, board: &Board, path: &Path) -> Result<()> {
        self.storage().insert(key(path), board.export_state());
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Board> {
        let snapshot = self
            .storage()
            .get(&key(path))
            .cloned()
            .ok_or_else(|| Error::Io {
                operation: format!("load game from in-memory storage at {path:?}"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
            })?;

        Board::from_snapshot(&snapshot)
    }
}
