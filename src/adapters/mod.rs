//! Adapters implementing the repository port.
//!
//! Each adapter stores a [`BoardSnapshot`](crate::tictactoe::BoardSnapshot)
//! and rebuilds the board through
//! [`Board::from_snapshot`](crate::tictactoe::Board::from_snapshot), so every
//! backend applies the same consistency checks on load.

pub mod in_memory_repository;
pub mod json_repository;
pub mod msgpack_repository;

use serde::{Deserialize, Serialize};

pub use in_memory_repository::InMemoryRepository;
pub use json_repository::JsonRepository;
pub use msgpack_repository::MsgPackRepository;

use crate::{Error, Result, ports::GameRepository};

/// On-disk format for saved games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SaveFormat {
    #[default]
    Json,
    #[value(name = "msgpack")]
    MsgPack,
}

impl SaveFormat {
    /// Repository for this format
    pub fn repository(self) -> Box<dyn GameRepository> {
        match self {
            SaveFormat::Json => Box::new(JsonRepository::new()),
            SaveFormat::MsgPack => Box::new(MsgPackRepository::new()),
        }
    }

    /// Guess the format from a file extension; anything but `.msgpack`/`.mp` is JSON
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("msgpack" | "mp") => SaveFormat::MsgPack,
            _ => SaveFormat::Json,
        }
    }
}

pub(crate) fn open_error(path: &std::path::Path, source: std::io::Error) -> Error {
    Error::Io {
        operation: format!("open file {path:?}"),
        source,
    }
}

pub(crate) fn create_error(path: &std::path::Path, source: std::io::Error) -> Error {
    Error::Io {
        operation: format!("create file {path:?}"),
        source,
    }
}
