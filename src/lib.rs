//! Noughts and crosses with an exhaustive minimax opponent
//!
//! This crate provides:
//! - The 3x3 game-state engine: moves, undo, win detection, snapshots
//! - Player strategies: terminal input, uniform random, and minimax search
//! - A game driver with observers, session tallies and AI-only series
//! - JSON and MessagePack save files, and CSV export of session results

pub mod adapters;
pub mod cli;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod ports;
pub mod strategies;
pub mod tictactoe;

pub use error::{Error, Result};
