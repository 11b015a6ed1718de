//! Game driver
//!
//! This module provides:
//! - The turn loop that drives two strategies over a board
//! - Session tallies and AI-vs-AI series
//! - Observers for console and structured log output

pub mod observers;
pub mod runner;
pub mod session;

pub use observers::{ConsoleObserver, TracingObserver};
pub use runner::GameRunner;
pub use session::{MatchSeries, SessionStats};

pub use crate::ports::{GameObserver, Strategy};
