//! Subcommands of the `noughts` binary

pub mod analyze;
pub mod history;
pub mod play;
pub mod series;
