//! CLI infrastructure for the noughts game
//!
//! This module provides the command-line interface for interactive play,
//! AI-only series, and inspecting saved or hand-written positions.

pub mod commands;
pub mod config;
pub mod output;
pub mod prompt;
