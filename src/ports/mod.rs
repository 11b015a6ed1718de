//! Ports (trait boundaries) for external collaborators.
//!
//! The game engine owns these interfaces; strategies, storage backends and
//! observers plug in as implementations.

pub mod input;
pub mod observer;
pub mod repository;
pub mod strategy;

pub use input::LineSource;
pub use observer::GameObserver;
pub use repository::GameRepository;
pub use strategy::Strategy;
