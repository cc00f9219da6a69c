//! Game entities module.
//!
//! This module organizes entity spawning logic.

pub mod spawner;

pub use spawner::*;
