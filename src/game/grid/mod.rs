//! Board model.

pub mod grid;

pub use grid::*;
