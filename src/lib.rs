//! Simulation engine for a lane-rotating grid shooter.
//!
//! Entities scroll one row per step toward a fixed player row. The player rotates the
//! board under its firing lane and fires typed shots to destroy or collect what comes
//! down that lane. The engine never drives itself: a UI owns one [`Game`] and calls
//! [`Game::rotate`], [`Game::fire`] and [`Game::step`], then reads the state back to redraw.

pub mod config;
pub mod error;
pub mod game;

pub use config::game::GameConfig;
pub use error::{GameError, GameResult};
pub use game::save::{GameSnapshot, SaveFile};
pub use game::state::Game;
pub use game::systems::FireOutcome;
pub use game::types::{Direction, Entity, Position, ShotType};
