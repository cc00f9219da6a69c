/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as grid dimensions,
/// the collection target and spawn odds, plus the [`GameConfig`] value a game is built from.
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Number of lanes (and rows) in the game grid.
pub const GRID_SIZE: usize = 7;

/// Smallest playable grid: the player row, a front row and a back row.
pub const MIN_GRID_SIZE: usize = 3;

/// Number of collectables needed to win.
pub const COLLECTION_TARGET: u32 = 7;

/// A blocker joins the back-row spawn with a 1 in `BLOCKER_ONE_IN` chance.
pub const BLOCKER_ONE_IN: u32 = 4;

/// A bomb joins the back-row spawn with a 1 in `BOMB_ONE_IN` chance (only when bombs are
/// enabled and no blocker was rolled).
pub const BOMB_ONE_IN: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: usize,
    pub collection_target: u32,
    pub spawn_bombs: bool,
    /// Fixed spawn seed. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            collection_target: COLLECTION_TARGET,
            spawn_bombs: false,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(raw: &str) -> GameResult<Self> {
        let config: GameConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GameResult<()> {
        if self.size < MIN_GRID_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "grid size must be at least {MIN_GRID_SIZE}, got {}",
                self.size
            )));
        }
        if self.collection_target == 0 {
            return Err(GameError::InvalidConfig(
                "collection target must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Lane the player fires along: the middle lane, rounded down.
    pub fn player_lane(&self) -> usize {
        self.size / 2
    }
}
