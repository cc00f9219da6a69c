use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::GameResult;
use crate::game::grid::Grid;
use crate::game::types::{Entity, Position, ShotType};

/// What a single shot did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireOutcome {
    /// Nothing in the firing lane.
    Empty,
    Collected,
    Destroyed,
    /// A bomb absorbed the shot. Counters are untouched.
    BombCleared,
    /// The nearest occupant did not match the shot and stays where it is.
    NoEffect(Entity),
}

impl FireOutcome {
    /// True when the shot counts toward the engine's shot total.
    pub fn is_hit(self) -> bool {
        matches!(self, FireOutcome::Collected | FireOutcome::Destroyed)
    }
}

/// Nearest occupant of `lane`, ignoring the player row.
pub fn nearest_in_lane(grid: &Grid, lane: i32) -> Option<(Position, Entity)> {
    grid.iter()
        .filter(|(pos, _)| pos.x == lane && pos.y >= 1)
        .min_by_key(|(pos, _)| pos.y)
}

/// Resolve one shot along `lane`.
///
/// Only the nearest occupant is considered. If it does not match the shot it blocks the
/// lane for this shot and anything behind it stays out of reach.
pub fn resolve_fire(grid: &mut Grid, lane: i32, shot: ShotType) -> GameResult<FireOutcome> {
    let Some((pos, entity)) = nearest_in_lane(grid, lane) else {
        return Ok(FireOutcome::Empty);
    };

    let outcome = match (entity, shot) {
        (Entity::Bomb, _) => FireOutcome::BombCleared,
        (Entity::Collectable, ShotType::Collect) => FireOutcome::Collected,
        (Entity::Destroyable, ShotType::Destroy) => FireOutcome::Destroyed,
        (other, _) => FireOutcome::NoEffect(other),
    };

    if !matches!(outcome, FireOutcome::NoEffect(_)) {
        grid.remove_entity(pos)?;
    }
    debug!("[Fire] {:?} shot at {} -> {:?}", shot, pos, outcome);
    Ok(outcome)
}

/// True when a destroyable sits on row 1, right in front of the player row.
pub fn destroyable_reached_player(grid: &Grid) -> bool {
    grid.iter()
        .any(|(pos, entity)| pos.y == 1 && entity == Entity::Destroyable)
}
