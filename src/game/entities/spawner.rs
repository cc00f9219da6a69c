//! Back-row spawning.
//!
//! This is the only source of randomness in the engine. The generator is passed in so a
//! seeded one gives reproducible spawns.

use log::trace;
use rand::Rng;
use rand::seq::{IndexedRandom, index};

use crate::config::game::{BLOCKER_ONE_IN, BOMB_ONE_IN};
use crate::game::types::{Entity, Position};

/// Variants drawn (with replacement) for the regular part of a spawn.
pub const SPAWN_POOL: [Entity; 2] = [Entity::Destroyable, Entity::Collectable];

/// Roll a fresh set of entities for the back row (`size - 1`) of a grid.
///
/// Up to `size - 3` regular entities, plus one blocker with a 1 in 4 chance. With
/// `spawn_bombs`, a bomb may join instead when no blocker was rolled.
/// Never more than `size - 2` entities; all returned lanes are distinct.
pub fn spawn_back_row<R: Rng>(
    size: usize,
    spawn_bombs: bool,
    rng: &mut R,
) -> Vec<(Position, Entity)> {
    let count = rng.random_range(0..=size.saturating_sub(3));
    let mut entities: Vec<Entity> = Vec::with_capacity(count + 1);
    for _ in 0..count {
        if let Some(entity) = SPAWN_POOL.choose(rng) {
            entities.push(*entity);
        }
    }

    let blocker = rng.random_ratio(1, BLOCKER_ONE_IN);
    if blocker {
        entities.push(Entity::Blocker);
    } else if spawn_bombs && rng.random_ratio(1, BOMB_ONE_IN) {
        entities.push(Entity::Bomb);
    }

    // Grids below the playable minimum have no room for the extra blocker or bomb.
    entities.truncate(size.saturating_sub(2));

    let row = size as i32 - 1;
    index::sample(rng, size, entities.len())
        .into_iter()
        .zip(entities)
        .map(|(lane, entity)| {
            trace!("[Spawner] {} at lane {}", entity, lane);
            (Position::new(lane as i32, row), entity)
        })
        .collect()
}
