use std::collections::BTreeMap;

use crate::error::{GameError, GameResult};
use crate::game::types::{Entity, Position};

/// Sparse N x N board of entities.
///
/// Row 0 belongs to the player and is never stored: placements outside lanes `0..size`
/// or rows `1..size` are silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: BTreeMap<Position, Entity>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: BTreeMap::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        let size = self.size as i64;
        let (x, y) = (pos.x as i64, pos.y as i64);
        (0..size).contains(&x) && (1..size).contains(&y)
    }

    /// Insert or overwrite. Out-of-bounds positions are ignored.
    pub fn add_entity(&mut self, pos: Position, entity: Entity) {
        if self.in_bounds(pos) {
            self.cells.insert(pos, entity);
        }
    }

    pub fn get_entity(&self, pos: Position) -> GameResult<Entity> {
        self.cells
            .get(&pos)
            .copied()
            .ok_or(GameError::PositionNotFound(pos))
    }

    pub fn remove_entity(&mut self, pos: Position) -> GameResult<Entity> {
        self.cells
            .remove(&pos)
            .ok_or(GameError::PositionNotFound(pos))
    }

    /// Snapshot copy of every occupant.
    pub fn get_entities(&self) -> BTreeMap<Position, Entity> {
        self.cells.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, Entity)> + '_ {
        self.cells.iter().map(|(pos, entity)| (*pos, *entity))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Wire form: `(x, y)` keys to display tags.
    pub fn serialise(&self) -> BTreeMap<(i32, i32), char> {
        self.cells
            .iter()
            .map(|(pos, entity)| ((pos.x, pos.y), entity.display()))
            .collect()
    }
}
