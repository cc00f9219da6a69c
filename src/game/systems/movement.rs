//! Board movement system.
//!
//! Rotation and the gravity step both build a fresh grid: every occupant moves at once,
//! so shifting in place would overwrite cells that have not moved yet.

use crate::game::grid::Grid;
use crate::game::types::{Direction, Position};

/// Offset applied to every occupant on each step.
pub const STEP_DELTA: Position = Position::new(0, -1);

/// Shift every occupant one lane in `direction`, wrapping around the grid edges.
/// The occupant at `player` (if any) keeps its place.
pub fn rotate_grid(grid: &Grid, direction: Direction, player: Position) -> Grid {
    let size = grid.size() as i32;
    let mut rotated = Grid::new(grid.size());

    for (pos, entity) in grid.iter() {
        let new_pos = if pos == player {
            pos
        } else {
            let moved = pos.add(Position::new(direction.lane_delta(), 0));
            Position::new(moved.x.rem_euclid(size), moved.y)
        };
        rotated.add_entity(new_pos, entity);
    }
    rotated
}

/// Move every occupant one row toward the player. Anything pushed past row 1 is dropped.
pub fn step_grid(grid: &Grid, player: Position) -> Grid {
    let mut stepped = Grid::new(grid.size());

    for (pos, entity) in grid.iter() {
        let new_pos = if pos == player { pos } else { pos.add(STEP_DELTA) };
        stepped.add_entity(new_pos, entity);
    }
    stepped
}
