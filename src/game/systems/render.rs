//! Text rendering of the board.
//!
//! Produces the same character grid a terminal UI would print. Nothing is written to
//! stdout here; the caller decides where the text goes.

use crate::game::grid::Grid;
use crate::game::types::{Entity, Position};

pub const EMPTY_CELL: char = '.';

/// Render the grid one line per row, player row first.
pub fn render_grid(grid: &Grid, player: Position) -> String {
    let size = grid.size() as i32;
    let mut out = String::with_capacity(grid.size() * (grid.size() + 1));

    for y in 0..size {
        for x in 0..size {
            let pos = Position::new(x, y);
            // Priority to the player, then whatever occupies the cell.
            let symbol = if pos == player {
                Entity::Player.display()
            } else {
                grid.get_entity(pos).map_or(EMPTY_CELL, Entity::display)
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_player_and_occupants() {
        let mut grid = Grid::new(3);
        grid.add_entity(Position::new(0, 2), Entity::Destroyable);
        grid.add_entity(Position::new(2, 1), Entity::Bomb);

        let text = render_grid(&grid, Position::new(1, 0));
        assert_eq!(text, ".P.\n..O\nD..\n");
    }
}
