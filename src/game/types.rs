use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/////////////////////////////////////////////
// ************* GENERAL *****************//

/// Grid coordinate. `x` is the lane, `y` the row; row 0 is the player's row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise translation. Wraps on `i32` overflow instead of panicking.
    pub fn add(self, delta: Position) -> Position {
        Position::new(self.x.wrapping_add(delta.x), self.y.wrapping_add(delta.y))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position::new(x, y)
    }
}

/// Rotation direction of the firing lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Lane delta applied to every occupant.
    pub fn lane_delta(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotType {
    Destroy,
    Collect,
}

/////////////////////////////////////////////
// ************* ENTITY *******************//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entity {
    Player,
    Destroyable,
    Collectable,
    Blocker,
    Bomb,
}

pub const PLAYER: char = 'P';
pub const DESTROYABLE: char = 'D';
pub const COLLECTABLE: char = 'C';
pub const BLOCKER: char = 'B';
pub const BOMB: char = 'O';

impl Entity {
    /// Single-character tag used for rendering and save files.
    pub fn display(self) -> char {
        match self {
            Entity::Player => PLAYER,
            Entity::Destroyable => DESTROYABLE,
            Entity::Collectable => COLLECTABLE,
            Entity::Blocker => BLOCKER,
            Entity::Bomb => BOMB,
        }
    }

    pub fn from_tag(tag: char) -> GameResult<Entity> {
        match tag {
            PLAYER => Ok(Entity::Player),
            DESTROYABLE => Ok(Entity::Destroyable),
            COLLECTABLE => Ok(Entity::Collectable),
            BLOCKER => Ok(Entity::Blocker),
            BOMB => Ok(Entity::Bomb),
            other => Err(GameError::UnknownTag(other)),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
