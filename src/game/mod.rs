pub mod types;
pub mod state;
pub mod save;

pub mod entities;
pub mod grid;
pub mod systems;
