//! Engine error types.
//!
//! Dropping an entity that lands out of bounds is not an error; only lookups of empty
//! positions, bad display tags and unreadable save/config data are.

use crate::game::types::Position;

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// No entity is mapped at the requested position.
    #[error("no entity at {0}")]
    PositionNotFound(Position),

    #[error("unknown entity tag '{0}'")]
    UnknownTag(char),

    /// Save text could not be read back. `line` is 1-based.
    #[error("malformed save file at line {line}: {reason}")]
    MalformedSave { line: usize, reason: String },

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GameResult<T> = Result<T, GameError>;
