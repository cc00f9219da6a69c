//! Persisted game state.
//!
//! [`SaveFile`] is the five-line text layout a UI writes to disk:
//!
//! 1. the serialised grid as a mapping literal, e.g. `{(3, 6): 'C', (0, 6): 'D'}`
//! 2. collected count
//! 3. destroyed count
//! 4. shots fired, as tracked by the UI
//! 5. elapsed seconds, as tracked by the UI
//!
//! The engine only restores the first three; the last two belong to the UI.
//! [`GameSnapshot`] is the structured alternative for UIs that speak JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::game::GameConfig;
use crate::error::{GameError, GameResult};
use crate::game::state::Game;
use crate::game::types::Position;

const SAVE_LINES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFile {
    pub field: BTreeMap<(i32, i32), char>,
    pub collected: u32,
    pub destroyed: u32,
    pub total_shots: u32,
    pub elapsed_secs: u64,
}

impl SaveFile {
    /// Capture the engine state plus the two UI-owned fields.
    pub fn capture(game: &Game, total_shots: u32, elapsed_secs: u64) -> Self {
        SaveFile {
            field: game.grid().serialise(),
            collected: game.collected(),
            destroyed: game.destroyed(),
            total_shots,
            elapsed_secs,
        }
    }

    pub fn into_game(&self, config: GameConfig) -> GameResult<Game> {
        Game::restore(config, &self.field, self.collected, self.destroyed)
    }

    pub fn to_text(&self) -> String {
        let entries: Vec<String> = self
            .field
            .iter()
            .map(|((x, y), tag)| format!("({x}, {y}): '{tag}'"))
            .collect();

        format!(
            "{{{}}}\n{}\n{}\n{}\n{}\n",
            entries.join(", "),
            self.collected,
            self.destroyed,
            self.total_shots,
            self.elapsed_secs
        )
    }

    pub fn parse(raw: &str) -> GameResult<Self> {
        let mut lines: Vec<&str> = raw.lines().collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        if lines.len() != SAVE_LINES {
            return Err(GameError::MalformedSave {
                line: lines.len().min(SAVE_LINES) + 1,
                reason: format!("expected {SAVE_LINES} lines, found {}", lines.len()),
            });
        }

        let field =
            parse_field(lines[0]).map_err(|reason| GameError::MalformedSave { line: 1, reason })?;
        Ok(SaveFile {
            field,
            collected: parse_count(lines[1], 2)?,
            destroyed: parse_count(lines[2], 3)?,
            total_shots: parse_count(lines[3], 4)?,
            elapsed_secs: parse_count(lines[4], 5)?,
        })
    }
}

fn parse_count<T: std::str::FromStr>(raw: &str, line: usize) -> GameResult<T> {
    raw.trim().parse().map_err(|_| GameError::MalformedSave {
        line,
        reason: format!("expected a non-negative integer, found {:?}", raw.trim()),
    })
}

/// Parse `{(x, y): 'T', ...}`. Either quote style is accepted and a trailing comma is fine.
fn parse_field(raw: &str) -> Result<BTreeMap<(i32, i32), char>, String> {
    let body = raw
        .trim()
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or_else(|| "expected a {...} mapping".to_string())?;

    let mut field = BTreeMap::new();
    let mut rest = body.trim_start();
    while !rest.is_empty() {
        let (key, after) = rest
            .strip_prefix('(')
            .and_then(|s| s.split_once(')'))
            .ok_or_else(|| format!("expected an (x, y) key at {rest:?}"))?;
        let (x, y) = key
            .split_once(',')
            .ok_or_else(|| format!("expected two coordinates in ({key})"))?;
        let x: i32 = x.trim().parse().map_err(|_| format!("bad x coordinate {:?}", x.trim()))?;
        let y: i32 = y.trim().parse().map_err(|_| format!("bad y coordinate {:?}", y.trim()))?;

        let value = after
            .trim_start()
            .strip_prefix(':')
            .ok_or_else(|| format!("expected ':' after ({x}, {y})"))?
            .trim_start();
        let mut chars = value.chars();
        let (open, tag, close) = (chars.next(), chars.next(), chars.next());
        let tag = match (open, tag, close) {
            (Some(q @ ('\'' | '"')), Some(tag), Some(c)) if c == q => tag,
            _ => return Err(format!("expected a quoted tag for ({x}, {y})")),
        };
        field.insert((x, y), tag);

        rest = chars.as_str().trim_start();
        if let Some(next) = rest.strip_prefix(',') {
            rest = next.trim_start();
        } else if !rest.is_empty() {
            return Err(format!("expected ',' between entries at {rest:?}"));
        }
    }
    Ok(field)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub x: i32,
    pub y: i32,
    pub tag: char,
}

/// Structured view of a game for rendering over JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub size: usize,
    pub player: Position,
    pub cells: Vec<CellSnapshot>,
    pub collected: u32,
    pub destroyed: u32,
    pub total_shots: u32,
    pub won: bool,
    pub lost: bool,
}

impl GameSnapshot {
    pub fn to_json(&self) -> GameResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            size: game.grid().size(),
            player: game.player_position(),
            cells: game
                .grid()
                .iter()
                .map(|(pos, entity)| CellSnapshot {
                    x: pos.x,
                    y: pos.y,
                    tag: entity.display(),
                })
                .collect(),
            collected: game.collected(),
            destroyed: game.destroyed(),
            total_shots: game.total_shots(),
            won: game.has_won(),
            lost: game.has_lost(),
        }
    }
}
