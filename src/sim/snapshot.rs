//! Render snapshot handed to the host each frame
//!
//! A self-contained copy, so the host never borrows simulation state across
//! a tick.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::{GameState, GameStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub body: Rect,
    pub on_ground: bool,
    pub superposition: bool,
    /// Ghost boxes in candidate order, empty outside superposition
    pub ghosts: Vec<Rect>,
    pub goal: Rect,
    pub platforms: Vec<Rect>,
    pub status: GameStatus,
    pub ticks: u64,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            body: state.body.rect(),
            on_ground: state.body.on_ground,
            superposition: state.superposition.active,
            ghosts: state.superposition.ghost_rects(state.body.size),
            goal: state.goal.rect(),
            platforms: state.platforms.iter().map(|p| p.rect).collect(),
            status: state.status,
            ticks: state.time_ticks,
        }
    }

    pub fn to_json(&self) -> String {
        // Plain floats, bools and enums only; serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}
