//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`. It is rebuilt
//! wholesale from a `Level` on restart.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Goal, Platform, Rect};
use super::superposition::Superposition;
use crate::level::Level;

/// Status of the current level attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Simulation running
    #[default]
    Playing,
    /// Goal reached, simulation frozen until restart
    Won,
}

/// The player's kinematic body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// (dx, dy), applied once per tick
    pub vel: Vec2,
    /// Bottom edge rests on a platform top or the floor, as of the last resolve
    pub on_ground: bool,
}

impl Body {
    pub fn new(spawn: Rect) -> Self {
        Self {
            pos: spawn.pos,
            size: spawn.size,
            vel: Vec2::ZERO,
            on_ground: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Move the body without sweeping; grounding is recomputed next resolve
    pub fn teleport(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel.y = 0.0;
        self.on_ground = false;
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    pub body: Body,
    /// Declaration order is collision priority
    pub platforms: Vec<Platform>,
    pub goal: Goal,
    pub superposition: Superposition,
    /// World size; the bottom edge is a solid floor
    pub world: Vec2,
    /// Simulation tick counter (ticks that ran physics or were suspended)
    pub time_ticks: u64,
}

impl GameState {
    /// Create the initial state for a level
    pub fn new(level: &Level) -> Self {
        Self {
            status: GameStatus::Playing,
            body: Body::new(level.spawn),
            platforms: level.platforms.clone(),
            goal: level.goal,
            superposition: Superposition::default(),
            world: level.world,
            time_ticks: 0,
        }
    }

    #[inline]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Motion integration is paused while a superposition is open
    #[inline]
    pub fn is_suspended(&self) -> bool {
        self.superposition.active
    }
}
