//! Level geometry
//!
//! A level is an ordered platform list, one goal and a spawn box inside a
//! fixed-size world. Platform order is collision priority. Levels are
//! validated once, before the first tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigurationError;
use crate::sim::geometry::{Goal, Platform, Rect};
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// World size; the bottom edge acts as a floor
    pub world: Vec2,
    pub platforms: Vec<Platform>,
    pub goal: Goal,
    /// Initial player box
    pub spawn: Rect,
}

impl Default for Level {
    /// The built-in level: two hops and a ledge too high to jump to
    fn default() -> Self {
        Self {
            world: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
            platforms: vec![
                Platform::new(0.0, 550.0, 300.0, 50.0),
                Platform::new(400.0, 450.0, 150.0, 20.0),
                Platform::new(620.0, 300.0, 180.0, 20.0),
            ],
            goal: Goal::new(720.0, 260.0, 40.0),
            spawn: Rect::new(50.0, 550.0 - PLAYER_SIZE, PLAYER_SIZE, PLAYER_SIZE),
        }
    }
}

impl Level {
    /// Parse a level from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let level: Level = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    pub fn world_rect(&self) -> Rect {
        Rect::from_pos_size(Vec2::ZERO, self.world)
    }

    /// Fail fast on geometry that can't be played
    ///
    /// Reachability depends on tuning and is checked by `check_reach`.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.world.is_finite() || self.world.x <= 0.0 || self.world.y <= 0.0 {
            return Err(ConfigurationError::InvalidWorld {
                width: self.world.x,
                height: self.world.y,
            });
        }

        if self.platforms.is_empty() {
            return Err(ConfigurationError::EmptyLevel);
        }

        for (index, platform) in self.platforms.iter().enumerate() {
            let rect = platform.rect;
            let reason = if !rect.is_finite() {
                Some("coordinates must be finite")
            } else if rect.size.x <= 0.0 {
                Some("width must be positive")
            } else if rect.size.y <= 0.0 {
                Some("height must be positive")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(ConfigurationError::InvalidPlatform {
                    index,
                    reason: reason.to_string(),
                });
            }
        }

        let world = self.world_rect();
        let goal = self.goal.rect();
        if !goal.is_finite() || self.goal.size <= 0.0 {
            return Err(ConfigurationError::InvalidGoal {
                reason: "size must be a positive number".into(),
            });
        }
        if !world.contains_rect(&goal) {
            return Err(ConfigurationError::InvalidGoal {
                reason: "goal lies outside the world".into(),
            });
        }

        if !self.spawn.is_finite() || self.spawn.size.x <= 0.0 || self.spawn.size.y <= 0.0 {
            return Err(ConfigurationError::SpawnOutOfBounds {
                reason: "spawn size must be positive".into(),
            });
        }
        if !world.contains_rect(&self.spawn) {
            return Err(ConfigurationError::SpawnOutOfBounds {
                reason: "spawn lies outside the world".into(),
            });
        }

        Ok(())
    }

    /// Check the goal is within reach of a surface under it
    ///
    /// The body standing on a supporting surface must be able to touch the
    /// goal at the top of its highest rise: a plain jump apex or the tallest
    /// leap offset, whichever is greater.
    pub fn check_reach(&self, tuning: &Tuning) -> Result<(), ConfigurationError> {
        let goal_bottom = self.goal.rect().bottom();
        let lowest_top = |surface: f32| surface - self.spawn.size.y - tuning.max_rise();
        if self.support_surfaces().any(|s| goal_bottom > lowest_top(s)) {
            return Ok(());
        }
        Err(ConfigurationError::UnreachableGoal {
            x: self.goal.pos.x,
            y: self.goal.pos.y,
        })
    }

    /// Surfaces at or below the goal that overlap it horizontally, floor included
    fn support_surfaces(&self) -> impl Iterator<Item = f32> + '_ {
        let goal = self.goal.rect();
        self.platforms
            .iter()
            .filter(move |p| goal.overlaps_x(&p.rect))
            .map(|p| p.surface())
            .chain(std::iter::once(self.world.y))
            .filter(move |&surface| goal.bottom() <= surface)
    }
}
