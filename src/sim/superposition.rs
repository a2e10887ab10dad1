//! Superposition: the quantum leap mechanic
//!
//! While grounded the player can open a superposition. Body physics is
//! suspended and a fixed menu of ghost destinations is offered; selecting a
//! point inside one collapses the body there. Candidates are computed once on
//! entry and never recomputed while open.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::events::RejectReason;
use super::geometry::Rect;
use super::state::Body;
use crate::consts::CANDIDATE_COUNT;

/// Open/closed superposition and its ghost candidates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Superposition {
    pub active: bool,
    /// Facing captured at entry (+1 right, -1 left)
    pub facing: f32,
    /// Empty iff not active. Order: long leap, high leap, low hop
    pub candidates: Vec<Vec2>,
}

impl Default for Superposition {
    fn default() -> Self {
        Self {
            active: false,
            facing: 1.0,
            candidates: Vec::new(),
        }
    }
}

/// Ghost positions for a body at `pos` facing `facing`
///
/// Each leap is (forward, vertical); forward is mirrored by facing.
pub fn candidates_for(pos: Vec2, facing: f32, leaps: &[Vec2; CANDIDATE_COUNT]) -> Vec<Vec2> {
    leaps
        .iter()
        .map(|leap| Vec2::new(pos.x + leap.x * facing, pos.y + leap.y))
        .collect()
}

impl Superposition {
    /// Open a superposition for a grounded body
    ///
    /// Leaves `self` untouched on rejection.
    pub fn enter(
        &mut self,
        body: &Body,
        facing: f32,
        leaps: &[Vec2; CANDIDATE_COUNT],
    ) -> Result<(), RejectReason> {
        if self.active {
            return Err(RejectReason::AlreadyActive);
        }
        if !body.on_ground {
            return Err(RejectReason::Airborne);
        }

        self.active = true;
        self.facing = facing;
        self.candidates = candidates_for(body.pos, facing, leaps);
        Ok(())
    }

    /// Index of the first candidate whose body-sized box contains `point`
    ///
    /// First match in generated order, not the closest.
    pub fn pick(&self, point: Vec2, body_size: Vec2) -> Option<usize> {
        self.candidates
            .iter()
            .position(|&c| Rect::from_pos_size(c, body_size).contains_point(point))
    }

    /// Commit to the candidate under `point`, teleporting the body
    ///
    /// A miss keeps the superposition open.
    pub fn collapse(&mut self, body: &mut Body, point: Vec2) -> Option<usize> {
        if !self.active {
            return None;
        }
        let index = self.pick(point, body.size)?;
        body.teleport(self.candidates[index]);
        self.active = false;
        self.candidates.clear();
        Some(index)
    }

    /// Candidate boxes for rendering and hit-testing
    pub fn ghost_rects(&self, body_size: Vec2) -> Vec<Rect> {
        self.candidates
            .iter()
            .map(|&c| Rect::from_pos_size(c, body_size))
            .collect()
    }
}
