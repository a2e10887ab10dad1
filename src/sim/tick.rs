//! Simulation tick and player commands
//!
//! `tick` advances the state by exactly one step. Commands (jump, enter
//! superposition, select) are applied immediately when issued and report
//! their outcome as a `SimEvent`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::integrate;
use super::events::{RejectReason, SimEvent};
use super::state::{GameState, GameStatus};
use crate::tuning::Tuning;

/// Held input sampled every tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

impl TickInput {
    /// -1, 0 or +1; holding both directions cancels out
    pub fn direction(&self) -> f32 {
        match (self.move_left, self.move_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    /// Facing for a superposition entered now (right unless left is held)
    pub fn facing(&self) -> f32 {
        if self.direction() < 0.0 { -1.0 } else { 1.0 }
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) -> Vec<SimEvent> {
    let mut events = Vec::new();

    // Frozen until restart
    if state.is_won() {
        return events;
    }

    state.time_ticks += 1;

    if !state.is_suspended() {
        let body = &mut state.body;
        body.vel.x = input.direction() * tuning.speed;

        let was_grounded = body.on_ground;
        let contact = integrate(body, &state.platforms, state.world.y, tuning.gravity);
        if contact.is_grounded() && !was_grounded {
            log::debug!("Landed on {:?} at ({}, {})", contact, body.pos.x, body.pos.y);
            events.push(SimEvent::Landed { surface: contact });
        }
    }

    if state.body.rect().overlaps(&state.goal.rect()) {
        state.status = GameStatus::Won;
        log::info!("Goal reached on tick {}", state.time_ticks);
        events.push(SimEvent::Won {
            ticks: state.time_ticks,
        });
    }

    events
}

/// Jump if grounded and not in superposition
pub fn jump(state: &mut GameState, tuning: &Tuning) -> SimEvent {
    if state.is_won() || state.is_suspended() || !state.body.on_ground {
        log::debug!("Jump rejected");
        return SimEvent::JumpRejected;
    }
    state.body.vel.y = tuning.jump;
    SimEvent::Jumped
}

/// Open a superposition, capturing facing from the held input
pub fn enter_superposition(state: &mut GameState, input: &TickInput, tuning: &Tuning) -> SimEvent {
    if state.is_won() {
        return SimEvent::SuperpositionRejected {
            reason: RejectReason::LevelWon,
        };
    }

    let facing = input.facing();
    match state.superposition.enter(&state.body, facing, &tuning.leaps) {
        Ok(()) => {
            log::debug!(
                "Superposition entered facing {} with candidates {:?}",
                facing,
                state.superposition.candidates
            );
            SimEvent::SuperpositionEntered { facing }
        }
        Err(reason) => {
            log::debug!("Superposition rejected: {:?}", reason);
            SimEvent::SuperpositionRejected { reason }
        }
    }
}

/// Collapse onto the ghost under `point`
pub fn select_at(state: &mut GameState, point: Vec2) -> SimEvent {
    if state.is_won() {
        return SimEvent::CollapseMissed;
    }
    match state.superposition.collapse(&mut state.body, point) {
        Some(index) => {
            log::debug!("Collapsed to candidate {} at {:?}", index, state.body.pos);
            SimEvent::Collapsed { index }
        }
        None => SimEvent::CollapseMissed,
    }
}
