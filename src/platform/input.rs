//! Raw host events to gameplay intents
//!
//! The simulation never sees key codes or pointer coordinates in screen
//! space. Hosts forward their raw events here and pass the resulting
//! `Intent`s to `Simulation::apply`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};

/// A gameplay intent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    /// Held state changed
    MoveLeft(bool),
    MoveRight(bool),
    Jump,
    EnterSuperposition,
    /// Select a ghost at a point in world coordinates
    SelectAt(Vec2),
    Restart,
}

/// Raw event as delivered by a host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawEvent<'a> {
    /// `code` uses DOM `KeyboardEvent.code` names ("ArrowLeft", "KeyA", ...)
    KeyDown { code: &'a str, repeat: bool },
    KeyUp { code: &'a str },
    /// Pointer press in viewport pixels
    PointerDown { x: f32, y: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Left,
    Right,
    Jump,
    Superpose,
    Restart,
}

fn action_for(code: &str) -> Option<Action> {
    match code {
        "ArrowLeft" | "KeyA" => Some(Action::Left),
        "ArrowRight" | "KeyD" => Some(Action::Right),
        "Space" | "ArrowUp" | "KeyW" => Some(Action::Jump),
        "KeyQ" | "ShiftLeft" | "ShiftRight" => Some(Action::Superpose),
        "KeyR" | "Enter" => Some(Action::Restart),
        _ => None,
    }
}

/// Maps raw events to intents, scaling pointer positions into world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputMapper {
    viewport: Vec2,
    world: Vec2,
}

impl Default for InputMapper {
    fn default() -> Self {
        let world = Vec2::new(WORLD_WIDTH, WORLD_HEIGHT);
        Self {
            viewport: world,
            world,
        }
    }
}

impl InputMapper {
    pub fn new(world: Vec2) -> Self {
        Self {
            viewport: world,
            world,
        }
    }

    /// Update the on-screen size of the world (after a resize)
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = Vec2::new(width, height);
        }
    }

    /// Convert a viewport pixel to world units
    pub fn screen_to_world(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y) * self.world / self.viewport
    }

    pub fn map(&self, event: RawEvent<'_>) -> Option<Intent> {
        match event {
            RawEvent::KeyDown { code, repeat } => match action_for(code)? {
                Action::Left => Some(Intent::MoveLeft(true)),
                Action::Right => Some(Intent::MoveRight(true)),
                // Auto-repeat must not re-fire one-shot commands
                _ if repeat => None,
                Action::Jump => Some(Intent::Jump),
                Action::Superpose => Some(Intent::EnterSuperposition),
                Action::Restart => Some(Intent::Restart),
            },
            RawEvent::KeyUp { code } => match action_for(code)? {
                Action::Left => Some(Intent::MoveLeft(false)),
                Action::Right => Some(Intent::MoveRight(false)),
                _ => None,
            },
            RawEvent::PointerDown { x, y } => Some(Intent::SelectAt(self.screen_to_world(x, y))),
        }
    }
}
