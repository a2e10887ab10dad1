//! Quantum Leap - A 2D platformer with a superposition jump
//!
//! Core modules:
//! - `sim`: Deterministic simulation (body physics, platform collisions, superposition)
//! - `runner`: Fixed-timestep driver that owns one simulation instance
//! - `level`: Level geometry and validation
//! - `tuning`: Data-driven physics constants
//! - `platform`: Host input mapping and the browser binding

pub mod error;
pub mod level;
pub mod platform;
pub mod runner;
pub mod sim;
pub mod tuning;

pub use error::ConfigurationError;
pub use level::Level;
pub use runner::Simulation;
pub use tuning::{StepMode, Tuning};

/// Game configuration constants
pub mod consts {
    /// Virtual resolution the level geometry is authored in
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Player box
    pub const PLAYER_SIZE: f32 = 30.0;

    /// Physics defaults, applied once per tick
    pub const GRAVITY: f32 = 0.5;
    pub const MOVE_SPEED: f32 = 5.0;
    pub const JUMP_VELOCITY: f32 = -12.0;

    /// Leap offsets (forward distance, vertical displacement), in candidate order
    pub const LONG_LEAP: (f32, f32) = (250.0, -120.0);
    pub const HIGH_LEAP: (f32, f32) = (100.0, -180.0);
    pub const LOW_HOP: (f32, f32) = (100.0, -20.0);

    /// Number of ghost candidates offered per superposition
    pub const CANDIDATE_COUNT: usize = 3;

    /// Fixed simulation rate (matches the per-frame feel at 60 Hz)
    pub const SIM_HZ: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
