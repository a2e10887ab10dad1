//! Data-driven physics tuning
//!
//! Every constant the simulation applies per tick lives here so a host can
//! swap them without touching the sim. Defaults are tuned for one tick per 60 Hz frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigurationError;

/// How host frame deltas are turned into simulation ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StepMode {
    /// Accumulate real time and run one tick per `1 / hz` seconds
    Fixed { hz: u32 },
    /// One tick per `step` call, whatever the delta (frame-rate dependent)
    FrameCoupled,
}

impl Default for StepMode {
    fn default() -> Self {
        StepMode::Fixed { hz: SIM_HZ }
    }
}

impl StepMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepMode::Fixed { .. } => "fixed",
            StepMode::FrameCoupled => "frame",
        }
    }

    /// Parse a mode name; `fixed` uses the default rate
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fixed" => Some(StepMode::default()),
            "frame" | "frame-coupled" | "frame_coupled" => Some(StepMode::FrameCoupled),
            _ => None,
        }
    }

    /// Length of one tick in seconds, if the mode has one
    pub fn tick_dt(&self) -> Option<f32> {
        match self {
            StepMode::Fixed { hz } => Some(1.0 / *hz as f32),
            StepMode::FrameCoupled => None,
        }
    }
}

/// Physics constants and stepping policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to `dy` every airborne tick
    pub gravity: f32,
    /// Horizontal displacement per tick while a direction is held
    pub speed: f32,
    /// `dy` set by a jump (negative is up)
    pub jump: f32,
    /// Candidate offsets as (forward, vertical), forward is mirrored by facing
    pub leaps: [Vec2; CANDIDATE_COUNT],
    pub step_mode: StepMode,
    /// Cap on ticks run for a single host frame
    pub max_substeps: u32,
    /// Frame deltas above this are clamped (seconds)
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            speed: MOVE_SPEED,
            jump: JUMP_VELOCITY,
            leaps: [
                Vec2::new(LONG_LEAP.0, LONG_LEAP.1),
                Vec2::new(HIGH_LEAP.0, HIGH_LEAP.1),
                Vec2::new(LOW_HOP.0, LOW_HOP.1),
            ],
            step_mode: StepMode::default(),
            max_substeps: MAX_SUBSTEPS,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Tuning {
    /// One tick per host frame, whatever the frame rate
    pub fn frame_coupled() -> Self {
        Self {
            step_mode: StepMode::FrameCoupled,
            ..Self::default()
        }
    }

    /// Highest the body's bottom can rise above the surface it stands on
    ///
    /// The larger of the continuous jump apex `jump² / 2g` and the tallest
    /// leap offset. The discrete apex is slightly lower, so this never
    /// underestimates.
    pub fn max_rise(&self) -> f32 {
        let jump_apex = self.jump * self.jump / (2.0 * self.gravity);
        let leap_rise = self.leaps.iter().map(|l| -l.y).fold(0.0, f32::max);
        jump_apex.max(leap_rise)
    }

    /// Parse tuning from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would make the simulation meaningless
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let invalid = |field: &'static str, reason: &str| ConfigurationError::InvalidTuning {
            field,
            reason: reason.to_string(),
        };

        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(invalid("gravity", "must be a positive number"));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(invalid("speed", "must be a non-negative number"));
        }
        if !self.jump.is_finite() || self.jump >= 0.0 {
            return Err(invalid("jump", "must be negative (up is -y)"));
        }
        if self.leaps.iter().any(|l| !l.is_finite()) {
            return Err(invalid("leaps", "offsets must be finite"));
        }
        if let StepMode::Fixed { hz: 0 } = self.step_mode {
            return Err(invalid("step_mode", "fixed rate must be at least 1 Hz"));
        }
        if self.max_substeps == 0 {
            return Err(invalid("max_substeps", "must be at least 1"));
        }
        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            return Err(invalid("max_frame_dt", "must be a positive number"));
        }
        Ok(())
    }
}
