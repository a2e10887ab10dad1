//! Simulation driver
//!
//! Owns one level attempt: the level definition, tuning, live game state,
//! held input and the fixed-step accumulator. Hosts create one per game and
//! feed it frame deltas and intents; several can coexist.

use glam::Vec2;

use crate::error::ConfigurationError;
use crate::level::Level;
use crate::platform::input::Intent;
use crate::sim::{self, GameState, GameStatus, SimEvent, Snapshot, TickInput};
use crate::tuning::{StepMode, Tuning};

#[derive(Debug, Clone)]
pub struct Simulation {
    level: Level,
    tuning: Tuning,
    state: GameState,
    input: TickInput,
    accumulator: f32,
}

impl Simulation {
    /// Validate the configuration and build the initial state
    pub fn new(level: Level, tuning: Tuning) -> Result<Self, ConfigurationError> {
        level.validate()?;
        tuning.validate()?;
        level.check_reach(&tuning)?;
        log::info!(
            "Simulation created: {} platforms, step mode {}",
            level.platforms.len(),
            tuning.step_mode.as_str()
        );
        Ok(Self::build(level, tuning))
    }

    /// Built-in level with default tuning
    pub fn with_defaults() -> Self {
        Self::build(Level::default(), Tuning::default())
    }

    fn build(level: Level, tuning: Tuning) -> Self {
        let state = GameState::new(&level);
        Self {
            level,
            tuning,
            state,
            input: TickInput::default(),
            accumulator: 0.0,
        }
    }

    /// Advance by a host frame delta (seconds)
    ///
    /// In fixed mode this runs as many ticks as the accumulated time covers,
    /// capped at `max_substeps`. In frame-coupled mode it runs exactly one.
    pub fn step(&mut self, dt: f32) -> Vec<SimEvent> {
        let Some(tick_dt) = self.tuning.step_mode.tick_dt() else {
            return self.tick_once();
        };

        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.tuning.max_frame_dt)
        } else {
            0.0
        };
        self.accumulator += dt;

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= tick_dt && substeps < self.tuning.max_substeps {
            events.extend(self.tick_once());
            self.accumulator -= tick_dt;
            substeps += 1;
        }

        if substeps == self.tuning.max_substeps && self.accumulator >= tick_dt {
            log::warn!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        events
    }

    /// Run exactly one simulation tick
    pub fn tick_once(&mut self) -> Vec<SimEvent> {
        sim::tick(&mut self.state, &self.input, &self.tuning)
    }

    /// Switch stepping policy; any banked partial tick is dropped
    pub fn set_step_mode(&mut self, mode: StepMode) -> Result<(), ConfigurationError> {
        let tuning = Tuning {
            step_mode: mode,
            ..self.tuning.clone()
        };
        tuning.validate()?;
        log::info!("Step mode set to {}", mode.as_str());
        self.tuning = tuning;
        self.accumulator = 0.0;
        Ok(())
    }

    pub fn set_move_left(&mut self, held: bool) {
        self.input.move_left = held;
    }

    pub fn set_move_right(&mut self, held: bool) {
        self.input.move_right = held;
    }

    pub fn jump(&mut self) -> SimEvent {
        sim::jump(&mut self.state, &self.tuning)
    }

    /// Open a superposition, facing whichever way is held right now
    pub fn enter_superposition(&mut self) -> SimEvent {
        sim::enter_superposition(&mut self.state, &self.input, &self.tuning)
    }

    /// Collapse onto the ghost containing world point (x, y)
    pub fn select_at(&mut self, x: f32, y: f32) -> SimEvent {
        sim::select_at(&mut self.state, Vec2::new(x, y))
    }

    /// Rebuild every entity from the level; only accepted once won
    pub fn restart(&mut self) -> SimEvent {
        if self.state.status != GameStatus::Won {
            log::debug!("Restart rejected while playing");
            return SimEvent::RestartRejected;
        }
        self.reset();
        SimEvent::Restarted
    }

    /// Swap in a new level and restart on it
    pub fn restart_with(&mut self, level: Level) -> Result<SimEvent, ConfigurationError> {
        if self.state.status != GameStatus::Won {
            return Ok(SimEvent::RestartRejected);
        }
        level.validate()?;
        level.check_reach(&self.tuning)?;
        self.level = level;
        self.reset();
        Ok(SimEvent::Restarted)
    }

    fn reset(&mut self) {
        // Single assignment: no half-reset state is ever observable
        self.state = GameState::new(&self.level);
        self.accumulator = 0.0;
        self.input = TickInput::default();
        log::info!("Level restarted");
    }

    /// Route a mapped intent; held-state changes produce no event
    pub fn apply(&mut self, intent: Intent) -> Option<SimEvent> {
        match intent {
            Intent::MoveLeft(held) => {
                self.set_move_left(held);
                None
            }
            Intent::MoveRight(held) => {
                self.set_move_right(held);
                None
            }
            Intent::Jump => Some(self.jump()),
            Intent::EnterSuperposition => Some(self.enter_superposition()),
            Intent::SelectAt(point) => Some(self.select_at(point.x, point.y)),
            Intent::Restart => Some(self.restart()),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn input(&self) -> TickInput {
        self.input
    }

    pub fn step_mode(&self) -> StepMode {
        self.tuning.step_mode
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Goal;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn test_invalid_configuration_fails_fast() {
        let level = Level {
            platforms: Vec::new(),
            ..Level::default()
        };
        assert_eq!(
            Simulation::new(level, Tuning::default()).err(),
            Some(ConfigurationError::EmptyLevel)
        );

        let tuning = Tuning {
            gravity: 0.0,
            ..Tuning::default()
        };
        assert!(Simulation::new(Level::default(), tuning).is_err());
    }

    #[test]
    fn test_unreachable_goal_fails_fast() {
        let mut level = Level::default();
        // Hundreds of pixels above the ledge
        level.goal = Goal::new(720.0, 0.0, 40.0);
        assert_eq!(
            Simulation::new(level.clone(), Tuning::default()).err(),
            Some(ConfigurationError::UnreachableGoal { x: 720.0, y: 0.0 })
        );

        let mut sim = Simulation::with_defaults();
        sim.state.status = GameStatus::Won;
        assert!(sim.restart_with(level).is_err());
        assert_eq!(sim.level(), &Level::default());
    }

    #[test]
    fn test_set_step_mode() {
        let mut sim = Simulation::with_defaults();
        sim.step(FRAME / 2.0);
        sim.set_step_mode(StepMode::FrameCoupled).unwrap();
        sim.step(0.0);
        assert_eq!(sim.state().time_ticks, 1);

        assert!(sim.set_step_mode(StepMode::Fixed { hz: 0 }).is_err());
        assert_eq!(sim.step_mode(), StepMode::FrameCoupled);
    }

    #[test]
    fn test_fixed_step_runs_one_tick_per_frame_at_60hz() {
        let mut sim = Simulation::with_defaults();
        for _ in 0..10 {
            sim.step(FRAME);
        }
        assert_eq!(sim.state().time_ticks, 10);
    }

    #[test]
    fn test_fixed_step_is_rate_independent() {
        // 120 Hz host: two frames per tick
        let mut sim = Simulation::with_defaults();
        for _ in 0..20 {
            sim.step(FRAME / 2.0);
        }
        let ticks = sim.state().time_ticks;
        assert!((9..=10).contains(&ticks), "ran {} ticks", ticks);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut sim = Simulation::with_defaults();
        sim.step(5.0);
        // 0.1 s at 60 Hz
        assert!(sim.state().time_ticks <= 6);
        sim.step(f32::NAN);
        sim.step(-1.0);
        assert!(sim.state().time_ticks <= 6);
    }

    #[test]
    fn test_frame_coupled_ignores_dt() {
        let mut sim = Simulation::new(Level::default(), Tuning::frame_coupled()).unwrap();
        sim.step(0.5);
        sim.step(0.0);
        sim.step(0.001);
        assert_eq!(sim.state().time_ticks, 3);
    }

    #[test]
    fn test_restart_rejected_while_playing() {
        let mut sim = Simulation::with_defaults();
        sim.step(FRAME);
        let before = sim.state().clone();
        assert_eq!(sim.restart(), SimEvent::RestartRejected);
        assert_eq!(sim.state(), &before);
    }

    #[test]
    fn test_apply_routes_intents() {
        let mut sim = Simulation::with_defaults();
        assert_eq!(sim.apply(Intent::MoveRight(true)), None);
        assert!(sim.input().move_right);
        assert_eq!(sim.apply(Intent::Restart), Some(SimEvent::RestartRejected));
        assert_eq!(
            sim.apply(Intent::SelectAt(Vec2::new(1.0, 1.0))),
            Some(SimEvent::CollapseMissed)
        );
        assert_eq!(sim.apply(Intent::MoveRight(false)), None);
        assert!(!sim.input().move_right);
    }
}
