//! Browser binding
//!
//! A thin `wasm-bindgen` wrapper: JS owns the canvas, the DOM listeners and
//! `requestAnimationFrame`, and forwards raw events and frame timestamps
//! here. Drawing is done in JS from the snapshot JSON.

use wasm_bindgen::prelude::*;

use super::input::{InputMapper, RawEvent};
use crate::level::Level;
use crate::runner::Simulation;
use crate::sim::SimEvent;
use crate::tuning::{StepMode, Tuning};

/// Game instance exported to JS
#[wasm_bindgen]
pub struct WebGame {
    sim: Simulation,
    mapper: InputMapper,
    last_time: f64,
    /// Events since the last `take_events` call
    events: Vec<SimEvent>,
}

#[wasm_bindgen]
impl WebGame {
    /// Built-in level, default tuning
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        init_logging();
        let sim = Simulation::with_defaults();
        let mapper = InputMapper::new(sim.level().world);
        Self {
            sim,
            mapper,
            last_time: 0.0,
            events: Vec::new(),
        }
    }

    /// Host-supplied level and tuning as JSON; an empty tuning string means defaults
    pub fn with_config(level_json: &str, tuning_json: &str) -> Result<WebGame, JsValue> {
        init_logging();
        let level = Level::from_json(level_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let tuning = if tuning_json.trim().is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json(tuning_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let sim = Simulation::new(level, tuning).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mapper = InputMapper::new(sim.level().world);
        Ok(Self {
            sim,
            mapper,
            last_time: 0.0,
            events: Vec::new(),
        })
    }

    /// Switch between "fixed" and "frame" stepping
    pub fn set_step_mode(&mut self, name: &str) -> Result<(), JsValue> {
        let mode = StepMode::from_str(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown step mode: {}", name)))?;
        self.sim
            .set_step_mode(mode)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Canvas client size changed
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.mapper.set_viewport(width, height);
    }

    pub fn key_down(&mut self, code: &str, repeat: bool) {
        self.route(RawEvent::KeyDown { code, repeat });
    }

    pub fn key_up(&mut self, code: &str) {
        self.route(RawEvent::KeyUp { code });
    }

    /// Pointer press in canvas client pixels
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.route(RawEvent::PointerDown { x, y });
    }

    /// Animation frame callback with the rAF timestamp (ms)
    pub fn frame(&mut self, time: f64) {
        let dt = if self.last_time > 0.0 {
            ((time - self.last_time) / 1000.0) as f32
        } else {
            0.0
        };
        self.last_time = time;
        let events = self.sim.step(dt);
        self.events.extend(events);
    }

    pub fn snapshot_json(&self) -> String {
        self.sim.snapshot().to_json()
    }

    /// Drain pending events as a JSON array
    pub fn take_events(&mut self) -> String {
        let events = std::mem::take(&mut self.events);
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn is_won(&self) -> bool {
        self.sim.state().is_won()
    }
}

impl WebGame {
    fn route(&mut self, event: RawEvent<'_>) {
        if let Some(intent) = self.mapper.map(event) {
            if let Some(outcome) = self.sim.apply(intent) {
                self.events.push(outcome);
            }
        }
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // Already initialised when a second game is created
    let _ = console_log::init_with_level(log::Level::Info);
}
