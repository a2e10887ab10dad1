//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (key codes, pointer positions)
//! - The browser binding (wasm32 only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{InputMapper, Intent, RawEvent};
