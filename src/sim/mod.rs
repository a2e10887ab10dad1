//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick applies the tuning constants exactly once
//! - Stable iteration order (platforms and candidates in declaration order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod events;
pub mod geometry;
pub mod snapshot;
pub mod state;
pub mod superposition;
pub mod tick;

pub use collision::{Contact, crosses_surface, integrate};
pub use events::{RejectReason, SimEvent};
pub use geometry::{Goal, Platform, Rect};
pub use snapshot::Snapshot;
pub use state::{Body, GameState, GameStatus};
pub use superposition::{Superposition, candidates_for};
pub use tick::{TickInput, enter_superposition, jump, select_at, tick};
