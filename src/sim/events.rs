//! Observable outcomes of ticks and commands
//!
//! Rejected transitions are not errors: they leave state untouched and are
//! reported here so hosts and tests can see what happened.

use serde::{Deserialize, Serialize};

use super::collision::Contact;

/// Why an enter-superposition request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Body is not on a platform or the floor
    Airborne,
    /// A superposition is already open
    AlreadyActive,
    /// Level is complete; only restart is accepted
    LevelWon,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    Jumped,
    /// Jump pressed while airborne, suspended, or after the win
    JumpRejected,
    /// Body touched down this tick after being airborne
    Landed { surface: Contact },
    SuperpositionEntered { facing: f32 },
    SuperpositionRejected { reason: RejectReason },
    /// Body teleported to the candidate at `index`
    Collapsed { index: usize },
    /// Selection point hit no candidate, or no superposition was open
    CollapseMissed,
    /// Goal reached on tick `ticks`
    Won { ticks: u64 },
    Restarted,
    /// Restart requested while still playing
    RestartRejected,
}

impl SimEvent {
    /// True for events that record a refused command
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            SimEvent::JumpRejected
                | SimEvent::SuperpositionRejected { .. }
                | SimEvent::CollapseMissed
                | SimEvent::RestartRejected
        )
    }
}
