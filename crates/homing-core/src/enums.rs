//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Flight phase of a missile, derived from its remaining life.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightPhase {
    /// Steering toward the pointer (`life > 0`).
    #[default]
    Guided,
    /// Free-falling under drag and gravity (`life <= 0`).
    Ballistic,
}

impl FlightPhase {
    pub fn from_life(life: f32) -> Self {
        if life > 0.0 {
            Self::Guided
        } else {
            Self::Ballistic
        }
    }
}

/// Why a missile detonated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetonationCause {
    /// Reached the target while guided.
    Hit,
    /// Fell for longer than the dead time after guidance ran out.
    Timeout,
}
