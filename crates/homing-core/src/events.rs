//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::math::Vector2;

/// One-shot notifications for the presentation shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Missiles left the launcher this tick.
    Launch { count: u32 },
    /// A guided missile reached its target. Timeout detonations are silent.
    Impact { position: Vector2 },
}
