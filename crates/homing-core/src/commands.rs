//! Input supplied by the presentation shell, and programmatic commands.

use serde::{Deserialize, Serialize};

use crate::math::Vector2;

/// Held state of the pointer buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerButtons {
    /// Fires a single missile on press.
    pub primary: bool,
    /// Fires a burst on press.
    pub secondary: bool,
    /// Fires one missile every tick while held.
    pub auto_fire: bool,
}

/// Per-frame input, applied to every tick the frame runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Pointer in playfield coordinates.
    pub pointer: Vector2,
    pub buttons: PointerButtons,
    /// Held state of the debug overlay key; each press toggles the overlay.
    pub debug_key: bool,
}

/// Commands queued for processing at the next tick boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Launch one missile from the playfield center.
    FireMissile,
    /// Launch `count` missiles at once.
    FireBurst { count: u32 },
    /// Flip the debug overlay.
    ToggleDebug,
    /// Stop advancing the simulation.
    Pause,
    /// Continue after a pause.
    Resume,
}

impl InputFrame {
    /// Input with the pointer at `pointer` and nothing pressed.
    pub fn at(pointer: Vector2) -> Self {
        Self {
            pointer,
            ..Default::default()
        }
    }
}
