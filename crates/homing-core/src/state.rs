//! Render snapshot: the complete visible state handed to the shell each frame.

use serde::{Deserialize, Serialize};

use crate::enums::FlightPhase;
use crate::events::SimEvent;
use crate::math::Vector2;
use crate::types::SimTime;

/// Read-only picture of the simulation after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub time: SimTime,
    /// Last accepted pointer position (playfield coordinates).
    pub pointer: Vector2,
    /// Missiles ordered by ascending x, for draw order.
    pub missiles: Vec<MissileView>,
    pub trails: Vec<TrailView>,
    pub sparks: Vec<SparkView>,
    pub shake_offset: ShakeOffset,
    pub debug_overlay: bool,
    pub paused: bool,
    pub events: Vec<SimEvent>,
    pub counts: EntityCounts,
}

/// A missile as the shell draws it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissileView {
    pub position: Vector2,
    pub velocity: Vector2,
    pub target: Vector2,
    /// Negative once ballistic; the shell picks the dead color from the sign.
    pub life: f32,
    pub phase: FlightPhase,
    /// Present only while the debug overlay is on.
    pub debug: Option<MissileDebug>,
}

/// Steering readout for the debug overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissileDebug {
    /// Current heading in degrees.
    pub heading_deg: f32,
    /// Angle of `target - position - velocity` in degrees.
    pub aim_deg: f32,
}

/// A smoke puff. Drawn larger as it ages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailView {
    pub position: Vector2,
    /// `time / life`, in `[0, 1]`.
    pub age_ratio: f32,
}

/// An explosion spark. Velocity gives the streak direction and length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SparkView {
    pub position: Vector2,
    pub velocity: Vector2,
}

/// Camera offset in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShakeOffset {
    pub x: i32,
    pub y: i32,
}

/// Pool sizes for the stats overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    pub missiles: u32,
    pub smoke: u32,
    pub sparks: u32,
}

impl RenderSnapshot {
    /// Convert a raw window point into playfield coordinates by undoing the shake.
    pub fn window_to_playfield(&self, window_point: Vector2) -> Vector2 {
        window_point - self.shake_offset.as_vector()
    }
}

impl ShakeOffset {
    pub fn as_vector(&self) -> Vector2 {
        Vector2::new(self.x as f32, self.y as f32)
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}
