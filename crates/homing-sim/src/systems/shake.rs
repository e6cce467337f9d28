//! Screen shake after a hit.

use homing_core::constants::{SHAKE_AMOUNT, SHAKE_DURATION, SHAKE_SPEED};
use homing_core::state::ShakeOffset;

/// Time-driven camera offset.
///
/// The vertical offset follows the advancing clock. The horizontal offset is
/// computed from the shake duration, not the clock, so it holds one value for
/// the whole shake.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenShake {
    /// Time since the shake started.
    pub time: f32,
    /// Shake duration. Zero until the first hit.
    pub life: f32,
    pub offset: ShakeOffset,
}

impl ScreenShake {
    /// Restart the shake.
    pub fn trigger(&mut self) {
        self.life = SHAKE_DURATION;
        self.time = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.life > 0.0 && self.time <= self.life
    }

    /// Advance the shake clock by one tick and recompute the offset.
    pub fn advance(&mut self, dt: f32) {
        if !self.is_active() {
            self.offset = ShakeOffset::default();
            return;
        }

        self.time += dt;
        self.offset = ShakeOffset {
            x: ((self.life * SHAKE_SPEED * 2.0).cos() * SHAKE_AMOUNT / 4.0) as i32,
            y: ((self.time * SHAKE_SPEED).sin() * SHAKE_AMOUNT) as i32,
        };
    }
}
