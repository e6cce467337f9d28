//! Turns held button state into per-tick triggers.
//!
//! Runs inside the fixed tick, so a held button fires once and burst
//! spawning follows the tick rate rather than the display rate.

use homing_core::commands::InputFrame;

/// Remembers which buttons were down on the previous tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputLatch {
    primary: bool,
    secondary: bool,
    debug_key: bool,
}

/// What the current tick's input asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Triggers {
    pub fire_single: bool,
    pub fire_burst: bool,
    pub toggle_debug: bool,
}

/// Returns true on the released-to-held transition and records the new state.
fn pressed(was_down: &mut bool, is_down: bool) -> bool {
    let edge = is_down && !*was_down;
    *was_down = is_down;
    edge
}

/// Evaluate `input` against the latch for one tick.
pub fn run(latch: &mut InputLatch, input: &InputFrame) -> Triggers {
    let primary = pressed(&mut latch.primary, input.buttons.primary);
    let fire_burst = pressed(&mut latch.secondary, input.buttons.secondary);
    let toggle_debug = pressed(&mut latch.debug_key, input.debug_key);

    Triggers {
        fire_single: primary || input.buttons.auto_fire,
        fire_burst,
        toggle_debug,
    }
}
