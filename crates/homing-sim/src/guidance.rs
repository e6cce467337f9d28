//! Steering for homing missiles.
//!
//! Missiles turn at a capped rate toward the pointer. Speed is never changed
//! by steering, only heading.

use homing_core::math::{deg_to_rad, rad_to_deg, Vector2, VectorExt};

/// Signed turn from `heading_deg` toward `target_deg`, wrapped into `[0, 360)`.
pub fn angular_delta(target_deg: f32, heading_deg: f32) -> f32 {
    let mut delta = target_deg - heading_deg;
    while delta < 0.0 {
        delta += 360.0;
    }
    delta
}

/// Rotate `velocity` toward `to_target` by at most `max_turn_deg` degrees.
///
/// Turns left when the target is less than 180° counter-clockwise, right when
/// more. A target exactly 180° behind is ambiguous and produces no turn.
/// The turn never overshoots the target heading.
pub fn steer(velocity: Vector2, to_target: Vector2, max_turn_deg: f32) -> Vector2 {
    let target_deg = rad_to_deg(to_target.heading());
    let mut heading_deg = rad_to_deg(velocity.heading());
    let delta = angular_delta(target_deg, heading_deg);

    if delta < 180.0 {
        heading_deg += max_turn_deg.min(delta);
    } else if delta > 180.0 {
        heading_deg -= max_turn_deg.min(360.0 - delta);
    }

    Vector2::from_heading(deg_to_rad(heading_deg)).with_distance(velocity.length())
}
