//! 2D vector helpers on top of `glam::Vec2`.
//!
//! glam already covers component-wise arithmetic, `length`, `length_squared`
//! and zero-guarded normalization (`normalize_or_zero`). The extension trait
//! adds the heading/magnitude operations the steering code is written in.

pub use glam::Vec2 as Vector2;

/// Heading and magnitude operations used by steering and particle spawning.
pub trait VectorExt: Sized {
    /// Unit vector `(cos, sin)` for an angle in radians.
    fn from_heading(radians: f32) -> Self;

    /// Two-argument arctangent of y over x, in `(-π, π]`. Zero for the zero vector.
    fn heading(&self) -> f32;

    /// Rescale to magnitude `distance`, keeping direction.
    ///
    /// A zero vector has no direction and is left at zero.
    fn set_distance(&mut self, distance: f32);

    /// By-value form of [`VectorExt::set_distance`].
    fn with_distance(mut self, distance: f32) -> Self {
        self.set_distance(distance);
        self
    }
}

impl VectorExt for Vector2 {
    fn from_heading(radians: f32) -> Self {
        Vector2::new(radians.cos(), radians.sin())
    }

    fn heading(&self) -> f32 {
        if self.x == 0.0 && self.y == 0.0 {
            return 0.0;
        }
        self.y.atan2(self.x)
    }

    fn set_distance(&mut self, distance: f32) {
        *self = self.normalize_or_zero() * distance;
    }
}

pub fn deg_to_rad(deg: f32) -> f32 {
    deg / 180.0 * std::f32::consts::PI
}

pub fn rad_to_deg(rad: f32) -> f32 {
    rad / std::f32::consts::PI * 180.0
}

/// Clamp `value` into `[min, max]`. NaN collapses to `min`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}
