//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::math::Vector2;

/// Homing missile state. Paired with `Position` and `Velocity`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Missile {
    /// Point the missile steered toward on its last guided tick.
    pub target: Vector2,
    /// Remaining guidance time in seconds. Goes negative once ballistic.
    pub life: f32,
}

/// Age tracking shared by trail puffs and sparks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Total lifetime in seconds.
    pub life: f32,
    /// Time lived so far.
    pub time: f32,
}

/// Marks a particle as a smoke puff left behind a guided missile.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Trail;

/// Marks a particle as an explosion spark.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Spark;

impl Particle {
    pub fn new(life: f32) -> Self {
        Self { life, time: 0.0 }
    }

    /// Fraction of lifetime elapsed, in `[0, 1]`.
    pub fn age_ratio(&self) -> f32 {
        if self.life <= 0.0 {
            return 1.0;
        }
        (self.time / self.life).clamp(0.0, 1.0)
    }

    pub fn is_expired(&self) -> bool {
        self.time >= self.life
    }
}
