//! Aging and integration for trail puffs and sparks.
//!
//! Both kinds follow the same rule with their own drag and force:
//! age, drop if expired, otherwise `v = v * drag + force * dt` and `p += v * dt`.

use hecs::{Entity, World};

use homing_core::components::{Particle, Spark, Trail};
use homing_core::constants::{SPARK_DRAG, SPARK_FORCE, TRAIL_DRAG, TRAIL_FORCE};
use homing_core::math::Vector2;
use homing_core::types::{Position, Velocity};

/// Per-kind motion constants, keyed by the marker component.
pub trait ParticleKind: hecs::Component {
    /// Per-tick velocity multiplier on both axes.
    const DRAG: f32;
    /// Constant acceleration.
    const FORCE: Vector2;
}

impl ParticleKind for Trail {
    const DRAG: f32 = TRAIL_DRAG;
    const FORCE: Vector2 = TRAIL_FORCE;
}

impl ParticleKind for Spark {
    const DRAG: f32 = SPARK_DRAG;
    const FORCE: Vector2 = SPARK_FORCE;
}

/// Age every particle of kind `K` by `dt` and despawn the expired ones.
pub fn run<K: ParticleKind>(world: &mut World, dt: f32, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, vel, particle, _kind)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Particle, &K)>()
    {
        particle.time += dt;

        if particle.is_expired() {
            despawn_buffer.push(entity);
            continue;
        }

        vel.0 = vel.0 * K::DRAG + K::FORCE * dt;
        pos.0 += vel.0 * dt;
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Number of live particles of kind `K`.
pub fn count<K: ParticleKind>(world: &World) -> usize {
    world.query::<&K>().iter().count()
}
