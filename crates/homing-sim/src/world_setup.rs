//! Entity spawn factories: missiles, trail puffs and explosion sparks.

use std::f32::consts::TAU;

use hecs::World;

use homing_core::components::{Missile, Particle, Spark, Trail};
use homing_core::constants::*;
use homing_core::math::{deg_to_rad, rad_to_deg, Vector2, VectorExt};
use homing_core::types::{Position, Velocity};

use crate::rng::RandomSource;

/// Launch one missile from the playfield center.
///
/// The launch direction comes from a random point in a box the size of the
/// playfield, centered on the launcher. The point is only used as a direction.
pub fn fire_missile(world: &mut World, rng: &mut RandomSource, playfield: Vector2) -> hecs::Entity {
    let center_x = (playfield.x / 2.0) as i32;
    let center_y = (playfield.y / 2.0) as i32;

    let rand_x = rng.int(-center_x, center_x) as f32;
    let rand_y = rng.int(-center_y, center_y) as f32;
    let rand_v = rng.int(0, MISSILE_SPEED_JITTER) as f32;
    let rand_l = rng.fraction() * MISSILE_LIFE_JITTER;

    let velocity = Vector2::new(rand_x, rand_y).with_distance(MISSILE_BASE_SPEED + rand_v);

    world.spawn((
        Position::new(center_x as f32, center_y as f32),
        Velocity(velocity),
        Missile {
            target: Vector2::ZERO,
            life: MISSILE_BASE_LIFE + rand_l,
        },
    ))
}

/// Spawn an evenly spaced ring of sparks at `position`.
///
/// One random rotation is shared by the whole ring; speed and lifetime vary
/// per spark.
pub fn spawn_explosion(world: &mut World, rng: &mut RandomSource, position: Vector2) {
    let step = TAU / SPARK_COUNT as f32;
    let max_offset_deg = (360 / SPARK_COUNT) as i32;
    let ring_offset = deg_to_rad(rng.int(0, max_offset_deg) as f32);

    for i in 0..SPARK_COUNT {
        let speed_bonus = rng.int(0, SPARK_SPEED_JITTER) as f32;
        let life = SPARK_BASE_LIFE + rng.fraction() * SPARK_LIFE_JITTER;

        let angle = i as f32 * step + ring_offset;
        let velocity = Vector2::from_heading(angle).with_distance(SPARK_BASE_SPEED + speed_bonus);

        world.spawn((Position(position), Velocity(velocity), Particle::new(life), Spark));
    }
}

/// Emit one smoke puff at `position` for a missile flying along `missile_velocity`.
///
/// The heading is mirrored and jittered a few degrees, and the speed is tiny,
/// so the puff lingers where it was dropped.
pub fn spawn_trail_puff(
    world: &mut World,
    rng: &mut RandomSource,
    position: Vector2,
    missile_velocity: Vector2,
    dt: f32,
) -> hecs::Entity {
    let life = TRAIL_BASE_LIFE + rng.fraction() * TRAIL_LIFE_JITTER;

    let mut heading_deg = rad_to_deg(missile_velocity.heading());
    heading_deg += rng.int(-TRAIL_ANGLE_JITTER_DEG, TRAIL_ANGLE_JITTER_DEG) as f32;

    let velocity = Vector2::from_heading(deg_to_rad(-heading_deg)).with_distance(TRAIL_SPEED * dt);

    world.spawn((
        Position(position),
        Velocity(velocity),
        Particle::new(life),
        Trail,
    ))
}
