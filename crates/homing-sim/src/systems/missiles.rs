//! Missile flight: aging, guided steering, ballistic fall and detonation.

use hecs::{Entity, World};

use homing_core::components::Missile;
use homing_core::constants::*;
use homing_core::enums::DetonationCause;
use homing_core::events::SimEvent;
use homing_core::math::Vector2;
use homing_core::types::{Position, Velocity};

use crate::guidance;
use crate::rng::RandomSource;
use crate::world_setup;

/// Result of advancing a single missile by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MissileOutcome {
    /// Still guided. Carries the pre-steering velocity when a puff should be emitted.
    Guided { puff: Option<Vector2> },
    /// Out of guidance time and falling.
    Ballistic,
    /// Remove the missile and spawn an explosion where it stands.
    Detonate(DetonationCause),
}

/// Summary of one missile pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissileReport {
    pub hits: u32,
    pub timeouts: u32,
}

/// Advance one missile by `dt` toward `pointer`.
pub fn advance(
    pos: &mut Position,
    vel: &mut Velocity,
    missile: &mut Missile,
    pointer: Vector2,
    dt: f32,
    rng: &mut RandomSource,
) -> MissileOutcome {
    missile.life -= dt;

    if missile.life < -MISSILE_DEAD_TIME {
        return MissileOutcome::Detonate(DetonationCause::Timeout);
    }

    if missile.life <= 0.0 {
        vel.0 *= MISSILE_DRAG;
        vel.0 -= MISSILE_GRAVITY * dt;
        pos.0 += vel.0 * dt;
        return MissileOutcome::Ballistic;
    }

    missile.target = pointer;
    pos.0 += vel.0 * dt;

    let diff = missile.target - pos.0;
    if diff.length_squared() <= MISSILE_HIT_RADIUS_SQ {
        return MissileOutcome::Detonate(DetonationCause::Hit);
    }

    let puff = rng.one_in(TRAIL_EMIT_ODDS).then_some(vel.0);

    vel.0 = guidance::steer(vel.0, diff, MISSILE_TURN_RATE_DEG * dt);

    MissileOutcome::Guided { puff }
}

/// Run the missile system for one tick.
///
/// Detonated missiles are despawned, sparks and puffs are spawned after the
/// pass, and each hit raises an `Impact` event.
pub fn run(
    world: &mut World,
    rng: &mut RandomSource,
    pointer: Vector2,
    dt: f32,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) -> MissileReport {
    despawn_buffer.clear();

    let mut report = MissileReport::default();
    let mut detonations: Vec<(Vector2, DetonationCause)> = Vec::new();
    let mut puffs: Vec<(Vector2, Vector2)> = Vec::new();

    for (entity, (pos, vel, missile)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Missile)>()
    {
        match advance(pos, vel, missile, pointer, dt, rng) {
            MissileOutcome::Guided { puff: Some(heading) } => puffs.push((pos.0, heading)),
            MissileOutcome::Guided { puff: None } | MissileOutcome::Ballistic => {}
            MissileOutcome::Detonate(cause) => {
                detonations.push((pos.0, cause));
                despawn_buffer.push(entity);
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for (position, heading) in puffs {
        world_setup::spawn_trail_puff(world, rng, position, heading, dt);
    }

    for (position, cause) in detonations {
        world_setup::spawn_explosion(world, rng, position);

        match cause {
            DetonationCause::Hit => {
                report.hits += 1;
                events.push(SimEvent::Impact { position });
            }
            DetonationCause::Timeout => report.timeouts += 1,
        }
        tracing::debug!(?cause, x = position.x, y = position.y, "missile detonated");
    }

    report
}
