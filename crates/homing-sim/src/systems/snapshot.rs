//! Snapshot system: queries the world and builds a `RenderSnapshot`.
//!
//! Read-only. It never modifies the world.

use hecs::World;

use homing_core::components::{Missile, Particle, Spark, Trail};
use homing_core::enums::FlightPhase;
use homing_core::events::SimEvent;
use homing_core::math::{rad_to_deg, Vector2, VectorExt};
use homing_core::state::*;
use homing_core::types::{Position, SimTime, Velocity};

/// Scene-level values that live on the engine rather than in the world.
pub struct SceneState {
    pub time: SimTime,
    pub pointer: Vector2,
    pub shake_offset: ShakeOffset,
    pub debug_overlay: bool,
    pub paused: bool,
}

/// Build a complete `RenderSnapshot` from the current world state.
pub fn build_snapshot(world: &World, scene: &SceneState, events: Vec<SimEvent>) -> RenderSnapshot {
    let missiles = build_missiles(world, scene.debug_overlay);
    let trails = build_trails(world);
    let sparks = build_sparks(world);

    let counts = EntityCounts {
        missiles: missiles.len() as u32,
        smoke: trails.len() as u32,
        sparks: sparks.len() as u32,
    };

    RenderSnapshot {
        time: scene.time,
        pointer: scene.pointer,
        missiles,
        trails,
        sparks,
        shake_offset: scene.shake_offset,
        debug_overlay: scene.debug_overlay,
        paused: scene.paused,
        events,
        counts,
    }
}

/// Missiles ordered by ascending x for draw order.
fn build_missiles(world: &World, debug_overlay: bool) -> Vec<MissileView> {
    let mut missiles: Vec<MissileView> = world
        .query::<(&Position, &Velocity, &Missile)>()
        .iter()
        .map(|(_, (pos, vel, missile))| MissileView {
            position: pos.0,
            velocity: vel.0,
            target: missile.target,
            life: missile.life,
            phase: FlightPhase::from_life(missile.life),
            debug: debug_overlay.then(|| MissileDebug {
                heading_deg: rad_to_deg(vel.0.heading()),
                aim_deg: rad_to_deg((missile.target - pos.0 - vel.0).heading()),
            }),
        })
        .collect();

    missiles.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
    missiles
}

fn build_trails(world: &World) -> Vec<TrailView> {
    world
        .query::<(&Position, &Particle, &Trail)>()
        .iter()
        .map(|(_, (pos, particle, _))| TrailView {
            position: pos.0,
            age_ratio: particle.age_ratio(),
        })
        .collect()
}

fn build_sparks(world: &World) -> Vec<SparkView> {
    world
        .query::<(&Position, &Velocity, &Spark)>()
        .iter()
        .map(|(_, (pos, vel, _))| SparkView {
            position: pos.0,
            velocity: vel.0,
        })
        .collect()
}
