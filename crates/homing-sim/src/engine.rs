//! Simulation engine: the core of the toy.
//!
//! `Simulation` owns the hecs world holding all three entity pools, applies
//! input and queued commands, runs the systems in order, and produces
//! `RenderSnapshot`s. Completely headless, so it can be tested directly.

use std::collections::VecDeque;
use std::time::Duration;

use hecs::World;

use homing_core::commands::{InputFrame, SimCommand};
use homing_core::components::{Spark, Trail};
use homing_core::constants::*;
use homing_core::error::ConfigError;
use homing_core::events::SimEvent;
use homing_core::math::Vector2;
use homing_core::state::RenderSnapshot;
use homing_core::types::SimTime;

use crate::rng::RandomSource;
use crate::systems;
use crate::systems::input::InputLatch;
use crate::systems::shake::ScreenShake;
use crate::systems::snapshot::SceneState;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// RNG seed. `None` seeds from OS entropy; `Some` makes runs reproducible.
    pub seed: Option<u64>,
    /// Playfield size in pixels. Missiles launch from its center.
    pub playfield: Vector2,
    /// Fixed tick length.
    pub tick: Duration,
    /// Real time beyond this per frame is dropped by the frame driver.
    pub max_frame_time: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            playfield: Vector2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
            tick: Duration::from_millis(TICK_MILLIS),
            max_frame_time: Duration::from_millis(MAX_FRAME_MILLIS),
        }
    }
}

impl SimConfig {
    /// Config with a fixed seed and defaults elsewhere.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick.is_zero() {
            return Err(ConfigError::ZeroTick);
        }
        let (width, height) = (self.playfield.x, self.playfield.y);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidPlayfield { width, height });
        }
        if self.max_frame_time < self.tick {
            return Err(ConfigError::FrameCapBelowTick {
                max_frame_ms: self.max_frame_time.as_millis(),
                tick_ms: self.tick.as_millis(),
            });
        }
        Ok(())
    }

    /// Tick length in seconds.
    pub fn dt(&self) -> f32 {
        self.tick.as_secs_f32()
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct Simulation {
    world: World,
    time: SimTime,
    rng: RandomSource,
    playfield: Vector2,
    pointer: Vector2,
    latch: InputLatch,
    shake: ScreenShake,
    debug_overlay: bool,
    paused: bool,
    command_queue: VecDeque<SimCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl Simulation {
    /// Create a simulation, falling back to the default config if `config` is invalid.
    pub fn new(config: SimConfig) -> Self {
        match Self::try_new(config) {
            Ok(sim) => sim,
            Err(e) => {
                tracing::warn!("invalid simulation config ({e}), using defaults");
                Self::build(SimConfig::default())
            }
        }
    }

    /// Create a simulation, rejecting an invalid config.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SimConfig) -> Self {
        tracing::debug!(seed = ?config.seed, "simulation created");
        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: RandomSource::new(config.seed),
            playfield: config.playfield,
            pointer: config.playfield / 2.0,
            latch: InputLatch::default(),
            shake: ScreenShake::default(),
            debug_overlay: false,
            paused: false,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick of `dt` seconds and return the resulting snapshot.
    ///
    /// A tick always runs to completion: commands, input, shake, missiles,
    /// trail puffs, then sparks.
    pub fn step(&mut self, dt: f32, input: &InputFrame) -> RenderSnapshot {
        self.process_commands();

        if !self.paused {
            self.apply_input(input);
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.scene(), events)
    }

    /// Build a snapshot of the current state without stepping.
    pub fn snapshot(&self) -> RenderSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.scene(), Vec::new())
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn debug_overlay(&self) -> bool {
        self.debug_overlay
    }

    pub fn shake(&self) -> &ScreenShake {
        &self.shake
    }

    /// Spawn a missile with fixed state (for tests that need known trajectories).
    #[cfg(test)]
    pub fn spawn_test_missile(
        &mut self,
        position: Vector2,
        velocity: Vector2,
        life: f32,
    ) -> hecs::Entity {
        use homing_core::components::Missile;
        use homing_core::types::{Position, Velocity};

        self.world.spawn((
            Position(position),
            Velocity(velocity),
            Missile {
                target: Vector2::ZERO,
                life,
            },
        ))
    }

    /// Mutable world access for test setup.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn scene(&self) -> SceneState {
        SceneState {
            time: self.time,
            pointer: self.pointer,
            shake_offset: self.shake.offset,
            debug_overlay: self.debug_overlay,
            paused: self.paused,
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::FireMissile => {
                if !self.paused {
                    self.fire(1);
                }
            }
            SimCommand::FireBurst { count } => {
                if !self.paused {
                    self.fire(count);
                }
            }
            SimCommand::ToggleDebug => {
                self.debug_overlay = !self.debug_overlay;
            }
            SimCommand::Pause => {
                self.paused = true;
            }
            SimCommand::Resume => {
                self.paused = false;
            }
        }
    }

    /// Take the pointer and fire triggers for this tick.
    fn apply_input(&mut self, input: &InputFrame) {
        if input.pointer.is_finite() {
            self.pointer = input.pointer;
        }

        let triggers = systems::input::run(&mut self.latch, input);

        if triggers.toggle_debug {
            self.debug_overlay = !self.debug_overlay;
        }
        if triggers.fire_single {
            self.fire(1);
        }
        if triggers.fire_burst {
            self.fire(BURST_COUNT);
        }
    }

    fn fire(&mut self, count: u32) {
        if count == 0 {
            return;
        }
        for _ in 0..count {
            world_setup::fire_missile(&mut self.world, &mut self.rng, self.playfield);
        }
        self.events.push(SimEvent::Launch { count });
        tracing::debug!(count, tick = self.time.tick, "missiles launched");
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Screen shake
        self.shake.advance(dt);
        // 2. Missiles (steering, fall, detonation)
        let report = systems::missiles::run(
            &mut self.world,
            &mut self.rng,
            self.pointer,
            dt,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        if report.hits > 0 {
            self.shake.trigger();
        }
        if report.hits + report.timeouts > 0 {
            tracing::debug!(
                hits = report.hits,
                timeouts = report.timeouts,
                tick = self.time.tick,
                "missile pass"
            );
        }
        // 3. Trail puffs
        systems::particles::run::<Trail>(&mut self.world, dt, &mut self.despawn_buffer);
        // 4. Sparks
        systems::particles::run::<Spark>(&mut self.world, dt, &mut self.despawn_buffer);
    }
}
