//! Simulation constants and tuning parameters.

use crate::math::Vector2;

// --- Timing ---

/// Fixed simulation tick in milliseconds (100 Hz).
pub const TICK_MILLIS: u64 = 10;

/// Seconds per tick.
pub const DT: f32 = TICK_MILLIS as f32 / 1000.0;

/// Longest real frame the frame driver will account for before dropping time.
pub const MAX_FRAME_MILLIS: u64 = 250;

// --- Playfield ---

/// Playfield width in pixels.
pub const PLAYFIELD_WIDTH: f32 = 800.0;

/// Playfield height in pixels.
pub const PLAYFIELD_HEIGHT: f32 = 600.0;

// --- Missile launch ---

/// Base launch speed (pixels/s).
pub const MISSILE_BASE_SPEED: f32 = 150.0;

/// Upper bound of the integer speed bonus added at launch (inclusive).
pub const MISSILE_SPEED_JITTER: i32 = 20;

/// Base guidance lifetime (seconds).
pub const MISSILE_BASE_LIFE: f32 = 5.0;

/// Scale of the random lifetime bonus, drawn as a fraction of this.
pub const MISSILE_LIFE_JITTER: f32 = 5.0;

/// Missiles launched by one burst trigger.
pub const BURST_COUNT: u32 = 32;

// --- Missile flight ---

/// Maximum steering rate (degrees per second).
pub const MISSILE_TURN_RATE_DEG: f32 = 200.0;

/// Squared distance to target at which a guided missile detonates.
pub const MISSILE_HIT_RADIUS_SQ: f32 = 5.0;

/// Per-tick velocity multiplier once ballistic.
pub const MISSILE_DRAG: f32 = 0.97;

/// Gravity vector, subtracted from velocity each ballistic tick (scaled by dt).
/// Negative y here accelerates the missile toward +y (down the screen).
pub const MISSILE_GRAVITY: Vector2 = Vector2::new(0.0, -480.0);

/// How long a ballistic missile falls before it self-destructs (seconds).
pub const MISSILE_DEAD_TIME: f32 = 2.0;

// --- Trail puffs ---

/// One in this many guided ticks emits a puff.
pub const TRAIL_EMIT_ODDS: i32 = 5;

pub const TRAIL_BASE_LIFE: f32 = 0.4;
pub const TRAIL_LIFE_JITTER: f32 = 1.2;

/// Heading jitter in whole degrees, either side.
pub const TRAIL_ANGLE_JITTER_DEG: i32 = 3;

/// Puff speed, multiplied by dt at spawn.
pub const TRAIL_SPEED: f32 = 32.0;

pub const TRAIL_DRAG: f32 = 0.98;

/// Negative y lifts smoke up the screen.
pub const TRAIL_FORCE: Vector2 = Vector2::new(0.0, -200.0);

// --- Sparks ---

/// Sparks spawned per detonation.
pub const SPARK_COUNT: u32 = 16;

pub const SPARK_BASE_SPEED: f32 = 80.0;

/// Upper bound of the integer speed bonus per spark (inclusive), keeping speed below 130.
pub const SPARK_SPEED_JITTER: i32 = 49;

pub const SPARK_BASE_LIFE: f32 = 0.9;
pub const SPARK_LIFE_JITTER: f32 = 0.5;

pub const SPARK_DRAG: f32 = 0.99;
pub const SPARK_FORCE: Vector2 = Vector2::new(0.0, 100.0);

// --- Screen shake ---

/// Shake duration after a hit (seconds).
pub const SHAKE_DURATION: f32 = 0.5;

/// Vertical amplitude in pixels. Horizontal uses a quarter of it.
pub const SHAKE_AMOUNT: f32 = 5.0;

/// Angular speed of the vertical wobble (radians per second).
pub const SHAKE_SPEED: f32 = 48.0;
