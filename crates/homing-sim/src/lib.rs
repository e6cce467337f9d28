//! Simulation engine for the homing missile toy.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces `RenderSnapshot`s for the presentation shell.

pub mod engine;
pub mod frame_driver;
pub mod guidance;
pub mod rng;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, Simulation};
pub use frame_driver::{FrameDriver, FrameOutput, FrameStats};
