//! Systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! Per-tick scratch buffers are passed in by the engine.

pub mod input;
pub mod missiles;
pub mod particles;
pub mod shake;
pub mod snapshot;
