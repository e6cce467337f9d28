//! Core types and definitions for the homing missile simulation.
//!
//! This crate defines the vocabulary shared by the other crates:
//! vector math, components, commands, render snapshots, events, and constants.
//! It has no dependency on any windowing or runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod math;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
