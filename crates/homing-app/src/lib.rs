//! Headless runner for the homing missile simulation.
//!
//! Wires the simulation crates to a wall clock and a scripted pointer, in
//! place of a windowed presentation shell.

pub mod config;
pub mod game_loop;
