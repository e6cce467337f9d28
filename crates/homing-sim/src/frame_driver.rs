//! Fixed-timestep frame driver.
//!
//! Each real frame adds its elapsed time to an accumulator and runs whole
//! ticks while the accumulator holds at least one. Physics runs at the tick
//! rate no matter how fast frames are drawn.

use std::time::Duration;

use homing_core::commands::InputFrame;
use homing_core::state::RenderSnapshot;

use crate::engine::{SimConfig, Simulation};

/// Accumulates real time and feeds the simulation fixed ticks.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    tick: Duration,
    max_frame_time: Duration,
    accumulator: Duration,
}

/// Result of one real frame.
#[derive(Debug, Clone)]
pub struct FrameOutput {
    /// State after the last tick, carrying the events of every tick this frame.
    pub snapshot: RenderSnapshot,
    pub ticks_run: u32,
    pub stats: FrameStats,
}

/// Frame timing readout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frame_ms: u32,
    pub fps: u32,
}

impl FrameStats {
    pub fn from_elapsed(elapsed: Duration) -> Self {
        let nanos = elapsed.as_nanos();
        Self {
            frame_ms: elapsed.as_millis() as u32,
            fps: if nanos > 0 {
                (1_000_000_000 / nanos) as u32
            } else {
                0
            },
        }
    }
}

impl FrameDriver {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            tick: config.tick,
            max_frame_time: config.max_frame_time,
            accumulator: Duration::ZERO,
        }
    }

    /// Account for `elapsed` real time and run as many ticks as it covers.
    ///
    /// Frames longer than `max_frame_time` are clamped so a stall does not
    /// turn into a burst of catch-up ticks.
    pub fn advance(
        &mut self,
        sim: &mut Simulation,
        elapsed: Duration,
        input: &InputFrame,
    ) -> FrameOutput {
        if elapsed > self.max_frame_time {
            tracing::debug!(
                elapsed_ms = elapsed.as_millis() as u64,
                "frame over budget, dropping time"
            );
        }
        self.accumulator += elapsed.min(self.max_frame_time);

        let dt = self.tick.as_secs_f32();
        let mut ticks_run = 0;
        let mut events = Vec::new();
        let mut last = None;

        while self.accumulator >= self.tick {
            let mut snapshot = sim.step(dt, input);
            events.append(&mut snapshot.events);
            last = Some(snapshot);

            self.accumulator -= self.tick;
            ticks_run += 1;
        }

        let mut snapshot = last.unwrap_or_else(|| sim.snapshot());
        snapshot.events = events;

        FrameOutput {
            snapshot,
            ticks_run,
            stats: FrameStats::from_elapsed(elapsed),
        }
    }

    /// Time carried over to the next frame.
    pub fn accumulated(&self) -> Duration {
        self.accumulator
    }
}
