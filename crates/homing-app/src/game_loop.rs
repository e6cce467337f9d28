//! Real-time loop: measures frame time, scripts input, and drives the frame driver.
//!
//! Stands in for the windowed shell. The pointer sweeps a Lissajous curve
//! around the launcher and the buttons are pressed on fixed periods.

use std::time::{Duration, Instant};

use homing_core::commands::{InputFrame, PointerButtons};
use homing_core::error::ConfigError;
use homing_core::events::SimEvent;
use homing_core::math::Vector2;
use homing_core::state::RenderSnapshot;
use homing_sim::{FrameDriver, FrameOutput, Simulation};

use crate::config::RunnerConfig;

/// Interval between progress log lines, in simulated-frame time.
const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Totals collected over a run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub frames: u64,
    pub ticks: u64,
    pub missiles_launched: u64,
    pub impacts: u64,
    pub peak_missiles: u32,
    pub final_snapshot: RenderSnapshot,
}

impl RunSummary {
    fn record(&mut self, frame: &FrameOutput) {
        self.frames += 1;
        self.ticks += u64::from(frame.ticks_run);
        for event in &frame.snapshot.events {
            match event {
                SimEvent::Launch { count } => self.missiles_launched += u64::from(*count),
                SimEvent::Impact { .. } => self.impacts += 1,
            }
        }
        self.peak_missiles = self.peak_missiles.max(frame.snapshot.counts.missiles);
    }
}

/// Input for the frame ending `at` into the run.
pub fn scripted_input(at: Duration, config: &RunnerConfig) -> InputFrame {
    let t = at.as_secs_f32();
    let center = config.sim.playfield / 2.0;
    let sweep = Vector2::new((t * 0.7).cos() * center.x, (t * 1.3).sin() * center.y) * 0.6;

    InputFrame {
        pointer: center + sweep,
        buttons: PointerButtons {
            primary: config.fire_every.is_some_and(|p| in_first_half(at, p)),
            secondary: config.burst_every.is_some_and(|p| in_first_half(at, p)),
            auto_fire: false,
        },
        debug_key: false,
    }
}

/// Held during the first half of every `period`.
fn in_first_half(at: Duration, period: Duration) -> bool {
    let period = period.as_nanos();
    period > 0 && at.as_nanos() % period < period / 2
}

/// Drive the simulation with a sequence of real frame durations.
pub fn run_frames(
    sim: &mut Simulation,
    driver: &mut FrameDriver,
    config: &RunnerConfig,
    frame_times: impl IntoIterator<Item = Duration>,
) -> RunSummary {
    let mut summary = RunSummary::default();
    let mut clock = Duration::ZERO;
    let mut next_report = REPORT_INTERVAL;

    for elapsed in frame_times {
        clock += elapsed;
        let input = scripted_input(clock, config);
        let frame = driver.advance(sim, elapsed, &input);
        summary.record(&frame);

        if clock >= next_report {
            let counts = frame.snapshot.counts;
            tracing::info!(
                secs = clock.as_secs(),
                missiles = counts.missiles,
                smoke = counts.smoke,
                sparks = counts.sparks,
                frame_ms = frame.stats.frame_ms,
                fps = frame.stats.fps,
                "progress"
            );
            next_report += REPORT_INTERVAL;
        }

        summary.final_snapshot = frame.snapshot;
    }

    summary
}

/// Run against the wall clock for `config.run_for`, sleeping between frames.
pub fn run_realtime(config: &RunnerConfig) -> Result<RunSummary, ConfigError> {
    let mut sim = Simulation::try_new(config.sim.clone())?;
    let mut driver = FrameDriver::new(&config.sim);

    let start = Instant::now();
    let mut last_frame = start;
    let mut next_frame_time = start;
    let interval = config.frame_interval;
    let run_for = config.run_for;

    let frame_times = std::iter::from_fn(move || {
        next_frame_time += interval;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > interval * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_frame_time = now;
        }

        let now = Instant::now();
        if now - start >= run_for {
            return None;
        }
        let elapsed = now - last_frame;
        last_frame = now;
        Some(elapsed)
    });

    Ok(run_frames(&mut sim, &mut driver, config, frame_times))
}

#[cfg(test)]
mod tests {
    use super::*;
    use homing_sim::SimConfig;

    fn test_config() -> RunnerConfig {
        RunnerConfig {
            sim: SimConfig::seeded(2024),
            ..Default::default()
        }
    }

    #[test]
    fn test_simulated_run_totals() {
        let config = test_config();
        let mut sim = Simulation::new(config.sim.clone());
        let mut driver = FrameDriver::new(&config.sim);

        // 5 seconds of 20 ms frames.
        let frames = std::iter::repeat(Duration::from_millis(20)).take(250);
        let summary = run_frames(&mut sim, &mut driver, &config, frames);

        assert_eq!(summary.frames, 250);
        assert_eq!(summary.ticks, 500);
        assert_eq!(sim.time().tick, 500);
        // Presses land in the frames ending at 20 ms, 260 ms, 500 ms, ... 5000 ms,
        // and bursts in the frames ending at 20 ms and 4000 ms.
        assert_eq!(summary.missiles_launched, 21 + 2 * 32);
        assert!(summary.peak_missiles > 0);
    }

    #[test]
    fn test_same_seed_same_summary() {
        let config = test_config();
        let run = || {
            let mut sim = Simulation::new(config.sim.clone());
            let mut driver = FrameDriver::new(&config.sim);
            let frames = std::iter::repeat(Duration::from_millis(16)).take(300);
            run_frames(&mut sim, &mut driver, &config, frames)
        };

        let a = run();
        let b = run();
        assert_eq!(a.impacts, b.impacts);
        assert_eq!(
            serde_json::to_string(&a.final_snapshot).unwrap(),
            serde_json::to_string(&b.final_snapshot).unwrap()
        );
    }

    #[test]
    fn test_scripted_buttons_follow_periods() {
        let config = test_config();
        let early = scripted_input(Duration::from_millis(10), &config);
        assert!(early.buttons.primary);
        assert!(early.buttons.secondary);

        let later = scripted_input(Duration::from_millis(200), &config);
        assert!(!later.buttons.primary, "released in the second half of the period");
        assert!(later.buttons.secondary, "burst held for two seconds");
    }

    #[test]
    fn test_pointer_stays_on_playfield() {
        let config = test_config();
        for ms in (0..10_000).step_by(37) {
            let p = scripted_input(Duration::from_millis(ms), &config).pointer;
            assert!((0.0..=800.0).contains(&p.x) && (0.0..=600.0).contains(&p.y));
        }
    }
}
