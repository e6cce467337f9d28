//! Runner configuration read from the environment.

use std::env;
use std::time::Duration;

use homing_sim::SimConfig;

pub(crate) const DEFAULT_RUN_SECS: u64 = 10;
pub(crate) const DEFAULT_FRAME_MS: u64 = 16;
pub(crate) const DEFAULT_FIRE_EVERY_MS: u64 = 250;
pub(crate) const DEFAULT_BURST_EVERY_SECS: u64 = 4;

/// How the headless runner drives the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    pub sim: SimConfig,
    /// Wall-clock length of the run.
    pub run_for: Duration,
    /// Target real frame interval.
    pub frame_interval: Duration,
    /// Period of the scripted primary-button press. `None` never fires singles.
    pub fire_every: Option<Duration>,
    /// Period of the scripted burst press. `None` never bursts.
    pub burst_every: Option<Duration>,
    /// Print the final snapshot as JSON on exit.
    pub dump_snapshot: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            run_for: Duration::from_secs(DEFAULT_RUN_SECS),
            frame_interval: Duration::from_millis(DEFAULT_FRAME_MS),
            fire_every: Some(Duration::from_millis(DEFAULT_FIRE_EVERY_MS)),
            burst_every: Some(Duration::from_secs(DEFAULT_BURST_EVERY_SECS)),
            dump_snapshot: false,
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable values fall back to defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("HOMING_SEED").and_then(|raw| parse_or_warn::<u64>("HOMING_SEED", &raw));

        let run_secs = read_u64(&lookup, "HOMING_RUN_SECS", DEFAULT_RUN_SECS);
        let mut frame_ms = read_u64(&lookup, "HOMING_FRAME_MS", DEFAULT_FRAME_MS);
        if frame_ms == 0 {
            tracing::warn!("HOMING_FRAME_MS must be positive. Falling back to {DEFAULT_FRAME_MS}.");
            frame_ms = DEFAULT_FRAME_MS;
        }
        let fire_ms = read_u64(&lookup, "HOMING_FIRE_EVERY_MS", DEFAULT_FIRE_EVERY_MS);
        let burst_secs = read_u64(&lookup, "HOMING_BURST_EVERY_SECS", DEFAULT_BURST_EVERY_SECS);
        let dump_snapshot = lookup("HOMING_DUMP_SNAPSHOT")
            .map(|raw| matches!(raw.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            sim: SimConfig {
                seed,
                ..SimConfig::default()
            },
            run_for: Duration::from_secs(run_secs),
            frame_interval: Duration::from_millis(frame_ms),
            fire_every: (fire_ms > 0).then(|| Duration::from_millis(fire_ms)),
            burst_every: (burst_secs > 0).then(|| Duration::from_secs(burst_secs)),
            dump_snapshot,
        }
    }
}

fn read_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    lookup(key)
        .and_then(|raw| parse_or_warn(key, &raw))
        .unwrap_or(default)
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, raw: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("{key}={raw:?} is not a valid number. Using the default.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = RunnerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, RunnerConfig::default());
        assert_eq!(config.sim.seed, None);
    }

    #[test]
    fn test_values_are_read() {
        let config = RunnerConfig::from_lookup(lookup_from(&[
            ("HOMING_SEED", "99"),
            ("HOMING_RUN_SECS", "3"),
            ("HOMING_FRAME_MS", "8"),
            ("HOMING_FIRE_EVERY_MS", "0"),
            ("HOMING_BURST_EVERY_SECS", "2"),
            ("HOMING_DUMP_SNAPSHOT", "true"),
        ]));
        assert_eq!(config.sim.seed, Some(99));
        assert_eq!(config.run_for, Duration::from_secs(3));
        assert_eq!(config.frame_interval, Duration::from_millis(8));
        assert_eq!(config.fire_every, None);
        assert_eq!(config.burst_every, Some(Duration::from_secs(2)));
        assert!(config.dump_snapshot);
    }

    #[test]
    fn test_garbage_falls_back() {
        let config = RunnerConfig::from_lookup(lookup_from(&[
            ("HOMING_SEED", "abc"),
            ("HOMING_FRAME_MS", "0"),
            ("HOMING_RUN_SECS", "-4"),
        ]));
        assert_eq!(config.sim.seed, None);
        assert_eq!(config.frame_interval, Duration::from_millis(DEFAULT_FRAME_MS));
        assert_eq!(config.run_for, Duration::from_secs(DEFAULT_RUN_SECS));
    }
}
