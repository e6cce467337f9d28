use homing_app::config::RunnerConfig;
use homing_app::game_loop;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` directives when they parse, `info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()),
        )
        .init();

    let config = RunnerConfig::from_env();
    tracing::info!(
        seed = ?config.sim.seed,
        run_for = ?config.run_for,
        frame_interval = ?config.frame_interval,
        "starting homing run"
    );

    let summary = game_loop::run_realtime(&config)?;
    tracing::info!(
        frames = summary.frames,
        ticks = summary.ticks,
        launched = summary.missiles_launched,
        impacts = summary.impacts,
        peak_missiles = summary.peak_missiles,
        "run finished"
    );

    if config.dump_snapshot {
        println!("{}", serde_json::to_string_pretty(&summary.final_snapshot)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).to_string(), "info");
        assert_eq!(log_filter(Some("  ")).to_string(), "info");
    }

    #[test]
    fn test_log_filter_keeps_requested_level() {
        assert_eq!(log_filter(Some("debug")).to_string(), "debug");
        assert_eq!(
            log_filter(Some("homing_sim=debug")).to_string(),
            "homing_sim=debug"
        );
    }
}
