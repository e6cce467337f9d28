//! Configuration errors. The simulation itself has no failure paths.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    ZeroTick,
    InvalidPlayfield { width: f32, height: f32 },
    FrameCapBelowTick { max_frame_ms: u128, tick_ms: u128 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTick => write!(f, "tick duration must be non-zero"),
            Self::InvalidPlayfield { width, height } => {
                write!(f, "playfield must be finite and positive, got {width}x{height}")
            }
            Self::FrameCapBelowTick {
                max_frame_ms,
                tick_ms,
            } => write!(
                f,
                "max frame time ({max_frame_ms} ms) is shorter than one tick ({tick_ms} ms)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
