/*
 * Error Module
 *
 * Errors for loading and validating simulation parameters. The simulation
 * step itself never fails; every numeric edge case is guarded in place.
 */

use std::path::PathBuf;
use thiserror::Error;

// A parameter value that cannot drive the simulation
#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("{name} must be greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("min_radius ({min}) must not exceed max_radius ({max})")]
    InvertedRadiusRange { min: f32, max: f32 },
    #[error("low_water_fps ({low}) must not exceed high_water_fps ({high})")]
    InvertedFpsBand { low: f32, high: f32 },
    #[error("initial_population ({initial}) exceeds max_population ({max})")]
    InitialPopulationTooLarge { initial: usize, max: usize },
    #[error("max_frame_delta_ms must not exceed {limit} ms, got {value}")]
    FrameDeltaTooLarge { value: f32, limit: f32 },
    #[error("trail_fade must lie in [0, 1], got {0}")]
    TrailFadeOutOfRange(f32),
}

// Failure to turn a parameter file into usable parameters
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read parameter file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed parameter JSON")]
    Json(#[from] serde_json::Error),
    #[error("invalid parameters: {0}")]
    Invalid(#[from] ParamsError),
}
