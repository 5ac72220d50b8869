/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * tunable constants of the simulation. Defaults reproduce the classic
 * flock; any subset can be overridden from a JSON file, and the steering
 * factors can be adjusted live from the control panel.
 */

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ParamsError};

// Environment variable naming an optional JSON parameter file
pub const CONFIG_ENV_VAR: &str = "BOIDS_CONFIG";

// Longest frame delta the controller will ever integrate over, in milliseconds
pub const FRAME_DELTA_LIMIT_MS: f32 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Agents created when the simulation starts.
    pub initial_population: usize,
    /// Hard cap the population controller never grows past.
    pub max_population: usize,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Slowest possible agent, in world units per second.
    pub min_speed: f32,
    /// Width of the uniform speed range above `min_speed`.
    pub speed_spread: f32,
    /// Amplitude of the wander drift added to every step.
    pub wander_radius: f32,
    /// Rate at which the wander heading random-walks, radians per second.
    pub wander_speed: f32,
    /// Extra reach, beyond both radii, within which a neighbor is spotted.
    pub sight_range: f32,
    pub alignment_factor: f32,
    pub cohesion_factor: f32,
    pub separation_factor: f32,
    /// Extra reach, beyond both radii, within which a neighbor is too close.
    pub separation_distance: f32,
    /// Above this FPS estimate the population grows by one.
    pub high_water_fps: f32,
    /// Below this FPS estimate the population shrinks by one.
    pub low_water_fps: f32,
    /// Upper clamp on the measured frame delta, in milliseconds.
    pub max_frame_delta_ms: f32,
    /// Alpha of the black rectangle drawn over the previous frame.
    pub trail_fade: f32,
    pub show_fps: bool,
    pub show_controls: bool,
    pub pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            initial_population: 10,
            max_population: 500,
            min_radius: 2.0,
            max_radius: 10.0,
            min_speed: 200.0,
            speed_spread: 20.0,
            wander_radius: 6.0,
            wander_speed: 40.0,
            sight_range: 150.0,
            alignment_factor: 0.01,
            cohesion_factor: 0.02,
            separation_factor: 80.0,
            separation_distance: 200.0,
            high_water_fps: 60.0,
            low_water_fps: 50.0,
            max_frame_delta_ms: 20.0,
            trail_fade: 0.025,
            show_fps: true,
            show_controls: false,
            pause_simulation: false,
        }
    }
}

impl SimulationParams {
    // Parse parameters from JSON, filling missing fields with defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    // Load from the file named by BOIDS_CONFIG, or defaults when it is unset.
    // A file that cannot be used is reported and replaced by defaults.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            log::info!("{CONFIG_ENV_VAR} not set, using default parameters");
            return Self::default();
        };

        match Self::load(&path) {
            Ok(params) => {
                log::info!("loaded parameters from {path}");
                params
            }
            Err(err) => {
                log::warn!("ignoring parameter file {path}: {err}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        let finite = [
            ("min_radius", self.min_radius),
            ("max_radius", self.max_radius),
            ("min_speed", self.min_speed),
            ("speed_spread", self.speed_spread),
            ("wander_radius", self.wander_radius),
            ("wander_speed", self.wander_speed),
            ("sight_range", self.sight_range),
            ("alignment_factor", self.alignment_factor),
            ("cohesion_factor", self.cohesion_factor),
            ("separation_factor", self.separation_factor),
            ("separation_distance", self.separation_distance),
            ("high_water_fps", self.high_water_fps),
            ("low_water_fps", self.low_water_fps),
            ("max_frame_delta_ms", self.max_frame_delta_ms),
            ("trail_fade", self.trail_fade),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ParamsError::NotFinite { name, value });
            }
        }

        // Sight range divides the soft boundary force
        for (name, value) in [
            ("min_radius", self.min_radius),
            ("sight_range", self.sight_range),
            ("max_frame_delta_ms", self.max_frame_delta_ms),
        ] {
            if value <= 0.0 {
                return Err(ParamsError::NotPositive { name, value });
            }
        }

        for (name, value) in [
            ("min_speed", self.min_speed),
            ("speed_spread", self.speed_spread),
            ("wander_radius", self.wander_radius),
            ("wander_speed", self.wander_speed),
            ("separation_distance", self.separation_distance),
            ("low_water_fps", self.low_water_fps),
        ] {
            if value < 0.0 {
                return Err(ParamsError::Negative { name, value });
            }
        }

        if self.min_radius > self.max_radius {
            return Err(ParamsError::InvertedRadiusRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if self.low_water_fps > self.high_water_fps {
            return Err(ParamsError::InvertedFpsBand {
                low: self.low_water_fps,
                high: self.high_water_fps,
            });
        }
        if self.initial_population > self.max_population {
            return Err(ParamsError::InitialPopulationTooLarge {
                initial: self.initial_population,
                max: self.max_population,
            });
        }
        if self.max_frame_delta_ms > FRAME_DELTA_LIMIT_MS {
            return Err(ParamsError::FrameDeltaTooLarge {
                value: self.max_frame_delta_ms,
                limit: FRAME_DELTA_LIMIT_MS,
            });
        }
        if !(0.0..=1.0).contains(&self.trail_fade) {
            return Err(ParamsError::TrailFadeOutOfRange(self.trail_fade));
        }

        Ok(())
    }

    // Scale of the soft boundary push, tied to the agent size range
    pub fn soft_bound_factor(&self) -> f32 {
        self.max_radius + self.min_radius
    }

    // Unvalidated values never panic: anything unusable becomes the limit
    pub fn max_frame_delta(&self) -> Duration {
        let limit = f64::from(FRAME_DELTA_LIMIT_MS) / 1000.0;
        let secs = (f64::from(self.max_frame_delta_ms) / 1000.0).min(limit);
        Duration::try_from_secs_f64(secs).unwrap_or_else(|_| Duration::from_secs_f64(limit))
    }

    // Get parameter ranges for UI sliders
    pub fn get_alignment_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.2
    }

    pub fn get_cohesion_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.2
    }

    pub fn get_separation_factor_range() -> std::ops::RangeInclusive<f32> {
        0.0..=400.0
    }

    pub fn get_distance_range() -> std::ops::RangeInclusive<f32> {
        10.0..=400.0
    }

    pub fn get_wander_radius_range() -> std::ops::RangeInclusive<f32> {
        0.0..=50.0
    }

    pub fn get_wander_speed_range() -> std::ops::RangeInclusive<f32> {
        0.0..=200.0
    }
}
