/*
 * Population Module
 *
 * A two-threshold controller that trades agents for frame rate. Each frame
 * it looks at the previous frame's duration and adds one agent when the
 * frame rate has headroom, or removes one when it is falling behind. There
 * is no smoothing: every frame is judged on its own.
 */

use std::time::Duration;

use crate::agent::Agent;
use crate::params::SimulationParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationChange {
    Grew,
    Shrank,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationController {
    pub high_water_fps: f32,
    pub low_water_fps: f32,
    pub max_population: usize,
    pub max_frame_delta: Duration,
}

impl PopulationController {
    pub fn from_params(params: &SimulationParams) -> Self {
        Self {
            high_water_fps: params.high_water_fps,
            low_water_fps: params.low_water_fps,
            max_population: params.max_population,
            max_frame_delta: params.max_frame_delta(),
        }
    }

    // Bound the step after a stall so integration never takes a huge leap
    pub fn clamp_delta(&self, frame_delta: Duration) -> Duration {
        frame_delta.min(self.max_frame_delta)
    }

    // Instantaneous frame rate implied by a clamped frame duration.
    // A zero duration yields infinity, which simply counts as headroom.
    pub fn estimate_fps(&self, frame_delta: Duration) -> f32 {
        1.0 / self.clamp_delta(frame_delta).as_secs_f32()
    }

    pub fn decide(&self, fps: f32, population: usize) -> PopulationChange {
        if fps > self.high_water_fps && population < self.max_population {
            PopulationChange::Grew
        } else if fps < self.low_water_fps {
            PopulationChange::Shrank
        } else {
            PopulationChange::Unchanged
        }
    }

    // Apply at most one push or one pop. `spawn` is only called when growing.
    // Shrinking an empty population is a no-op reported as Unchanged.
    pub fn regulate(&self, fps: f32, agents: &mut Vec<Agent>, spawn: impl FnOnce() -> Agent) -> PopulationChange {
        match self.decide(fps, agents.len()) {
            PopulationChange::Grew => {
                agents.push(spawn());
                PopulationChange::Grew
            }
            PopulationChange::Shrank => match agents.pop() {
                Some(_) => PopulationChange::Shrank,
                None => PopulationChange::Unchanged,
            },
            PopulationChange::Unchanged => PopulationChange::Unchanged,
        }
    }
}
