/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that holds the frame statistics
 * shown by the FPS overlay and the control panel.
 *
 * Includes metrics for:
 * - FPS estimate used by the population controller
 * - Frame time as measured by the clock
 * - Current population and the last change made to it
 * - Agents steered and collisions resolved in the last frame
 */

use std::time::Duration;

use crate::population::PopulationChange;
use crate::simulation::FrameReport;

pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub population: usize,
    pub last_change: PopulationChange,
    pub frames: u64,
    pub steered: usize,
    pub collisions: usize,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            population: 0,
            last_change: PopulationChange::Unchanged,
            frames: 0,
            steered: 0,
            collisions: 0,
        }
    }
}

impl DebugInfo {
    pub fn record(&mut self, report: &FrameReport, frame_time: Duration) {
        self.fps = report.fps;
        self.frame_time = frame_time;
        self.population = report.population;
        self.last_change = report.change;
        self.steered = report.steered;
        self.collisions = report.collisions;
        self.frames += 1;
    }

    // Text shown in the top-left overlay
    pub fn fps_label(&self) -> String {
        format!("FPS: {:.1}", self.fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_copies_the_frame_report() {
        let mut info = DebugInfo::default();
        let report = FrameReport {
            fps: 71.3,
            dt: 0.014,
            population: 37,
            change: PopulationChange::Grew,
            steered: 30,
            collisions: 2,
        };

        info.record(&report, Duration::from_millis(14));

        assert_eq!(info.population, 37);
        assert_eq!(info.last_change, PopulationChange::Grew);
        assert_eq!(info.frame_time, Duration::from_millis(14));
        assert_eq!(info.steered, 30);
        assert_eq!(info.collisions, 2);
        assert_eq!(info.frames, 1);
        assert_eq!(info.fps_label(), "FPS: 71.3");
    }
}
