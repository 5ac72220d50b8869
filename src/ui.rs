/*
 * UI Module
 *
 * Control panel built with nannou_egui. It exposes the steering factors and
 * wander parameters for live tuning; agent size and speed are fixed at
 * creation and are not editable here. The panel is hidden unless
 * `show_controls` is set (Tab toggles it).
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Run one egui frame. The frame is begun even while the panel is hidden so
// egui never redraws a stale window.
pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) {
    let ctx = egui.begin_frame();

    if !params.show_controls {
        return;
    }

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 30.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flocking Behavior", |ui| {
                ui.add(egui::Slider::new(&mut params.alignment_factor, SimulationParams::get_alignment_range()).text("Alignment Factor"));
                ui.add(egui::Slider::new(&mut params.cohesion_factor, SimulationParams::get_cohesion_range()).text("Cohesion Factor"));
                ui.add(egui::Slider::new(&mut params.separation_factor, SimulationParams::get_separation_factor_range()).text("Separation Factor"));
                ui.add(egui::Slider::new(&mut params.sight_range, SimulationParams::get_distance_range()).text("Sight Range"));
                ui.add(egui::Slider::new(&mut params.separation_distance, SimulationParams::get_distance_range()).text("Separation Distance"));
            });

            ui.collapsing("Wander", |ui| {
                ui.add(egui::Slider::new(&mut params.wander_radius, SimulationParams::get_wander_radius_range()).text("Wander Radius"));
                ui.add(egui::Slider::new(&mut params.wander_speed, SimulationParams::get_wander_speed_range()).text("Wander Speed"));
            });

            ui.separator();

            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
            ui.label(format!("Agents: {} / {}", debug_info.population, params.max_population));
            ui.label(format!("Last change: {:?}", debug_info.last_change));
            ui.label(format!("Steered: {} / {}", debug_info.steered, debug_info.population));
            ui.label(format!("Collisions: {}", debug_info.collisions));
            ui.label(format!("Frames: {}", debug_info.frames));

            ui.checkbox(&mut params.show_fps, "Show FPS Overlay");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });
}
