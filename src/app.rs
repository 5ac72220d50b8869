/*
 * Application Module
 *
 * This module defines the main application model for the boid simulation.
 * It creates the window, fixes the world to its size, and drives one
 * simulation step per nannou update. nannou schedules the next frame only
 * after the current update and view have returned.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::clock::FrameClock;
use crate::debug::DebugInfo;
use crate::input::{key_pressed, raw_window_event};
use crate::params::SimulationParams;
use crate::renderer::view;
use crate::simulation::Simulation;
use crate::ui;
use crate::world::WorldBounds;

// Used when no monitor can be queried
const FALLBACK_WINDOW_SIZE: (u32, u32) = (1280, 800);

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub clock: FrameClock,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Window covers 80% of the primary monitor when one is available
    let (window_width, window_height) = app
        .primary_monitor()
        .map(|monitor| {
            let size = monitor.size();
            ((size.width as f32 * 0.8) as u32, (size.height as f32 * 0.8) as u32)
        })
        .unwrap_or(FALLBACK_WINDOW_SIZE);

    // The world is fixed to the window for the whole run, so no resizing
    let window_id = app
        .new_window()
        .title("Adaptive Boids")
        .size(window_width, window_height)
        .resizable(false)
        .view(view)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build the simulation window");

    let window = app.window(window_id).expect("window was just created");
    let egui = Egui::from_window(&window);
    let bounds = WorldBounds::from_rect(window.rect());
    drop(window);

    let params = SimulationParams::from_env();
    log::info!(
        "world {}x{}, {} initial agents, cap {}",
        bounds.width,
        bounds.height,
        params.initial_population,
        params.max_population
    );

    let clock = FrameClock::new(params.max_frame_delta());
    let simulation = Simulation::new(params, bounds);

    Model {
        simulation,
        clock,
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(_app: &App, model: &mut Model, update: Update) {
    model.egui.set_elapsed_time(update.since_start);
    ui::update_ui(&mut model.egui, &mut model.simulation.params, &model.debug_info);

    // Keep measuring while paused so resuming does not count the pause
    let frame_delta = model.clock.tick();
    if model.simulation.params.pause_simulation {
        return;
    }

    let report = model.simulation.step(frame_delta);
    model.debug_info.record(&report, frame_delta);
}
