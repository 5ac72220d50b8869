/*
 * Input Module
 *
 * Keyboard shortcuts and forwarding of raw window events to egui.
 *
 * - Space: pause or resume the simulation
 * - Tab: show or hide the control panel
 * - F: show or hide the FPS overlay
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::params::SimulationParams;

// Flip the setting bound to a key. Returns false for unbound keys.
pub fn apply_key(params: &mut SimulationParams, key: Key) -> bool {
    match key {
        Key::Space => params.pause_simulation = !params.pause_simulation,
        Key::Tab => params.show_controls = !params.show_controls,
        Key::F => params.show_fps = !params.show_fps,
        _ => return false,
    }
    true
}

// Key pressed event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // Let egui keep keys typed into its widgets
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    let params = &mut model.simulation.params;
    if apply_key(params, key) {
        log::debug!(
            "{key:?}: paused={} controls={} fps={}",
            params.pause_simulation,
            params.show_controls,
            params.show_fps
        );
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys_toggle_their_setting() {
        let mut params = SimulationParams::default();

        assert!(apply_key(&mut params, Key::Space));
        assert!(params.pause_simulation);
        assert!(apply_key(&mut params, Key::Space));
        assert!(!params.pause_simulation);

        assert!(apply_key(&mut params, Key::Tab));
        assert!(params.show_controls);

        assert!(apply_key(&mut params, Key::F));
        assert!(!params.show_fps);
    }

    #[test]
    fn unbound_keys_change_nothing() {
        let mut params = SimulationParams::default();
        assert!(!apply_key(&mut params, Key::Q));
        assert_eq!(params, SimulationParams::default());
    }
}
