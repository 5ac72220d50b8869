/*
 * Renderer Module
 *
 * This module handles the rendering of the boid simulation. The window is
 * never fully cleared after the first frame: a faint black rectangle is laid
 * over the previous image instead, which leaves fading motion trails.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::debug::DebugInfo;

// Size of the FPS overlay box in the top-left corner
const OVERLAY_FONT_SIZE: u32 = 12;
const OVERLAY_WIDTH: f32 = 6.0 * 12.0;
const OVERLAY_HEIGHT: f32 = 14.0;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();
    let params = &model.simulation.params;

    if frame.nth() == 0 {
        draw.background().color(BLACK);
    }

    // Fade the previous frame
    draw.rect()
        .xy(window_rect.xy())
        .wh(window_rect.wh())
        .color(rgba(0.0, 0.0, 0.0, params.trail_fade));

    let bounds = model.simulation.bounds();
    for agent in &model.simulation.agents {
        agent.draw(&draw, &bounds);
    }

    if params.show_fps {
        draw_fps_overlay(&draw, &model.debug_info, window_rect);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("failed to render frame {}: {err:?}", frame.nth());
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::error!("failed to render controls: {err:?}");
    }
}

// Black box with the current FPS estimate in white
fn draw_fps_overlay(draw: &Draw, debug_info: &DebugInfo, window_rect: Rect) {
    let x = window_rect.left() + OVERLAY_WIDTH / 2.0;
    let y = window_rect.top() - OVERLAY_HEIGHT / 2.0;

    draw.rect()
        .x_y(x, y)
        .w_h(OVERLAY_WIDTH, OVERLAY_HEIGHT)
        .color(BLACK);

    draw.text(&debug_info.fps_label())
        .x_y(x, y)
        .w_h(OVERLAY_WIDTH, OVERLAY_HEIGHT)
        .left_justify()
        .color(WHITE)
        .font_size(OVERLAY_FONT_SIZE);
}
