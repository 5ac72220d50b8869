/*
 * Agent Module
 *
 * This module defines the Agent struct, the only entity in the simulation.
 * An agent keeps a fixed speed and size for its whole life; steering only
 * ever turns its heading. A second, independent wander heading random-walks
 * every frame and adds a small drift to its motion.
 */

use std::f32::consts::TAU;

use nannou::prelude::*;
use rand::Rng;

use crate::params::SimulationParams;
use crate::world::WorldBounds;

#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub position: Vec2,
    pub heading: f32,
    pub wander_heading: f32,
    pub speed: f32,
    pub radius: f32,
    // Decorative hue in [0, 1)
    pub hue: f32,
}

// Unit vector pointing along an angle in radians
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    vec2(angle.cos(), angle.sin())
}

impl Agent {
    pub fn new(position: Vec2, heading: f32, speed: f32, radius: f32) -> Self {
        Self {
            position,
            heading,
            wander_heading: 0.0,
            speed,
            radius,
            hue: 0.0,
        }
    }

    // Create an agent with every attribute drawn uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R, params: &SimulationParams, bounds: WorldBounds) -> Self {
        let position = vec2(rng.gen::<f32>() * bounds.width, rng.gen::<f32>() * bounds.height);
        let wander_heading = rng.gen::<f32>() * TAU;
        let heading = rng.gen::<f32>() * TAU;
        let speed = rng.gen::<f32>() * params.speed_spread + params.min_speed;
        let radius = rng.gen::<f32>() * (params.max_radius - params.min_radius) + params.min_radius;
        let hue = rng.gen::<f32>();

        Self {
            position,
            heading,
            wander_heading,
            speed,
            radius,
            hue,
        }
    }

    // Velocity implied by heading and speed
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        direction(self.heading) * self.speed
    }

    #[inline]
    pub fn distance_to(&self, other: &Agent) -> f32 {
        self.position.distance(other.position)
    }

    // Draw the agent body and a small nose marker along its heading
    pub fn draw(&self, draw: &Draw, bounds: &WorldBounds) {
        let body = bounds.to_screen(self.position);
        let nose = bounds.to_screen(self.position + direction(self.heading) * self.radius);

        draw.ellipse()
            .xy(body)
            .radius(self.radius)
            .color(hsl(self.hue, 1.0, 0.5));

        draw.ellipse()
            .xy(nose)
            .radius(self.radius / 4.0)
            .color(WHITE);
    }
}
