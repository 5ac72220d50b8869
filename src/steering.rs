/*
 * Steering Module
 *
 * Turns a neighbor summary into a new heading and advances an agent by one
 * frame. Steering only ever rotates the agent: speed is fixed at creation.
 *
 * Combined forces:
 * - current velocity, carried over unchanged
 * - alignment towards the mean velocity of spotted agents
 * - cohesion towards the mean position of spotted agents
 * - separation away from the mean position of crowding agents
 * - the soft boundary push, unscaled
 */

use nannou::prelude::*;
use rand::Rng;

use crate::agent::{direction, Agent};
use crate::neighbors::{separation_strength, NeighborSummary};
use crate::params::SimulationParams;

// Sum of every steering contribution, or None when no neighbor was spotted
pub fn desired_velocity(agent: &Agent, summary: &NeighborSummary, params: &SimulationParams) -> Option<Vec2> {
    let mean_velocity = summary.mean_velocity()?;
    let mean_position = summary.mean_position()?;
    let crowd_center = summary.crowd_center();
    let separation = separation_strength(crowd_center, params);

    Some(
        agent.velocity()
            + mean_velocity * params.alignment_factor
            + (mean_position - agent.position) * params.cohesion_factor
            + (agent.position - crowd_center) * separation
            + summary.soft_force,
    )
}

// Direction of `desired`, or `current` when the vector has no usable direction
pub fn heading_of(desired: Vec2, current: f32) -> f32 {
    let magnitude = desired.length();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return current;
    }
    (desired.y / magnitude).atan2(desired.x / magnitude)
}

// Rotate the agent towards its desired velocity. Returns whether the heading
// was recomputed this frame.
pub fn steer(agent: &mut Agent, summary: &NeighborSummary, params: &SimulationParams) -> bool {
    match desired_velocity(agent, summary, params) {
        Some(desired) => {
            agent.heading = heading_of(desired, agent.heading);
            true
        }
        None => false,
    }
}

// Random-walk the wander heading, then move along heading plus wander drift
pub fn integrate<R: Rng + ?Sized>(agent: &mut Agent, params: &SimulationParams, dt: f32, rng: &mut R) {
    agent.wander_heading += (rng.gen::<f32>() * 2.0 - 1.0) * params.wander_speed * dt;

    let travel = direction(agent.heading) * agent.speed;
    let drift = direction(agent.wander_heading) * params.wander_radius;
    agent.position += (travel + drift) * dt;
}
