/*
 * Neighbor Module
 *
 * Gathers everything an agent needs to know about the rest of the flock in a
 * single brute-force pass: which agents it can see (alignment and cohesion
 * inputs), which ones crowd it (separation input), and how hard the nearby
 * world edges push it back inwards.
 *
 * Both thresholds are padded by the radii of the two agents involved, so the
 * sight and crowding tests are symmetric in the pair.
 */

use nannou::prelude::*;

use crate::agent::Agent;
use crate::params::SimulationParams;
use crate::world::WorldBounds;

// Running sums collected for one focal agent
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NeighborSummary {
    pub spotted: usize,
    pub velocity_sum: Vec2,
    pub position_sum: Vec2,
    pub crowded: usize,
    pub crowd_sum: Vec2,
    pub soft_force: Vec2,
}

impl NeighborSummary {
    // Alignment target: mean velocity of every spotted agent
    pub fn mean_velocity(&self) -> Option<Vec2> {
        (self.spotted > 0).then(|| self.velocity_sum / self.spotted as f32)
    }

    // Cohesion target: mean position of every spotted agent
    pub fn mean_position(&self) -> Option<Vec2> {
        (self.spotted > 0).then(|| self.position_sum / self.spotted as f32)
    }

    // Mean position of the crowding agents, or the origin when nobody crowds
    pub fn crowd_center(&self) -> Vec2 {
        if self.crowded > 0 {
            self.crowd_sum / self.crowded as f32
        } else {
            Vec2::ZERO
        }
    }
}

// Whether the pair is closer than `reach` plus both radii
#[inline]
fn within_reach(a: &Agent, b: &Agent, reach: f32) -> bool {
    a.distance_to(b) < reach + a.radius + b.radius
}

/// Whether `a` can see `b`.
#[inline]
pub fn spots(a: &Agent, b: &Agent, sight_range: f32) -> bool {
    within_reach(a, b, sight_range)
}

/// Whether `b` is close enough to `a` to push it away.
#[inline]
pub fn crowds(a: &Agent, b: &Agent, separation_distance: f32) -> bool {
    within_reach(a, b, separation_distance)
}

// Inward push from every edge the agent is near, fading linearly with the
// distance from the edge. The trigger band is widened by the agent radius
// while the magnitude is measured against the sight range alone, so the
// outermost sliver of the band pushes very slightly outwards.
pub fn soft_boundary_force(agent: &Agent, params: &SimulationParams, bounds: &WorldBounds) -> Vec2 {
    let sight = params.sight_range;
    let factor = params.soft_bound_factor();
    let reach = agent.radius + sight;
    let p = agent.position;
    let mut force = Vec2::ZERO;

    if p.x < reach {
        force.x += factor * (sight - p.x) / sight;
    }
    if p.x > bounds.width - reach {
        force.x -= factor * (p.x - (bounds.width - sight)) / sight;
    }
    if p.y < reach {
        force.y += factor * (sight - p.y) / sight;
    }
    if p.y > bounds.height - reach {
        force.y -= factor * (p.y - (bounds.height - sight)) / sight;
    }

    force
}

// Scan every other agent once and summarise the neighborhood of `agents[index]`
pub fn aggregate(
    index: usize,
    agents: &[Agent],
    params: &SimulationParams,
    bounds: &WorldBounds,
) -> NeighborSummary {
    let focal = &agents[index];
    let mut summary = NeighborSummary {
        soft_force: soft_boundary_force(focal, params, bounds),
        ..NeighborSummary::default()
    };

    for (i, other) in agents.iter().enumerate() {
        if i == index {
            continue;
        }

        if spots(focal, other, params.sight_range) {
            summary.velocity_sum += other.velocity();
            summary.position_sum += other.position;
            summary.spotted += 1;
        }

        if crowds(focal, other, params.separation_distance) {
            summary.crowd_sum += other.position;
            summary.crowded += 1;
        }
    }

    summary
}

// Scale applied to the separation vector. It is derived from the norm of the
// averaged crowd position itself, not of its offset from the focal agent.
pub fn separation_strength(crowd_center: Vec2, params: &SimulationParams) -> f32 {
    let magnitude = crowd_center.length();
    if magnitude == 0.0 {
        return 0.0;
    }
    (params.separation_factor / magnitude) * (1.0 - params.separation_distance / magnitude)
}
