/*
 * Collision Module
 *
 * Positional overlap correction between agents, followed by the hard clamp
 * that keeps every agent fully inside the world. Overlapping pairs are pushed
 * apart along the line joining their centres, each by half the overlap; no
 * velocity is exchanged.
 *
 * Pairs are visited in index order and each correction is applied in place,
 * so later pairs see positions already moved by earlier ones.
 */

use crate::agent::Agent;
use crate::world::WorldBounds;

// Separate one overlapping pair. Returns whether anything moved.
pub fn resolve_pair(a: &mut Agent, b: &mut Agent) -> bool {
    let delta = b.position - a.position;
    let distance = delta.length();
    let reach = a.radius + b.radius;

    // Coincident centres have no separating axis; leave them for this frame
    if distance >= reach || distance == 0.0 {
        return false;
    }

    let overlap = (reach - distance) / 2.0;
    let offset = delta * (overlap / distance);
    a.position -= offset;
    b.position += offset;
    true
}

// Visit every unordered pair once. Returns how many pairs were separated.
pub fn resolve_collisions(agents: &mut [Agent]) -> usize {
    let mut resolved = 0;

    for i in 0..agents.len() {
        let (head, tail) = agents.split_at_mut(i + 1);
        let first = &mut head[i];
        for second in tail.iter_mut() {
            if resolve_pair(first, second) {
                resolved += 1;
            }
        }
    }

    resolved
}

pub fn clamp_to_bounds(agents: &mut [Agent], bounds: &WorldBounds) {
    for agent in agents {
        agent.position = bounds.clamp(agent.position, agent.radius);
    }
}
