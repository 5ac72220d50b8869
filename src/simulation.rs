/*
 * Simulation Module
 *
 * The Simulation struct owns everything one flock needs: parameters, world
 * bounds, agents, the population controller and its random source. Several
 * simulations can run side by side; nothing is global.
 *
 * One frame runs in this order:
 * 1. Population control from the previous frame's duration
 * 2. Steering pass: for each agent in turn, aggregate neighbors, steer and
 *    integrate, in place (later agents see earlier agents' new state)
 * 3. Collision pass over every pair, then the hard boundary clamp
 */

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agent::Agent;
use crate::collision::{clamp_to_bounds, resolve_collisions};
use crate::neighbors::aggregate;
use crate::params::SimulationParams;
use crate::population::{PopulationChange, PopulationController};
use crate::steering::{integrate, steer};
use crate::world::WorldBounds;

pub type SimRng = StdRng;

// What happened during one call to `Simulation::step`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub fps: f32,
    // Integration step actually used, in seconds
    pub dt: f32,
    pub population: usize,
    pub change: PopulationChange,
    pub steered: usize,
    pub collisions: usize,
}

pub struct Simulation<R = SimRng> {
    pub agents: Vec<Agent>,
    pub params: SimulationParams,
    bounds: WorldBounds,
    controller: PopulationController,
    rng: R,
}

impl Simulation<SimRng> {
    pub fn new(params: SimulationParams, bounds: WorldBounds) -> Self {
        Self::with_rng(params, bounds, SimRng::from_entropy())
    }
}

impl<R: Rng> Simulation<R> {
    // Start with `params.initial_population` random agents
    pub fn with_rng(params: SimulationParams, bounds: WorldBounds, mut rng: R) -> Self {
        let agents = (0..params.initial_population)
            .map(|_| Agent::random(&mut rng, &params, bounds))
            .collect();
        Self::with_agents(params, bounds, agents, rng)
    }

    pub fn with_agents(params: SimulationParams, bounds: WorldBounds, agents: Vec<Agent>, rng: R) -> Self {
        let controller = PopulationController::from_params(&params);
        Self {
            agents,
            params,
            bounds,
            controller,
            rng,
        }
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn population(&self) -> usize {
        self.agents.len()
    }

    // Advance one frame given the wall-clock duration of the previous one
    pub fn step(&mut self, frame_delta: Duration) -> FrameReport {
        let dt = self.controller.clamp_delta(frame_delta).as_secs_f32();
        let fps = self.controller.estimate_fps(frame_delta);

        let change = self.regulate_population(fps);
        let steered = self.steering_pass(dt);
        let collisions = self.collision_pass();

        let report = FrameReport {
            fps,
            dt,
            population: self.agents.len(),
            change,
            steered,
            collisions,
        };
        log::trace!("{report:?}");
        report
    }

    // Grow or shrink by at most one agent
    pub fn regulate_population(&mut self, fps: f32) -> PopulationChange {
        let Self {
            agents,
            params,
            bounds,
            controller,
            rng,
        } = self;

        let change = controller.regulate(fps, agents, || Agent::random(rng, params, *bounds));
        if change != PopulationChange::Unchanged {
            log::debug!("population {:?} to {} at {:.1} fps", change, agents.len(), fps);
        }
        change
    }

    // Aggregate, steer and integrate each agent in index order. Returns how
    // many agents had a neighbor in sight and were steered.
    pub fn steering_pass(&mut self, dt: f32) -> usize {
        let mut steered = 0;

        for index in 0..self.agents.len() {
            let summary = aggregate(index, &self.agents, &self.params, &self.bounds);
            let agent = &mut self.agents[index];
            if steer(agent, &summary, &self.params) {
                steered += 1;
            }
            integrate(agent, &self.params, dt, &mut self.rng);
        }

        steered
    }

    // Resolve overlaps across all pairs, then clamp into the world
    pub fn collision_pass(&mut self) -> usize {
        let collisions = resolve_collisions(&mut self.agents);
        clamp_to_bounds(&mut self.agents, &self.bounds);
        collisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::prelude::*;

    fn seeded(params: SimulationParams, bounds: WorldBounds) -> Simulation {
        Simulation::with_rng(params, bounds, SimRng::seed_from_u64(42))
    }

    #[test]
    fn starts_with_initial_population() {
        let sim = seeded(SimulationParams::default(), WorldBounds::new(1280.0, 720.0));
        assert_eq!(sim.population(), 10);
    }

    #[test]
    fn fast_frame_adds_one_agent() {
        let mut sim = seeded(SimulationParams::default(), WorldBounds::new(1280.0, 720.0));
        let report = sim.step(Duration::from_millis(8));
        assert_eq!(report.change, PopulationChange::Grew);
        assert_eq!(report.population, 11);
        assert!((report.dt - 0.008).abs() < 1e-6);
    }

    #[test]
    fn stalled_frame_is_clamped_and_keeps_population() {
        let mut sim = seeded(SimulationParams::default(), WorldBounds::new(1280.0, 720.0));
        let report = sim.step(Duration::from_secs(2));
        // 1 / 0.02 s sits exactly on the low-water mark
        assert_eq!(report.change, PopulationChange::Unchanged);
        assert!((report.dt - 0.02).abs() < 1e-6);
        assert_eq!(report.population, 10);
    }

    #[test]
    fn lone_agent_keeps_heading_but_moves() {
        let params = SimulationParams {
            wander_radius: 0.0,
            ..SimulationParams::default()
        };
        let bounds = WorldBounds::new(2000.0, 2000.0);
        let agent = Agent::new(vec2(1000.0, 1000.0), 0.5, 200.0, 5.0);
        let mut sim = Simulation::with_agents(params, bounds, vec![agent], SimRng::seed_from_u64(1));

        let steered = sim.steering_pass(0.01);

        assert_eq!(steered, 0);
        let moved = &sim.agents[0];
        assert_eq!(moved.heading, 0.5);
        let expected = vec2(1000.0 + 0.5f32.cos() * 2.0, 1000.0 + 0.5f32.sin() * 2.0);
        assert!((moved.position - expected).length() < 1e-3);
    }

    #[test]
    fn steering_reads_agents_already_updated_this_frame() {
        // Agent 1 only comes into sight of agent 0 after it has moved. With
        // in-place updates agent 0 is processed first and sees nobody.
        let params = SimulationParams {
            wander_radius: 0.0,
            ..SimulationParams::default()
        };
        let bounds = WorldBounds::new(4000.0, 4000.0);
        let agents = vec![
            Agent::new(vec2(2000.0, 2000.0), 0.0, 200.0, 5.0),
            Agent::new(vec2(2000.0 + 161.0, 2000.0), std::f32::consts::PI, 200.0, 5.0),
        ];
        let mut sim = Simulation::with_agents(params, bounds, agents, SimRng::seed_from_u64(5));

        let steered = sim.steering_pass(0.02);
        // Agent 0 moved 4 units right, so agent 1 now sees it at distance 157
        assert_eq!(steered, 1);
        assert_eq!(sim.agents[0].heading, 0.0);
    }

    #[test]
    fn frames_keep_agents_inside_the_world() {
        let bounds = WorldBounds::new(640.0, 480.0);
        let mut sim = seeded(SimulationParams::default(), bounds);

        for frame in 0..300 {
            let delta = Duration::from_millis(if frame % 3 == 0 { 25 } else { 12 });
            sim.step(delta);
            for agent in &sim.agents {
                assert!(bounds.contains(agent.position, agent.radius), "{agent:?} escaped");
                assert!(agent.heading.is_finite());
            }
        }
    }

    #[test]
    fn independent_simulations_do_not_interact() {
        let bounds = WorldBounds::new(800.0, 600.0);
        let mut first = seeded(SimulationParams::default(), bounds);
        let second = seeded(SimulationParams::default(), bounds);

        first.step(Duration::from_millis(5));

        assert_eq!(first.population(), 11);
        assert_eq!(second.population(), 10);
    }
}
