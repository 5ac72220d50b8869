/*
 * Boid Simulation Benchmark
 *
 * Measures the brute-force neighbor scan, the collision pass and the full
 * frame step for a range of population sizes up to the default cap.
 */

use adaptive_boids::collision::resolve_collisions;
use adaptive_boids::neighbors::aggregate;
use adaptive_boids::{SimRng, Simulation, SimulationParams, WorldBounds};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use std::time::Duration;

fn flock(n: usize) -> Simulation {
    let params = SimulationParams {
        initial_population: n,
        max_population: n,
        ..SimulationParams::default()
    };
    Simulation::with_rng(params, WorldBounds::new(1600.0, 900.0), SimRng::seed_from_u64(n as u64))
}

// Benchmark aggregation for every agent in the flock
fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for num_agents in [50, 200, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_agents), num_agents, |b, &n| {
            let sim = flock(n);
            let bounds = sim.bounds();
            b.iter(|| {
                for index in 0..sim.agents.len() {
                    black_box(aggregate(index, &sim.agents, &sim.params, &bounds));
                }
            });
        });
    }

    group.finish();
}

// Benchmark the pairwise collision pass
fn bench_collisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("collisions");

    for num_agents in [50, 200, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_agents), num_agents, |b, &n| {
            let sim = flock(n);
            b.iter(|| {
                let mut agents = sim.agents.clone();
                black_box(resolve_collisions(&mut agents));
            });
        });
    }

    group.finish();
}

// Benchmark the overall frame step
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for num_agents in [50, 200, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_agents), num_agents, |b, &n| {
            let mut sim = flock(n);
            b.iter(|| black_box(sim.step(Duration::from_millis(16))));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_aggregate, bench_collisions, bench_step
}

criterion_main!(benches);
