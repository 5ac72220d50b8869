/*
 * Adaptive Boid Simulation
 *
 * Agents steer by three local rules:
 * 1. Separation: move away from the centre of crowding neighbors
 * 2. Alignment: steer towards the average heading of visible neighbors
 * 3. Cohesion: steer towards the average position of visible neighbors
 *
 * The population grows while the frame rate has headroom and shrinks when it
 * falls behind. Set RUST_LOG=debug to watch it adjust, and BOIDS_CONFIG to a
 * JSON file to override parameters.
 */

use adaptive_boids::app;

fn main() {
    env_logger::init();
    nannou::app(app::model).update(app::update).run();
}
