/*
 * Adaptive Boid Simulation - Module Definitions
 *
 * This file defines the module structure for the boid simulation.
 * The simulation core (agent, neighbors, steering, collision, population,
 * simulation) has no window dependency beyond nannou's math types and can be
 * driven headless; app, renderer, ui and input wire it to a nannou window.
 */

// Re-export key components for easier access
pub use agent::Agent;
pub use app::Model;
pub use clock::FrameClock;
pub use debug::DebugInfo;
pub use error::{ConfigError, ParamsError};
pub use params::SimulationParams;
pub use population::{PopulationChange, PopulationController};
pub use simulation::{FrameReport, SimRng, Simulation};
pub use world::WorldBounds;

// Define modules
pub mod agent;
pub mod app;
pub mod clock;
pub mod collision;
pub mod debug;
pub mod error;
pub mod input;
pub mod neighbors;
pub mod params;
pub mod population;
pub mod renderer;
pub mod simulation;
pub mod steering;
pub mod ui;
pub mod world;
