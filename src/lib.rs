// Domain layer - cells, grids and the life rule
pub mod domain;

// Application layer - the automaton and frame pacing
pub mod application;

// Infrastructure layer - configuration, rendering, input
pub mod config;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridSize, Pattern, presets};
pub use application::{Automaton, FrameClock, Simulation};
pub use config::{ConfigError, Settings};
