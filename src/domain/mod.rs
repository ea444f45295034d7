mod cell;
mod grid;
mod patterns;
mod size;

pub use cell::Cell;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use size::GridSize;
