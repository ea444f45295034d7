use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::domain::{Grid, GridSize};
use crate::rendering::{CellStyle, Surface};

use super::Simulation;

/// Automaton owns the current generation and the randomness used to reseed it.
pub struct Automaton {
    grid: Grid,
    size: GridSize,
    alive_probability: f64,
    generation: u64,
    rng: StdRng,
}

impl Automaton {
    /// Randomized automaton seeded from the OS; each cell is alive with `alive_probability`
    pub fn new(size: GridSize, alive_probability: f64) -> Self {
        Self::with_rng(size, alive_probability, StdRng::from_os_rng())
    }

    /// Reproducible automaton: the same seed yields the same sequence of grids
    pub fn with_seed(size: GridSize, alive_probability: f64, seed: u64) -> Self {
        Self::with_rng(size, alive_probability, StdRng::seed_from_u64(seed))
    }

    fn with_rng(size: GridSize, alive_probability: f64, mut rng: StdRng) -> Self {
        Self {
            grid: Grid::random(size, alive_probability, &mut rng),
            size,
            alive_probability,
            generation: 0,
            rng,
        }
    }

    /// Start from a known generation. Later resets keep its dimensions
    /// and draw cells with `alive_probability`.
    pub fn from_grid(grid: Grid, alive_probability: f64) -> Self {
        Self {
            size: grid.size(),
            grid,
            alive_probability,
            generation: 0,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn size(&self) -> GridSize {
        self.size
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation
    pub fn step(&mut self) {
        self.grid = self.grid.evolve();
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "stepped"
        );
    }

    /// Draw every alive cell; dead cells draw nothing
    pub fn render(&self, surface: &mut dyn Surface, style: &CellStyle) {
        for (x, y) in self.grid.live_cells() {
            style.draw_cell(surface, x, y);
        }
    }

    /// Throw away the current grid and reseed one of the same size
    pub fn reset(&mut self) {
        self.reseed();
        info!(
            width = self.size.width,
            height = self.size.height,
            population = self.grid.population(),
            "grid regenerated"
        );
    }

    fn reseed(&mut self) {
        self.grid = Grid::random(self.size, self.alive_probability, &mut self.rng);
        self.generation = 0;
    }
}

impl Simulation for Automaton {
    fn on_tick(&mut self) {
        self.step();
    }

    fn on_render(&self, surface: &mut dyn Surface, style: &CellStyle) {
        self.render(surface, style);
    }
}
