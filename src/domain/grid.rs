use super::{Cell, GridSize};
use rand::Rng;

/// Relative positions of the Moore neighborhood.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Grid is one generation of the automaton.
/// Evolution never mutates a grid; it builds the next one from this snapshot.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Create a grid where each cell is independently alive with `alive_probability`.
    ///
    /// Probabilities outside `[0, 1]` are clamped; NaN counts as 0.
    pub fn random<R: Rng + ?Sized>(size: GridSize, alive_probability: f64, rng: &mut R) -> Self {
        let p = if alive_probability.is_nan() {
            0.0
        } else {
            alive_probability.clamp(0.0, 1.0)
        };

        let cells = (0..size.cell_count())
            .map(|_| Cell::from_alive(rng.random_bool(p)))
            .collect();

        Self {
            width: size.width,
            height: size.height,
            cells,
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn size(&self) -> GridSize {
        GridSize::new(self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position, `None` when off the grid
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position. Writes outside the grid are ignored.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors. Positions off the grid are absent and count as zero.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?)))
            .filter_map(|(nx, ny)| self.get(nx, ny))
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Build the next generation into a fresh buffer
    pub fn evolve(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| self.cells[self.get_index(x, y)].evolve(self.count_live_neighbors(x, y)))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(move |(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }

    /// Positions of every alive cell, row by row
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}
