use super::{Cell, Grid};

/// A known configuration that can be stamped onto a grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().map_or(0, |x| x + 1);
        let height = cells.iter().map(|(_, y)| *y).max().map_or(0, |y| y + 1);
        Self { width, height, cells }
    }

    /// Stamp the pattern with its top-left at (x, y). Cells falling off the grid are dropped.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        for &(dx, dy) in &self.cells {
            if let (Some(px), Some(py)) = (x.checked_add(dx), y.checked_add(dy)) {
                grid.set(px, py, Cell::Alive);
            }
        }
    }

    /// A dead grid of `width` x `height` holding only this pattern at (x, y)
    pub fn on_empty(&self, width: usize, height: usize, x: usize, y: usize) -> Grid {
        let mut grid = Grid::new(width, height);
        self.place_on(&mut grid, x, y);
        grid
    }
}

/// Small still lifes and oscillators
#[rustfmt::skip]
pub mod presets {
    use super::*;

    /// Block - 2x2 still life
    pub fn block() -> Pattern {
        Pattern::new(
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    /// Blinker - period 2 oscillator, horizontal phase
    pub fn blinker() -> Pattern {
        Pattern::new(
            vec![
                (0, 0), (1, 0), (2, 0),
            ]
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ]
        )
    }

    /// Glider - moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }
}
