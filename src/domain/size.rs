/// Grid dimensions in cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// How many whole cells of `cell_size` fit on a screen.
    /// Negative or non-finite extents yield zero cells along that axis.
    pub fn from_screen(screen_width: f32, screen_height: f32, cell_size: f32) -> Self {
        Self {
            width: cells_along(screen_width, cell_size),
            height: cells_along(screen_height, cell_size),
        }
    }

    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

fn cells_along(extent: f32, cell_size: f32) -> usize {
    if !extent.is_finite() || !cell_size.is_finite() || extent <= 0.0 || cell_size <= 0.0 {
        return 0;
    }
    (extent / cell_size).floor() as usize
}
