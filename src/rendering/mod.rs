use macroquad::prelude::*;

/// Something cells can be drawn on.
/// Coordinates are pixels, `(cx, cy)` is the circle center.
pub trait Surface {
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);

    fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, thickness: f32, color: Color);
}

/// The macroquad window. Only usable inside the macroquad main loop.
#[derive(Default)]
pub struct ScreenSurface;

impl ScreenSurface {
    pub fn new() -> Self {
        Self
    }

    pub fn clear(&mut self, color: Color) {
        clear_background(color);
    }
}

impl Surface for ScreenSurface {
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        draw_circle(cx, cy, radius, color);
    }

    fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, thickness: f32, color: Color) {
        draw_circle_lines(cx, cy, radius, thickness, color);
    }
}

/// Colors and geometry used to draw alive cells
#[derive(Clone, Copy, Debug)]
pub struct CellStyle {
    pub cell_size: f32,
    pub fill: Color,
    pub outline: Color,
}

impl CellStyle {
    pub const OUTLINE_THICKNESS: f32 = 1.0;

    /// Draw one cell as a circle inscribed in its grid square
    pub fn draw_cell(&self, surface: &mut dyn Surface, x: usize, y: usize) {
        let radius = self.cell_size / 2.0;
        let cx = x as f32 * self.cell_size + radius;
        let cy = y as f32 * self.cell_size + radius;

        surface.fill_circle(cx, cy, radius, self.fill);
        surface.stroke_circle(cx, cy, radius, Self::OUTLINE_THICKNESS, self.outline);
    }
}

/// Records draw calls instead of drawing them
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub fills: Vec<(f32, f32, f32, Color)>,
    pub strokes: Vec<(f32, f32, f32, Color)>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.fills.push((cx, cy, radius, color));
    }

    fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, _thickness: f32, color: Color) {
        self.strokes.push((cx, cy, radius, color));
    }
}
