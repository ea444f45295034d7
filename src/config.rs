//! Startup settings and window configuration.

use macroquad::prelude::{BLACK, Color, Conf, WHITE};
use thiserror::Error;

pub const TITLE: &str = "The Game of Life";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Cell size must be a positive number of pixels, got {0}")]
    CellSize(f32),

    #[error("Frame rate must be positive, got {0}")]
    FrameRate(f32),

    #[error("Alive probability must be within [0, 1], got {0}")]
    AliveProbability(f64),
}

/// Fixed parameters of a run. There is no external config source;
/// everything comes from `Settings::default()`.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Side length of one cell in pixels
    pub cell_size: f32,
    /// Simulation steps per second
    pub frames_per_second: f32,
    /// Chance of each cell starting alive
    pub alive_probability: f64,
    pub foreground: Color,
    pub outline: Color,
    pub background: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            frames_per_second: 10.0,
            alive_probability: 0.5,
            foreground: WHITE,
            outline: BLACK,
            background: BLACK,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if !(self.frames_per_second.is_finite() && self.frames_per_second > 0.0) {
            return Err(ConfigError::FrameRate(self.frames_per_second));
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(ConfigError::AliveProbability(self.alive_probability));
        }
        Ok(())
    }
}

/// Fullscreen window at the display resolution
pub fn window_conf() -> Conf {
    Conf {
        window_title: TITLE.to_owned(),
        fullscreen: true,
        window_resizable: false,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.cell_size, 20.0);
        assert_eq!(settings.frames_per_second, 10.0);
    }

    #[test]
    fn test_rejects_zero_cell_size() {
        let settings = Settings { cell_size: 0.0, ..Default::default() };
        assert_eq!(settings.validate(), Err(ConfigError::CellSize(0.0)));
    }

    #[test]
    fn test_rejects_bad_frame_rate() {
        let settings = Settings { frames_per_second: -1.0, ..Default::default() };
        assert_eq!(settings.validate(), Err(ConfigError::FrameRate(-1.0)));
    }

    #[test]
    fn test_rejects_probability_out_of_range() {
        let settings = Settings { alive_probability: 1.5, ..Default::default() };
        assert!(matches!(settings.validate(), Err(ConfigError::AliveProbability(_))));
    }

    #[test]
    fn test_window_conf() {
        let conf = window_conf();
        assert_eq!(conf.window_title, TITLE);
        assert!(conf.fullscreen);
    }
}
