use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use game_of_life::{
    Automaton, FrameClock, GridSize, Settings,
    application::drive_frame,
    config::window_conf,
    input::{self, KeyAction},
    rendering::{CellStyle, ScreenSurface},
};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();

    let settings = Settings::default();
    if let Err(err) = settings.validate() {
        error!(%err, "invalid settings");
        std::process::exit(1);
    }

    show_mouse(false);

    // Fullscreen dimensions are only reliable once the first frame has been presented
    next_frame().await;
    let size = GridSize::from_screen(screen_width(), screen_height(), settings.cell_size);
    info!(
        screen_width = screen_width(),
        screen_height = screen_height(),
        width = size.width,
        height = size.height,
        "starting"
    );

    let mut automaton = Automaton::new(size, settings.alive_probability);
    let mut clock = FrameClock::new(settings.frames_per_second);
    let mut surface = ScreenSurface::new();
    let style = CellStyle {
        cell_size: settings.cell_size,
        fill: settings.foreground,
        outline: settings.outline,
    };

    'frames: loop {
        // Keys are handled before the tick so a reset never lands mid-step
        for action in input::pressed_actions() {
            match action {
                KeyAction::Quit => break 'frames,
                KeyAction::Regenerate => automaton.reset(),
            }
        }

        surface.clear(settings.background);
        drive_frame(&mut automaton, &mut clock, get_frame_time(), &mut surface, &style);

        next_frame().await;
    }

    info!(generation = automaton.generation(), "quitting");
}
