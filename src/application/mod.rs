mod automaton;
mod clock;

pub use automaton::Automaton;
pub use clock::FrameClock;

use crate::rendering::{CellStyle, Surface};

/// The per-frame callbacks the host loop drives.
pub trait Simulation {
    /// Advance the simulation by one step
    fn on_tick(&mut self);

    /// Draw the current state
    fn on_render(&self, surface: &mut dyn Surface, style: &CellStyle);
}

/// One pass of the frame loop: tick if the clock is due, then draw.
/// Returns whether a tick happened.
pub fn drive_frame<S: Simulation + ?Sized>(
    simulation: &mut S,
    clock: &mut FrameClock,
    delta_time: f32,
    surface: &mut dyn Surface,
    style: &CellStyle,
) -> bool {
    let ticked = clock.advance(delta_time);
    if ticked {
        simulation.on_tick();
    }
    simulation.on_render(surface, style);
    ticked
}
