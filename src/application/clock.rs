/// Paces simulation steps against a variable render frame time.
#[derive(Clone, Debug)]
pub struct FrameClock {
    interval: f32,
    accumulator: f32,
}

impl FrameClock {
    /// `steps_per_second` must be positive; settings validation guarantees it.
    pub fn new(steps_per_second: f32) -> Self {
        Self {
            interval: 1.0 / steps_per_second,
            accumulator: 0.0,
        }
    }

    pub const fn interval(&self) -> f32 {
        self.interval
    }

    /// Feed one frame's elapsed seconds; true when a step is due.
    /// At most one step fires per frame, and a long stall carries over
    /// at most one extra interval instead of queuing a burst.
    pub fn advance(&mut self, delta_time: f32) -> bool {
        self.accumulator += delta_time.max(0.0);
        if self.accumulator < self.interval {
            return false;
        }
        self.accumulator = (self.accumulator - self.interval).min(self.interval);
        true
    }
}
