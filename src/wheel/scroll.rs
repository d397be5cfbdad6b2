use super::gesture::accumulate;

/// Mouse-wheel distance needed for one step.
pub const SCROLL_STEP_DELTA: f64 = 25.0;
/// Distance reported for a single notch of the terminal's scroll wheel.
pub const SCROLL_NOTCH_DELTA: f64 = 33.0;
/// Scroll-to-rotate only makes sense with a real mouse on a wide display.
pub const SCROLL_MIN_VIEWPORT_PX: f64 = 1025.0;

#[derive(Debug, Clone, Default)]
pub struct ScrollAccumulator {
    accumulated: f64,
}

impl ScrollAccumulator {
    pub fn push(&mut self, delta: f64) -> Option<i32> {
        let (accumulated, step) = accumulate(self.accumulated, delta, SCROLL_STEP_DELTA);
        self.accumulated = accumulated;
        step
    }
}
