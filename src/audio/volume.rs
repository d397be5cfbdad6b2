/// Output level tracked independently of the audio sink, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    pub fn new(level: f32) -> Self {
        Self(level.clamp(0.0, 1.0))
    }

    pub fn level(self) -> f32 {
        self.0
    }

    /// Moves the level by `direction * step`, snapped to hundredths so that
    /// repeated steps do not drift off the grid.
    pub fn step(&mut self, direction: i32, step: f32) {
        let next = self.0 + direction as f32 * step;
        self.0 = ((next * 100.0).round() / 100.0).clamp(0.0, 1.0);
    }

    /// Cubic gain curve; equal level steps sound like equal loudness steps.
    pub fn gain(self) -> f32 {
        if self.0 == 0.0 { 0.0 } else { self.0.powi(3) }
    }

    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(0.5)
    }
}
