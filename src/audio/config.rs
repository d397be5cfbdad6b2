use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AudioConfig {
    pub volume: f32,
    pub volume_step: f32,
    pub volume_display: Duration,
    pub monitor_interval: Duration,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: 0.5,
            volume_step: 0.05,
            volume_display: Duration::from_millis(1500),
            monitor_interval: Duration::from_millis(100),
        }
    }
}
