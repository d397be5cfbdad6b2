use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Position of the current track, shared between the monitor thread and the UI.
#[derive(Default, Debug)]
pub struct TrackProgress {
    current_position_millis: Arc<AtomicU64>,
    total_duration_millis: Arc<AtomicU64>,
    generation: Arc<AtomicU64>,
}

impl TrackProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current_position(&self, position: Duration) {
        self.current_position_millis
            .store(position.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn set_total_duration(&self, duration: Duration) {
        self.total_duration_millis
            .store(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// `(position, total)` in milliseconds. Total is zero when unknown.
    pub fn get_progress(&self) -> (u64, u64) {
        (
            self.current_position_millis.load(Ordering::Relaxed),
            self.total_duration_millis.load(Ordering::Relaxed),
        )
    }

    pub fn get_generation(&self) -> u64 {
        self.generation.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.set_current_position(Duration::ZERO);
        self.set_total_duration(Duration::ZERO);
    }
}

/// Formats a position as `m:ss`.
pub fn format_time(millis: u64) -> String {
    let secs = millis / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Formats the time left as `-m:ss`.
pub fn format_remaining(position: u64, total: u64) -> String {
    format!("-{}", format_time(total.saturating_sub(position)))
}
