use std::{path::Path, time::Duration};

use crate::audio::error::AudioError;

/// The single audio output. Implementations replace whatever is loaded
/// when a new file arrives.
pub trait PlaybackControl: Send + Sync {
    /// Loads and starts the file, returning its length when the decoder knows it.
    fn load(&self, path: &Path) -> Result<Option<Duration>, AudioError>;
    fn play(&self);
    fn pause(&self);
    fn stop(&self);
    fn seek(&self, position: Duration) -> Result<(), AudioError>;
    fn set_volume(&self, volume: f32);
    fn position(&self) -> Duration;
    fn is_finished(&self) -> bool;
}
