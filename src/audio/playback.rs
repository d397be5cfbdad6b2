use std::{
    fs::File,
    io,
    path::Path,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::audio::{
    error::AudioError,
    traits::PlaybackControl,
    util::open_output,
};

pub struct PlaybackEngine {
    _stream: OutputStream,
    sink: Arc<Sink>,
}

impl PlaybackEngine {
    pub fn new() -> Result<Self, AudioError> {
        let (stream, sink) = open_output()?;

        Ok(Self {
            _stream: stream,
            sink: Arc::new(sink),
        })
    }
}

impl PlaybackControl for PlaybackEngine {
    fn load(&self, path: &Path) -> Result<Option<Duration>, AudioError> {
        let file = File::open(path).map_err(|e| AudioError::missing(path, e))?;
        let decoder = Decoder::try_from(file).map_err(|e| AudioError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let total = decoder.total_duration();

        self.sink.stop();
        self.sink.append(decoder);
        self.sink.play();

        Ok(total)
    }

    fn play(&self) {
        self.sink.play();
    }

    fn pause(&self) {
        self.sink.pause();
    }

    fn stop(&self) {
        self.sink.stop();
    }

    fn seek(&self, position: Duration) -> Result<(), AudioError> {
        self.sink
            .try_seek(position)
            .map_err(|e| AudioError::Seek(e.to_string()))
    }

    fn set_volume(&self, volume: f32) {
        self.sink.set_volume(volume);
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }
}

#[derive(Debug, Default)]
struct SilentClock {
    loaded: bool,
    elapsed: Duration,
    resumed_at: Option<Instant>,
}

impl SilentClock {
    fn position(&self) -> Duration {
        self.elapsed + self.resumed_at.map(|at| at.elapsed()).unwrap_or_default()
    }
}

/// Stands in when no output device is available. It keeps the transport
/// moving so the player still behaves, but nothing is heard and tracks
/// never end on their own.
#[derive(Debug, Default)]
pub struct SilentEngine {
    clock: Mutex<SilentClock>,
}

impl SilentEngine {
    fn with_clock<R>(&self, f: impl FnOnce(&mut SilentClock) -> R) -> R {
        let mut clock = self.clock.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut clock)
    }
}

impl PlaybackControl for SilentEngine {
    fn load(&self, path: &Path) -> Result<Option<Duration>, AudioError> {
        if !path.exists() {
            return Err(AudioError::missing(path, io::ErrorKind::NotFound.into()));
        }

        self.with_clock(|clock| {
            *clock = SilentClock {
                loaded: true,
                elapsed: Duration::ZERO,
                resumed_at: Some(Instant::now()),
            };
        });
        Ok(None)
    }

    fn play(&self) {
        self.with_clock(|clock| {
            if clock.loaded && clock.resumed_at.is_none() {
                clock.resumed_at = Some(Instant::now());
            }
        });
    }

    fn pause(&self) {
        self.with_clock(|clock| {
            if let Some(at) = clock.resumed_at.take() {
                clock.elapsed += at.elapsed();
            }
        });
    }

    fn stop(&self) {
        self.with_clock(|clock| *clock = SilentClock::default());
    }

    fn seek(&self, position: Duration) -> Result<(), AudioError> {
        self.with_clock(|clock| {
            clock.elapsed = position;
            if clock.resumed_at.is_some() {
                clock.resumed_at = Some(Instant::now());
            }
        });
        Ok(())
    }

    fn set_volume(&self, _volume: f32) {}

    fn position(&self) -> Duration {
        self.with_clock(|clock| clock.position())
    }

    fn is_finished(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_engine_rejects_missing_files() {
        let engine = SilentEngine::default();
        let err = engine.load(Path::new("/definitely/not/here.wav")).unwrap_err();
        assert!(matches!(err, AudioError::Missing { .. }));
        assert!(err.to_string().contains("here.wav"));
    }

    #[test]
    fn silent_engine_tracks_position() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let engine = SilentEngine::default();
        assert_eq!(engine.load(file.path()).unwrap(), None);

        engine.pause();
        engine.seek(Duration::from_secs(42)).unwrap();
        assert_eq!(engine.position(), Duration::from_secs(42));

        engine.stop();
        assert_eq!(engine.position(), Duration::ZERO);
        assert!(!engine.is_finished());
    }
}
