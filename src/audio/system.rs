use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use flume::Sender;
use tracing::{error, info, warn};

use crate::{
    audio::{
        commands::AudioCommand,
        playback::{PlaybackEngine, SilentEngine},
        progress::TrackProgress,
        traits::PlaybackControl,
    },
    catalog::TRACKS,
    event::events::Event,
};

/// Carries out [`AudioCommand`]s against the output and reports track
/// starts, ends and failures back to the app loop.
pub struct AudioSystem {
    engine: Arc<dyn PlaybackControl>,
    progress: Arc<TrackProgress>,
    playing: Arc<AtomicBool>,
    assets_dir: PathBuf,
    event_tx: Sender<Event>,
}

impl AudioSystem {
    pub fn new(assets_dir: PathBuf, monitor_interval: Duration, event_tx: Sender<Event>) -> Self {
        let engine: Arc<dyn PlaybackControl> = match PlaybackEngine::new() {
            Ok(engine) => Arc::new(engine),
            Err(e) => {
                warn!("Audio output unavailable, continuing silently: {}", e);
                Arc::new(SilentEngine::default())
            }
        };

        Self::with_engine(engine, assets_dir, monitor_interval, event_tx)
    }

    pub fn with_engine(
        engine: Arc<dyn PlaybackControl>,
        assets_dir: PathBuf,
        monitor_interval: Duration,
        event_tx: Sender<Event>,
    ) -> Self {
        let system = Self {
            engine,
            progress: Arc::new(TrackProgress::new()),
            playing: Arc::new(AtomicBool::new(false)),
            assets_dir,
            event_tx,
        };
        system.spawn_monitor(monitor_interval);
        system
    }

    fn spawn_monitor(&self, interval: Duration) {
        let engine = self.engine.clone();
        let progress = self.progress.clone();
        let playing = self.playing.clone();
        let event_tx = self.event_tx.clone();

        thread::spawn(move || {
            loop {
                progress.set_current_position(engine.position());

                if playing.load(Ordering::Relaxed) && engine.is_finished() {
                    playing.store(false, Ordering::Relaxed);
                    if event_tx.send(Event::TrackEnded).is_err() {
                        break;
                    }
                }

                if event_tx.is_disconnected() {
                    break;
                }
                thread::sleep(interval);
            }
        });
    }

    pub fn handle_command(&self, command: AudioCommand) {
        match command {
            AudioCommand::PlayTrack { index, gain } => self.play_track(index, gain),
            AudioCommand::Pause => {
                self.playing.store(false, Ordering::Relaxed);
                self.engine.pause();
            }
            AudioCommand::Resume => {
                self.engine.play();
                self.playing.store(true, Ordering::Relaxed);
            }
            AudioCommand::Restart => {
                if let Err(e) = self.engine.seek(Duration::ZERO) {
                    warn!("Failed to rewind track: {}", e);
                }
                self.engine.play();
                self.playing.store(true, Ordering::Relaxed);
            }
            AudioCommand::SetVolume(gain) => self.engine.set_volume(gain),
        }
    }

    fn play_track(&self, index: usize, gain: f32) {
        let Some(track) = TRACKS.get(index) else {
            warn!("No track at index {}", index);
            return;
        };

        self.playing.store(false, Ordering::Relaxed);
        self.progress.reset();
        self.engine.set_volume(gain);

        match self.engine.load(&track.path(&self.assets_dir)) {
            Ok(total) => {
                if let Some(total) = total {
                    self.progress.set_total_duration(total);
                }
                self.playing.store(true, Ordering::Relaxed);
                info!("Now playing '{}'", track.title);
                let _ = self.event_tx.send(Event::TrackStarted(index));
            }
            Err(e) => {
                error!("Failed to play '{}': {}", track.title, e);
                self.engine.stop();
                let _ = self.event_tx.send(Event::PlaybackFailed {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }

    pub fn progress(&self) -> &Arc<TrackProgress> {
        &self.progress
    }
}
