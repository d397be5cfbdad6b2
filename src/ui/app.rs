use std::{sync::Arc, time::Instant};

use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::{info, warn};

use crate::{
    audio::{config::AudioConfig, system::AudioSystem},
    config::AppConfig,
    event::events::Event,
    http::ApiService,
    remote::{
        cache::{CACHE_FILE, CacheStore},
        loader::{ListSource, Unconfigured},
    },
    shell::{Shell, ShellInput},
    util::{log::get_cache_dir, task::TaskManager},
};

use super::{
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub shell: Shell,
    pub audio_system: AudioSystem,
    pub source: Arc<dyn ListSource>,
    pub cache: Arc<CacheStore>,
    pub config: AppConfig,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let audio = AudioConfig::default();

        let audio_system = AudioSystem::new(config.assets_dir.clone(), audio.monitor_interval, event_tx.clone());

        let source: Arc<dyn ListSource> = match config.youtube.clone() {
            Some(youtube) => match ApiService::new(youtube) {
                Ok(api) => Arc::new(api),
                Err(e) => {
                    warn!("YouTube client unavailable: {}", e);
                    Arc::new(Unconfigured)
                }
            },
            None => {
                info!("No YouTube credentials, videos will not load");
                Arc::new(Unconfigured)
            }
        };

        let cache = Arc::new(CacheStore::new(get_cache_dir().join(CACHE_FILE), config.cache_ttl));

        Ok(Self {
            event_rx,
            event_tx,
            shell: Shell::new(config.skin, audio),
            audio_system,
            source,
            cache,
            config,
            task_manager: TaskManager::new(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.mouse(true);
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui).await?;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    /// Feeds one input through the shell and carries out what it asks for.
    pub fn dispatch(&mut self, input: ShellInput) {
        let effects = self.shell.dispatch(input, Instant::now());
        for effect in effects {
            EventHandler::apply_effect(self, effect);
        }
    }

    fn ui(&self, frame: &mut Frame) {
        if self.has_focus {
            frame.render_widget(self, frame.area());
        }
    }
}
