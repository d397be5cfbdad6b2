use ratatui::{
    crossterm::event::{KeyEvent, KeyEventKind, MouseEvent},
    layout::Rect,
};
use tracing::{debug, info, warn};

use crate::{
    event::events::Event,
    news::load_news,
    remote::loader::{load_channel, load_playlist},
    shell::{Effect, ShellInput, Timer},
    ui::{
        app::App,
        input::{InputAction, InputHandler},
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await
            && Self::handle_event(app, evt, tui).await?
        {
            should_render = true;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub async fn handle_event(app: &mut App, evt: TerminalEvent, tui: &mut Tui) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {
                let size = tui.size()?;
                app.dispatch(ShellInput::Resize(Rect::new(0, 0, size.width, size.height)));
                for effect in app.shell.start() {
                    Self::apply_effect(app, effect);
                }
            }
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Resize(width, height) => {
                app.dispatch(ShellInput::Resize(Rect::new(0, 0, width, height)));
            }
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse),
            TerminalEvent::Tick => {
                return Ok(app.has_focus);
            }
        }

        Ok(true)
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        let input = match evt {
            Event::TrackStarted(index) => ShellInput::TrackStarted(index),
            Event::TrackEnded => ShellInput::TrackEnded,
            Event::PlaybackFailed { index, reason } => {
                warn!("Track {} failed to play: {}", index, reason);
                ShellInput::PlaybackFailed(index)
            }
            Event::TimerFired(timer) => ShellInput::Timer(timer),
            Event::ChannelFetched(result) => ShellInput::ChannelLoaded(result),
            Event::PlaylistFetched { id, result } => ShellInput::PlaylistLoaded { id, result },
            Event::NewsFetched(items) => ShellInput::NewsLoaded(items),
        };
        app.dispatch(input);
    }

    /// Carries out one side effect requested by the shell. Nothing here
    /// blocks the loop; results come back as [`Event`]s.
    pub fn apply_effect(app: &mut App, effect: Effect) {
        match effect {
            Effect::Audio(command) => app.audio_system.handle_command(command),
            Effect::Schedule { timer, after } => {
                let tx = app.event_tx.clone();
                app.task_manager.spawn(
                    timer_key(timer),
                    tokio::spawn(async move {
                        tokio::time::sleep(after).await;
                        let _ = tx.send(Event::TimerFired(timer));
                    }),
                );
            }
            Effect::FetchChannel => {
                let source = app.source.clone();
                let cache = app.cache.clone();
                let tx = app.event_tx.clone();
                app.task_manager.spawn(
                    "fetch_channel",
                    tokio::spawn(async move {
                        let result = load_channel(source.as_ref(), &cache).await.map_err(|e| {
                            warn!("Failed to load channel lists: {}", e);
                            e.to_string()
                        });
                        let _ = tx.send(Event::ChannelFetched(result));
                    }),
                );
            }
            Effect::FetchPlaylist(id) => {
                let source = app.source.clone();
                let tx = app.event_tx.clone();
                app.task_manager.spawn(
                    &format!("fetch_playlist:{id}"),
                    tokio::spawn(async move {
                        let result = load_playlist(source.as_ref(), &id).await.map_err(|e| {
                            warn!("Failed to load playlist {}: {}", id, e);
                            e.to_string()
                        });
                        let _ = tx.send(Event::PlaylistFetched { id, result });
                    }),
                );
            }
            Effect::LoadNews => {
                let path = app.config.news_path();
                let tx = app.event_tx.clone();
                app.task_manager.spawn(
                    "load_news",
                    tokio::spawn(async move {
                        let _ = tx.send(Event::NewsFetched(load_news(&path).await));
                    }),
                );
            }
            Effect::OpenExternal(url) => {
                info!("Opening {}", url);
                if let Err(e) = open::that_detached(&url) {
                    warn!("Failed to open {}: {}", url, e);
                }
            }
            Effect::SwitchSkin(skin) => debug!("Skin switch to {} already applied", skin),
        }
    }

    fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        match InputHandler::handle_key(evt) {
            Some(InputAction::Quit) => app.should_quit = true,
            Some(InputAction::Shell(input)) => app.dispatch(input),
            None => {}
        }
    }

    fn handle_mouse_event(app: &mut App, evt: MouseEvent) {
        if let Some(input) = InputHandler::handle_mouse(evt) {
            app.dispatch(input);
        }
    }
}

/// One pending task per timer kind; a newer schedule replaces the older one.
fn timer_key(timer: Timer) -> &'static str {
    match timer {
        Timer::VolumeDisplay(_) => "timer_volume",
        Timer::ExitTransition(_) => "timer_exit",
        Timer::ActivateSelection(_) => "timer_activate",
        Timer::BootFade(_) => "timer_boot_fade",
        Timer::BootDone(_) => "timer_boot_done",
    }
}
