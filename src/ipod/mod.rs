//! The iPod skin: click wheel, menu tree and the now-playing screens.

pub mod layout;
pub mod nav;
pub mod screens;

use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};
use tracing::debug;

use crate::{
    audio::{
        commands::AudioCommand,
        config::AudioConfig,
        controller::{MediaController, VideoStart},
        progress::{format_remaining, format_time},
        state::PlaybackState,
    },
    catalog::TRACKS,
    shell::{Effect, Key, Library, ShellInput, Skin, Timer},
    wheel::{
        GestureState, Point, ScrollAccumulator, TapZone,
        gesture::{MENU_STEP_DEGREES, VOLUME_STEP_DEGREES},
        scroll::SCROLL_MIN_VIEWPORT_PX,
    },
};

use layout::IpodLayout;
use nav::Navigation;
use screens::{ItemAction, PLAYER, ScreenBody, VIDEO_PLAYER, VIDEOS};

pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);
pub const CLICK_ACTIVATION_DELAY: Duration = Duration::from_millis(100);

/// What the progress bar on the now-playing screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    pub ratio: f64,
    pub left: String,
    pub right: String,
    pub volume_mode: bool,
}

pub struct IpodShell {
    nav: Navigation,
    gesture: GestureState,
    scroll: ScrollAccumulator,
    layout: IpodLayout,
    media: MediaController,
    volume_shown: bool,
    volume_generation: u64,
    exit_generation: u64,
    activate_generation: u64,
    list_offset: usize,
    content_offset: usize,
}

impl IpodShell {
    pub fn new(audio: AudioConfig) -> Self {
        Self {
            nav: Navigation::new(screens::MAIN),
            gesture: GestureState::new(),
            scroll: ScrollAccumulator::default(),
            layout: IpodLayout::default(),
            media: MediaController::new(TRACKS.len(), audio),
            volume_shown: false,
            volume_generation: 0,
            exit_generation: 0,
            activate_generation: 0,
            list_offset: 0,
            content_offset: 0,
        }
    }

    pub fn handle(&mut self, input: ShellInput, now: Instant, library: &mut Library) -> Vec<Effect> {
        match input {
            ShellInput::Resize(area) => {
                self.set_viewport(area);
                Vec::new()
            }
            ShellInput::PointerDown(point) => self.pointer_down(point, now, library),
            ShellInput::PointerMove(point) => {
                let threshold = self.step_threshold();
                match self.gesture.move_to(&self.layout.wheel_geometry(), point, threshold) {
                    Some(direction) => self.rotate(direction, library),
                    None => Vec::new(),
                }
            }
            ShellInput::PointerUp(point) => {
                match self.gesture.release(&self.layout.wheel_geometry(), point, now) {
                    Some(zone) => self.tap(zone, library),
                    None => Vec::new(),
                }
            }
            ShellInput::Scroll { at, delta } => {
                if self.layout.viewport_width_px() < SCROLL_MIN_VIEWPORT_PX
                    || !self.layout.wheel_geometry().contains(at)
                {
                    return Vec::new();
                }
                match self.scroll.push(delta) {
                    Some(direction) => self.rotate(direction, library),
                    None => Vec::new(),
                }
            }
            ShellInput::Key(key) => self.key(key, library),
            ShellInput::Timer(timer) => self.timer(timer, library),
            ShellInput::TrackEnded => audio_effects(self.media.on_track_ended()),
            ShellInput::PlaybackFailed(_) => {
                self.media.on_playback_failed();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    pub fn set_viewport(&mut self, area: Rect) {
        self.layout = IpodLayout::new(area);
        self.ensure_visible();
    }

    fn pointer_down(&mut self, point: Point, now: Instant, library: &Library) -> Vec<Effect> {
        let wheel = self.layout.wheel_geometry();
        if wheel.contains(point) {
            self.gesture.press(&wheel, point, now);
            return Vec::new();
        }

        let (column, row) = point.cell();
        if !self.layout.list.contains(Position::new(column, row)) {
            return Vec::new();
        }

        let index = self.list_offset + (row - self.layout.list.y) as usize;
        if index >= self.body(library).items().len() {
            return Vec::new();
        }

        self.nav.select(index);
        self.ensure_visible();
        self.activate_generation += 1;
        vec![Effect::Schedule {
            timer: Timer::ActivateSelection(self.activate_generation),
            after: CLICK_ACTIVATION_DELAY,
        }]
    }

    fn step_threshold(&self) -> f64 {
        if self.nav.current() == PLAYER {
            VOLUME_STEP_DEGREES
        } else {
            MENU_STEP_DEGREES
        }
    }

    /// One wheel step: volume on the player, the menu cursor elsewhere.
    fn rotate(&mut self, direction: i32, library: &Library) -> Vec<Effect> {
        if self.nav.current() == PLAYER {
            self.step_volume(direction)
        } else {
            self.scroll_menu(direction, library);
            Vec::new()
        }
    }

    fn tap(&mut self, zone: TapZone, library: &mut Library) -> Vec<Effect> {
        debug!("Wheel tap: {}", zone.label());
        match zone {
            TapZone::Menu => self.go_back(),
            TapZone::Play => audio_effects(self.media.toggle()),
            TapZone::Previous => audio_effects(self.media.previous()),
            TapZone::Next => audio_effects(self.media.next()),
            TapZone::Center => self.center(library),
        }
    }

    fn center(&mut self, library: &mut Library) -> Vec<Effect> {
        match self.nav.current() {
            PLAYER => audio_effects(self.media.toggle()),
            VIDEO_PLAYER => {
                self.media.toggle_video();
                Vec::new()
            }
            _ => self.select_item(library),
        }
    }

    fn key(&mut self, key: Key, library: &mut Library) -> Vec<Effect> {
        let on_player = self.nav.current() == PLAYER;
        match key {
            Key::Up if on_player => self.step_volume(1),
            Key::Down if on_player => self.step_volume(-1),
            Key::Up => {
                self.scroll_menu(-1, library);
                Vec::new()
            }
            Key::Down => {
                self.scroll_menu(1, library);
                Vec::new()
            }
            Key::Enter | Key::Space => self.center(library),
            Key::Escape | Key::Backspace => self.go_back(),
            Key::Left => audio_effects(self.media.previous()),
            Key::Right => audio_effects(self.media.next()),
        }
    }

    fn timer(&mut self, timer: Timer, library: &mut Library) -> Vec<Effect> {
        match timer {
            Timer::VolumeDisplay(generation) if generation == self.volume_generation => {
                self.volume_shown = false;
            }
            Timer::ExitTransition(generation) if generation == self.exit_generation => {
                self.nav.clear_exiting();
            }
            Timer::ActivateSelection(generation) if generation == self.activate_generation => {
                return self.select_item(library);
            }
            _ => {}
        }
        Vec::new()
    }

    fn step_volume(&mut self, direction: i32) -> Vec<Effect> {
        let mut effects = audio_effects(self.media.step_volume(direction));
        self.volume_shown = true;
        self.volume_generation += 1;
        effects.push(Effect::Schedule {
            timer: Timer::VolumeDisplay(self.volume_generation),
            after: self.media.config().volume_display,
        });
        effects
    }

    fn scroll_menu(&mut self, direction: i32, library: &Library) {
        match self.body(library) {
            ScreenBody::Menu(items) => {
                self.nav.step(direction, items.len());
                self.ensure_visible();
            }
            ScreenBody::Text(lines) => {
                let max = lines.len().saturating_sub(self.layout.list_rows());
                self.content_offset = (self.content_offset as i64 + direction as i64).clamp(0, max as i64) as usize;
            }
            ScreenBody::NowPlaying | ScreenBody::VideoPlayer => {}
        }
    }

    fn ensure_visible(&mut self) {
        let rows = self.layout.list_rows().max(1);
        let selected = self.nav.selected();
        if selected < self.list_offset {
            self.list_offset = selected;
        } else if selected >= self.list_offset + rows {
            self.list_offset = selected + 1 - rows;
        }
    }

    fn select_item(&mut self, library: &mut Library) -> Vec<Effect> {
        let Some(item) = self.body(library).items().get(self.nav.selected()).cloned() else {
            return Vec::new();
        };

        match item.action {
            ItemAction::PlayVideo { url, title } => self.play_video(&url, &title, library),
            ItemAction::PlayTrack(index) => {
                let mut effects = audio_effects(self.media.play(index));
                effects.extend(self.navigate_to(PLAYER, library));
                effects
            }
            ItemAction::Link(url) => vec![Effect::OpenExternal(url)],
            ItemAction::Open(target) => self.navigate_to(&target, library),
            ItemAction::SwitchSkin => vec![Effect::SwitchSkin(Skin::Desktop)],
            ItemAction::None => Vec::new(),
        }
    }

    fn play_video(&mut self, url: &str, title: &str, library: &mut Library) -> Vec<Effect> {
        match self.media.play_video(url, title) {
            VideoStart::External(url) => vec![Effect::OpenExternal(url)],
            VideoStart::Embedded { embed_url, commands } => {
                let mut effects = audio_effects(commands);
                effects.push(Effect::OpenExternal(embed_url));
                effects.extend(self.navigate_to(VIDEO_PLAYER, library));
                effects
            }
        }
    }

    pub fn navigate_to(&mut self, target: &str, library: &mut Library) -> Vec<Effect> {
        if !screens::exists(target, &library.remote) {
            return Vec::new();
        }

        self.nav.push(target);
        self.list_offset = 0;
        self.content_offset = 0;
        self.ensure_visible();
        self.exit_generation += 1;

        let mut effects = vec![Effect::Schedule {
            timer: Timer::ExitTransition(self.exit_generation),
            after: EXIT_TRANSITION,
        }];

        if let Some(playlist) = screens::playlist_id(target)
            && library.remote.begin_playlist(playlist)
        {
            effects.push(Effect::FetchPlaylist(playlist.to_string()));
        }
        if target == VIDEOS && library.remote.begin_channel() {
            effects.push(Effect::FetchChannel);
        }

        effects
    }

    pub fn go_back(&mut self) -> Vec<Effect> {
        if self.nav.history().is_empty() {
            return Vec::new();
        }
        if self.nav.current() == VIDEO_PLAYER {
            self.media.stop_video();
        }

        self.nav.pop();
        self.content_offset = 0;
        self.ensure_visible();
        Vec::new()
    }

    pub fn body(&self, library: &Library) -> ScreenBody {
        screens::body(self.nav.current(), &library.remote, &library.news)
    }

    pub fn title(&self, library: &Library) -> String {
        screens::title(self.nav.current(), &library.remote)
    }

    /// ▶ while playing, ❚❚ when paused with a track loaded.
    pub fn indicator(&self) -> &'static str {
        match self.media.state() {
            PlaybackState::Playing(_) => "▶",
            PlaybackState::Paused(_) | PlaybackState::Ended(_) => "❚❚",
            PlaybackState::Stopped => "",
        }
    }

    /// `k of N` for the loaded track.
    pub fn track_number(&self) -> Option<String> {
        self.media
            .state()
            .current_track()
            .map(|index| format!("{} of {}", index + 1, TRACKS.len()))
    }

    pub fn progress_view(&self, position_ms: u64, total_ms: u64) -> ProgressView {
        if self.volume_shown {
            let volume = self.media.volume();
            return ProgressView {
                ratio: volume.level() as f64,
                left: "Volume".into(),
                right: format!("{}%", volume.percent()),
                volume_mode: true,
            };
        }

        let ratio = if total_ms == 0 {
            0.0
        } else {
            (position_ms as f64 / total_ms as f64).clamp(0.0, 1.0)
        };
        ProgressView {
            ratio,
            left: format_time(position_ms),
            right: format_remaining(position_ms, total_ms),
            volume_mode: false,
        }
    }

    pub fn nav(&self) -> &Navigation {
        &self.nav
    }

    pub fn media(&self) -> &MediaController {
        &self.media
    }

    pub fn layout(&self) -> &IpodLayout {
        &self.layout
    }

    pub fn wheel_active(&self) -> bool {
        self.gesture.is_active()
    }

    pub fn list_offset(&self) -> usize {
        self.list_offset
    }

    pub fn content_offset(&self) -> usize {
        self.content_offset
    }
}

fn audio_effects(commands: Vec<AudioCommand>) -> Vec<Effect> {
    commands.into_iter().map(Effect::Audio).collect()
}

#[cfg(test)]
mod tests;
