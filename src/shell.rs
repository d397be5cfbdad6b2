//! Skin-independent input, timers and side effects, plus the [`Shell`] that
//! routes them to the active skin.

use std::{
    fmt,
    str::FromStr,
    time::{Duration, Instant},
};

use ratatui::layout::Rect;
use tracing::info;

use crate::{
    audio::{commands::AudioCommand, config::AudioConfig},
    desktop::Desktop,
    ipod::IpodShell,
    news::{NewsFeed, NewsItem},
    remote::{ChannelLists, RemoteLibrary, Video},
    wheel::Point,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Skin {
    #[default]
    Ipod,
    Desktop,
}

impl Skin {
    pub fn other(self) -> Self {
        match self {
            Skin::Ipod => Skin::Desktop,
            Skin::Desktop => Skin::Ipod,
        }
    }
}

impl fmt::Display for Skin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Skin::Ipod => "ipod",
            Skin::Desktop => "desktop",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSkin(pub String);

impl fmt::Display for UnknownSkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown skin '{}'", self.0)
    }
}

impl std::error::Error for UnknownSkin {}

impl FromStr for Skin {
    type Err = UnknownSkin;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ipod" => Ok(Skin::Ipod),
            "desktop" | "win98" => Ok(Skin::Desktop),
            _ => Err(UnknownSkin(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Escape,
    Backspace,
}

/// Delayed work. Each carries the generation it was scheduled under; a
/// newer generation makes older timers no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    VolumeDisplay(u64),
    ExitTransition(u64),
    ActivateSelection(u64),
    BootFade(u64),
    BootDone(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShellInput {
    /// Terminal area in cells.
    Resize(Rect),
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    Scroll { at: Point, delta: f64 },
    Key(Key),
    Timer(Timer),
    TrackStarted(usize),
    TrackEnded,
    PlaybackFailed(usize),
    ChannelLoaded(Result<ChannelLists, String>),
    PlaylistLoaded { id: String, result: Result<Vec<Video>, String> },
    NewsLoaded(Vec<NewsItem>),
    SwitchSkin,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Audio(AudioCommand),
    Schedule { timer: Timer, after: Duration },
    FetchChannel,
    FetchPlaylist(String),
    LoadNews,
    OpenExternal(String),
    SwitchSkin(Skin),
}

/// Data shared by both skins.
#[derive(Debug, Default)]
pub struct Library {
    pub remote: RemoteLibrary,
    pub news: NewsFeed,
}

pub struct Shell {
    skin: Skin,
    ipod: IpodShell,
    desktop: Desktop,
    library: Library,
    viewport: Rect,
}

impl Shell {
    pub fn new(skin: Skin, audio: AudioConfig) -> Self {
        Self {
            skin,
            ipod: IpodShell::new(audio),
            desktop: Desktop::new(),
            library: Library::default(),
            viewport: Rect::default(),
        }
    }

    /// Effects to run once at startup: the remote lists and the news, plus
    /// the boot sequence when starting on the desktop.
    pub fn start(&mut self) -> Vec<Effect> {
        let mut effects = vec![Effect::LoadNews];
        if self.library.remote.begin_channel() {
            effects.push(Effect::FetchChannel);
        }
        if self.skin == Skin::Desktop {
            effects.extend(self.desktop.boot());
        }
        effects
    }

    pub fn dispatch(&mut self, input: ShellInput, now: Instant) -> Vec<Effect> {
        let effects = match input {
            ShellInput::Resize(area) => {
                self.viewport = area;
                self.ipod.set_viewport(area);
                self.desktop.set_viewport(area);
                Vec::new()
            }
            ShellInput::ChannelLoaded(result) => {
                self.library.remote.finish_channel(result);
                Vec::new()
            }
            ShellInput::PlaylistLoaded { id, result } => {
                self.library.remote.finish_playlist(&id, result);
                Vec::new()
            }
            ShellInput::NewsLoaded(items) => {
                self.library.news.set(items);
                Vec::new()
            }
            ShellInput::SwitchSkin => vec![Effect::SwitchSkin(self.skin.other())],
            ShellInput::TrackStarted(_) | ShellInput::TrackEnded | ShellInput::PlaybackFailed(_) => {
                self.ipod.handle(input, now, &mut self.library)
            }
            ShellInput::Timer(
                timer @ (Timer::VolumeDisplay(_) | Timer::ExitTransition(_) | Timer::ActivateSelection(_)),
            ) => self.ipod.handle(ShellInput::Timer(timer), now, &mut self.library),
            ShellInput::Timer(timer @ (Timer::BootFade(_) | Timer::BootDone(_))) => {
                self.desktop.handle(ShellInput::Timer(timer), now, &mut self.library)
            }
            input => match self.skin {
                Skin::Ipod => self.ipod.handle(input, now, &mut self.library),
                Skin::Desktop => self.desktop.handle(input, now, &mut self.library),
            },
        };

        let mut applied = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                Effect::SwitchSkin(skin) => applied.extend(self.switch_to(skin)),
                other => applied.push(other),
            }
        }
        applied
    }

    fn switch_to(&mut self, skin: Skin) -> Vec<Effect> {
        if skin == self.skin {
            return Vec::new();
        }

        info!("Switching to the {} skin", skin);
        self.skin = skin;
        match skin {
            Skin::Desktop => {
                self.desktop = Desktop::new();
                self.desktop.set_viewport(self.viewport);
                self.desktop.boot()
            }
            Skin::Ipod => Vec::new(),
        }
    }

    pub fn skin(&self) -> Skin {
        self.skin
    }

    pub fn ipod(&self) -> &IpodShell {
        &self.ipod
    }

    pub fn desktop(&self) -> &Desktop {
        &self.desktop
    }

    pub fn library(&self) -> &Library {
        &self.library
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_skins() {
        assert_eq!("ipod".parse::<Skin>(), Ok(Skin::Ipod));
        assert_eq!(" Desktop ".parse::<Skin>(), Ok(Skin::Desktop));
        assert_eq!("win98".parse::<Skin>(), Ok(Skin::Desktop));
        assert!("winamp".parse::<Skin>().is_err());
        assert_eq!(Skin::Desktop.to_string(), "desktop");
    }

    #[test]
    fn start_fetches_lists_once() {
        let mut shell = Shell::new(Skin::Ipod, AudioConfig::default());
        let effects = shell.start();
        assert_eq!(effects, vec![Effect::LoadNews, Effect::FetchChannel]);
    }

    #[test]
    fn switching_to_desktop_boots() {
        let mut shell = Shell::new(Skin::Ipod, AudioConfig::default());
        shell.dispatch(ShellInput::Resize(Rect::new(0, 0, 160, 48)), Instant::now());

        let effects = shell.dispatch(ShellInput::SwitchSkin, Instant::now());
        assert_eq!(shell.skin(), Skin::Desktop);
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::Schedule {
                timer: Timer::BootFade(_),
                ..
            }
        )));

        let effects = shell.dispatch(ShellInput::SwitchSkin, Instant::now());
        assert_eq!(shell.skin(), Skin::Ipod);
        assert!(effects.is_empty());
    }

    #[test]
    fn data_arrives_regardless_of_skin() {
        let mut shell = Shell::new(Skin::Desktop, AudioConfig::default());
        shell.dispatch(ShellInput::NewsLoaded(crate::news::fallback_news()), Instant::now());
        assert_eq!(shell.library().news.items().len(), 3);

        shell.dispatch(
            ShellInput::ChannelLoaded(Err("quota".into())),
            Instant::now(),
        );
        assert!(matches!(
            shell.library().remote.channel(),
            crate::remote::LoadState::Failed(_)
        ));
    }

    #[test]
    fn ipod_menu_item_switches_skin() {
        let mut shell = Shell::new(Skin::Ipod, AudioConfig::default());
        shell.dispatch(ShellInput::Resize(Rect::new(0, 0, 160, 48)), Instant::now());
        for _ in 0..7 {
            shell.dispatch(ShellInput::Key(Key::Down), Instant::now());
        }
        shell.dispatch(ShellInput::Key(Key::Enter), Instant::now());
        assert_eq!(shell.skin(), Skin::Desktop);
    }
}
