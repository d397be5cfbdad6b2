//! The iPod menu tree. Static screens come from the catalog; the video
//! screens are built from whatever the remote lists have loaded so far.

use crate::{
    catalog::{self, ALBUM_TITLE, CONTACT_EMAIL, MERCH, SHOWS, SOCIALS, STREAMING, TRACKS},
    news::{EMPTY_MESSAGE, NewsFeed},
    remote::{LoadState, RemoteLibrary, Video},
};

pub const MAIN: &str = "main";
pub const MUSIC: &str = "music";
pub const ALBUM: &str = "music-album";
pub const PLAYER: &str = "music-player";
pub const ABOUT: &str = "about";
pub const SHOWS_LIST: &str = "shows";
pub const MERCH_LIST: &str = "merch";
pub const VIDEOS: &str = "videos";
pub const VIDEO_PLAYER: &str = "video-player";
pub const NEWS: &str = "news";
pub const CONTACT: &str = "contact";
pub const SOCIALS_LIST: &str = "contact-socials";
pub const STREAMING_LIST: &str = "contact-streaming";

pub const PLAYLIST_PREFIX: &str = "playlist:";
const SHOW_PREFIX: &str = "show-";
const MERCH_PREFIX: &str = "merch-";

pub const LOADING: &str = "Loading...";
pub const LOAD_FAILED: &str = "Unable to load videos";
pub const NO_VIDEOS: &str = "No videos yet";
pub const FALLBACK_TITLE: &str = "iPod";

const TITLES: &[(&str, &str)] = &[
    (MAIN, "Liim's iPod"),
    (MUSIC, "Music"),
    (ALBUM, ALBUM_TITLE),
    (PLAYER, "Now Playing"),
    (ABOUT, "About"),
    (SHOWS_LIST, "Shows"),
    (MERCH_LIST, "Merch"),
    (VIDEOS, "Videos"),
    (VIDEO_PLAYER, "Now Playing"),
    (NEWS, "News"),
    (CONTACT, "Contact"),
    (SOCIALS_LIST, "Socials"),
    (STREAMING_LIST, "Streaming"),
];

#[derive(Debug, Clone, PartialEq)]
pub enum ItemAction {
    Open(String),
    PlayTrack(usize),
    PlayVideo { url: String, title: String },
    Link(String),
    SwitchSkin,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: String,
    pub detail: Option<String>,
    pub action: ItemAction,
}

impl MenuItem {
    fn new(label: impl Into<String>, action: ItemAction) -> Self {
        Self {
            label: label.into(),
            detail: None,
            action,
        }
    }

    fn open(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(label, ItemAction::Open(target.into()))
    }

    fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(label, ItemAction::Link(url.into()))
    }

    fn info(label: impl Into<String>) -> Self {
        Self::new(label, ItemAction::None)
    }

    fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenBody {
    Menu(Vec<MenuItem>),
    Text(Vec<String>),
    NowPlaying,
    VideoPlayer,
}

impl ScreenBody {
    pub fn items(&self) -> &[MenuItem] {
        match self {
            ScreenBody::Menu(items) => items,
            _ => &[],
        }
    }
}

fn numbered(id: &str, prefix: &str, len: usize) -> Option<usize> {
    let n: usize = id.strip_prefix(prefix)?.parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}

pub fn playlist_id(screen: &str) -> Option<&str> {
    screen.strip_prefix(PLAYLIST_PREFIX)
}

pub fn playlist_screen(id: &str) -> String {
    format!("{PLAYLIST_PREFIX}{id}")
}

pub fn exists(id: &str, remote: &RemoteLibrary) -> bool {
    if TITLES.iter().any(|(screen, _)| *screen == id) {
        return true;
    }
    if let Some(playlist) = playlist_id(id) {
        return remote.playlist(playlist).is_some();
    }
    numbered(id, SHOW_PREFIX, SHOWS.len()).is_some() || numbered(id, MERCH_PREFIX, MERCH.len()).is_some()
}

pub fn title(id: &str, remote: &RemoteLibrary) -> String {
    if let Some(playlist) = playlist_id(id).and_then(|p| remote.playlist(p)) {
        return playlist.title.clone();
    }
    if numbered(id, SHOW_PREFIX, SHOWS.len()).is_some() {
        return "Show Details".into();
    }
    if numbered(id, MERCH_PREFIX, MERCH.len()).is_some() {
        return "Merch".into();
    }

    TITLES
        .iter()
        .find(|(screen, _)| *screen == id)
        .map(|(_, title)| (*title).to_string())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

fn video_item(video: &Video) -> MenuItem {
    MenuItem::new(
        video.title.clone(),
        ItemAction::PlayVideo {
            url: video.url(),
            title: video.title.clone(),
        },
    )
}

fn video_list<T>(state: &LoadState<T>, items: impl FnOnce(&T) -> Vec<MenuItem>) -> Vec<MenuItem> {
    match state {
        LoadState::NotLoaded | LoadState::Loading => vec![MenuItem::info(LOADING)],
        LoadState::Failed(_) => vec![MenuItem::info(LOAD_FAILED)],
        LoadState::Loaded(value) => {
            let items = items(value);
            if items.is_empty() {
                vec![MenuItem::info(NO_VIDEOS)]
            } else {
                items
            }
        }
    }
}

pub fn body(id: &str, remote: &RemoteLibrary, news: &NewsFeed) -> ScreenBody {
    let menu = match id {
        MAIN => vec![
            MenuItem::open("Music", MUSIC),
            MenuItem::open("Videos", VIDEOS),
            MenuItem::open("News", NEWS),
            MenuItem::open("Shows", SHOWS_LIST),
            MenuItem::open("Merch", MERCH_LIST),
            MenuItem::open("About", ABOUT),
            MenuItem::open("Contact", CONTACT),
            MenuItem::new("Desktop Mode", ItemAction::SwitchSkin),
        ],
        MUSIC => vec![
            MenuItem::open(ALBUM_TITLE, ALBUM).with_detail(catalog::ARTIST),
            MenuItem::open("Now Playing", PLAYER),
        ],
        ALBUM => TRACKS
            .iter()
            .enumerate()
            .map(|(i, track)| MenuItem::new(track.title, ItemAction::PlayTrack(i)))
            .collect(),
        PLAYER => return ScreenBody::NowPlaying,
        VIDEO_PLAYER => return ScreenBody::VideoPlayer,
        ABOUT => return ScreenBody::Text(catalog::ABOUT.iter().map(|l| l.to_string()).collect()),
        SHOWS_LIST => SHOWS
            .iter()
            .enumerate()
            .map(|(i, show)| MenuItem::open(show.venue, format!("{SHOW_PREFIX}{}", i + 1)).with_detail(show.date))
            .collect(),
        MERCH_LIST => MERCH
            .iter()
            .enumerate()
            .map(|(i, item)| MenuItem::open(item.name, format!("{MERCH_PREFIX}{}", i + 1)).with_detail(item.price))
            .collect(),
        VIDEOS => video_list(remote.channel(), |lists| {
            lists
                .playlists
                .iter()
                .map(|p| MenuItem::open(p.title.clone(), playlist_screen(&p.id)).with_detail(">"))
                .chain(lists.videos.iter().map(video_item))
                .collect()
        }),
        NEWS => {
            if !news.is_loaded() {
                vec![MenuItem::info(LOADING)]
            } else if news.items().is_empty() {
                vec![MenuItem::info(EMPTY_MESSAGE)]
            } else {
                news.items()
                    .iter()
                    .map(|item| MenuItem::link(item.headline.clone(), item.url.clone()).with_detail(item.source.clone()))
                    .collect()
            }
        }
        CONTACT => vec![
            MenuItem::link("Email", format!("mailto:{CONTACT_EMAIL}")).with_detail(CONTACT_EMAIL),
            MenuItem::open("Socials", SOCIALS_LIST),
            MenuItem::open("Streaming", STREAMING_LIST),
        ],
        SOCIALS_LIST => SOCIALS.iter().map(|l| MenuItem::link(l.label, l.url)).collect(),
        STREAMING_LIST => STREAMING.iter().map(|l| MenuItem::link(l.label, l.url)).collect(),
        other => {
            if let Some(playlist) = playlist_id(other) {
                video_list(remote.playlist_videos(playlist), |videos| {
                    videos.iter().map(video_item).collect()
                })
            } else if let Some(i) = numbered(other, SHOW_PREFIX, SHOWS.len()) {
                let show = &SHOWS[i];
                vec![
                    MenuItem::info(show.venue),
                    MenuItem::info(show.city),
                    MenuItem::info(format!("Date: {}", show.date)),
                    MenuItem::link("Get Tickets", show.tickets),
                ]
            } else if let Some(i) = numbered(other, MERCH_PREFIX, MERCH.len()) {
                let item = &MERCH[i];
                vec![
                    MenuItem::info(item.name),
                    MenuItem::info(item.price),
                    MenuItem::link("Buy Now", item.url),
                ]
            } else {
                Vec::new()
            }
        }
    };

    ScreenBody::Menu(menu)
}
