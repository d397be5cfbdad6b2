//! Remote playlist and video lists for the Videos screens.

pub mod cache;
pub mod error;
pub mod filter;
pub mod loader;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use error::RemoteError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub published_at: Option<DateTime<Utc>>,
    pub thumbnail: Option<String>,
}

impl Video {
    pub fn url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub published_at: Option<DateTime<Utc>>,
    pub thumbnail: Option<String>,
}

/// Everything fetched up front for a channel: its playlists (videos are
/// loaded later, per playlist) and every upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelLists {
    pub playlists: Vec<Playlist>,
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    NotLoaded,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    /// Moves to `Loading` unless a load is running or already succeeded.
    /// Returns whether a fetch should be started.
    fn begin(&mut self) -> bool {
        match self {
            LoadState::NotLoaded | LoadState::Failed(_) => {
                *self = LoadState::Loading;
                true
            }
            LoadState::Loading | LoadState::Loaded(_) => false,
        }
    }

    fn finish(&mut self, result: Result<T, String>) {
        *self = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(reason) => LoadState::Failed(reason),
        };
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// In-memory view of the remote lists shared by both skins.
#[derive(Debug, Default)]
pub struct RemoteLibrary {
    channel: LoadState<ChannelLists>,
    playlists: HashMap<String, LoadState<Vec<Video>>>,
}

impl RemoteLibrary {
    pub fn channel(&self) -> &LoadState<ChannelLists> {
        &self.channel
    }

    pub fn begin_channel(&mut self) -> bool {
        self.channel.begin()
    }

    pub fn finish_channel(&mut self, result: Result<ChannelLists, String>) {
        self.channel.finish(result);
    }

    pub fn playlist(&self, id: &str) -> Option<&Playlist> {
        self.channel
            .loaded()?
            .playlists
            .iter()
            .find(|playlist| playlist.id == id)
    }

    pub fn playlist_videos(&self, id: &str) -> &LoadState<Vec<Video>> {
        const NOT_LOADED: &LoadState<Vec<Video>> = &LoadState::NotLoaded;
        self.playlists.get(id).unwrap_or(NOT_LOADED)
    }

    pub fn begin_playlist(&mut self, id: &str) -> bool {
        self.playlists.entry(id.to_string()).or_default().begin()
    }

    /// Results are applied even if the user has since navigated away.
    pub fn finish_playlist(&mut self, id: &str, result: Result<Vec<Video>, String>) {
        self.playlists.entry(id.to_string()).or_default().finish(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> Video {
        Video {
            id: id.into(),
            title: id.into(),
            published_at: None,
            thumbnail: None,
        }
    }

    #[test]
    fn playlist_loads_once_and_retries_after_failure() {
        let mut library = RemoteLibrary::default();
        assert!(library.begin_playlist("PL1"));
        assert!(!library.begin_playlist("PL1"));

        library.finish_playlist("PL1", Err("quota".into()));
        assert_eq!(library.playlist_videos("PL1"), &LoadState::Failed("quota".into()));
        assert!(library.begin_playlist("PL1"));

        library.finish_playlist("PL1", Ok(vec![video("a")]));
        assert!(!library.begin_playlist("PL1"));
        assert_eq!(library.playlist_videos("PL1").loaded().map(Vec::len), Some(1));
    }

    #[test]
    fn playlists_are_found_in_channel_lists() {
        let mut library = RemoteLibrary::default();
        assert!(library.playlist("PL1").is_none());

        library.begin_channel();
        library.finish_channel(Ok(ChannelLists {
            playlists: vec![Playlist {
                id: "PL1".into(),
                title: "Live".into(),
                published_at: None,
                thumbnail: None,
            }],
            videos: vec![],
        }));
        assert_eq!(library.playlist("PL1").map(|p| p.title.as_str()), Some("Live"));
        assert_eq!(library.playlist_videos("PL2"), &LoadState::NotLoaded);
    }

    #[test]
    fn watch_url() {
        assert_eq!(video("abcdefghijk").url(), "https://www.youtube.com/watch?v=abcdefghijk");
    }
}
