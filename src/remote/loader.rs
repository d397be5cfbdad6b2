use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::remote::{
    ChannelLists, Playlist, RemoteError, Video,
    cache::CacheStore,
    filter::{drop_short_videos, newest_first},
};

/// How many ids a single duration lookup may carry.
pub const DURATION_BATCH: usize = 50;

#[async_trait]
pub trait ListSource: Send + Sync {
    async fn uploads_playlist_id(&self) -> Result<String, RemoteError>;
    async fn channel_playlists(&self) -> Result<Vec<Playlist>, RemoteError>;
    async fn playlist_videos(&self, playlist_id: &str) -> Result<Vec<Video>, RemoteError>;
    /// Looks up lengths for at most [`DURATION_BATCH`] ids in one request.
    async fn video_durations(&self, ids: &[String]) -> Result<HashMap<String, Duration>, RemoteError>;
}

/// Loads the channel's playlists and uploads, preferring a fresh cache entry.
pub async fn load_channel(source: &dyn ListSource, cache: &CacheStore) -> Result<ChannelLists, RemoteError> {
    if let Some(lists) = cache.read(Utc::now().timestamp_millis()).await {
        return Ok(lists);
    }

    let uploads = source.uploads_playlist_id().await?;
    let mut playlists = source.channel_playlists().await?;
    newest_first(&mut playlists, |p| p.published_at);
    let videos = load_playlist(source, &uploads).await?;

    info!(
        "Fetched {} playlists and {} videos",
        playlists.len(),
        videos.len()
    );

    let lists = ChannelLists { playlists, videos };
    cache.write(&lists, Utc::now().timestamp_millis()).await;
    Ok(lists)
}

/// Loads one playlist's videos, without Shorts, newest first.
pub async fn load_playlist(source: &dyn ListSource, playlist_id: &str) -> Result<Vec<Video>, RemoteError> {
    let videos = source.playlist_videos(playlist_id).await?;
    let ids: Vec<String> = videos.iter().map(|v| v.id.clone()).collect();

    let mut durations = HashMap::new();
    for batch in ids.chunks(DURATION_BATCH) {
        match source.video_durations(batch).await {
            Ok(found) => durations.extend(found),
            Err(e) => warn!("Duration lookup failed, keeping {} videos: {}", batch.len(), e),
        }
    }

    let mut videos = drop_short_videos(videos, &durations);
    newest_first(&mut videos, |v| v.published_at);
    Ok(videos)
}

/// Used when no API key or channel is configured.
pub struct Unconfigured;

#[async_trait]
impl ListSource for Unconfigured {
    async fn uploads_playlist_id(&self) -> Result<String, RemoteError> {
        Err(RemoteError::NotConfigured)
    }

    async fn channel_playlists(&self) -> Result<Vec<Playlist>, RemoteError> {
        Err(RemoteError::NotConfigured)
    }

    async fn playlist_videos(&self, _playlist_id: &str) -> Result<Vec<Video>, RemoteError> {
        Err(RemoteError::NotConfigured)
    }

    async fn video_durations(&self, _ids: &[String]) -> Result<HashMap<String, Duration>, RemoteError> {
        Err(RemoteError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    struct FakeSource {
        videos: Vec<Video>,
        durations: HashMap<String, Duration>,
        fail_durations: bool,
        batches: Mutex<Vec<usize>>,
        channel_calls: AtomicUsize,
    }

    impl FakeSource {
        fn new(videos: Vec<Video>) -> Self {
            Self {
                videos,
                durations: HashMap::new(),
                fail_durations: false,
                batches: Mutex::new(Vec::new()),
                channel_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ListSource for FakeSource {
        async fn uploads_playlist_id(&self) -> Result<String, RemoteError> {
            self.channel_calls.fetch_add(1, Ordering::SeqCst);
            Ok("UU1".into())
        }

        async fn channel_playlists(&self) -> Result<Vec<Playlist>, RemoteError> {
            Ok(vec![
                Playlist {
                    id: "PL_old".into(),
                    title: "Old".into(),
                    published_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).single(),
                    thumbnail: None,
                },
                Playlist {
                    id: "PL_new".into(),
                    title: "New".into(),
                    published_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single(),
                    thumbnail: None,
                },
            ])
        }

        async fn playlist_videos(&self, _playlist_id: &str) -> Result<Vec<Video>, RemoteError> {
            Ok(self.videos.clone())
        }

        async fn video_durations(&self, ids: &[String]) -> Result<HashMap<String, Duration>, RemoteError> {
            self.batches.lock().unwrap().push(ids.len());
            if self.fail_durations {
                return Err(RemoteError::Api {
                    status: 403,
                    message: "quotaExceeded".into(),
                });
            }
            Ok(ids
                .iter()
                .filter_map(|id| self.durations.get(id).map(|d| (id.clone(), *d)))
                .collect())
        }
    }

    fn video(id: &str, day: u32) -> Video {
        Video {
            id: id.into(),
            title: id.into(),
            published_at: Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).single(),
            thumbnail: None,
        }
    }

    #[tokio::test]
    async fn filters_shorts_and_sorts() {
        let mut source = FakeSource::new(vec![video("old", 1), video("short", 2), video("new", 3)]);
        source.durations.insert("short".into(), Duration::from_secs(30));
        source.durations.insert("old".into(), Duration::from_secs(200));

        let videos = load_playlist(&source, "PL").await.unwrap();
        let ids: Vec<_> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["new", "old"]);
    }

    #[tokio::test]
    async fn duration_lookups_are_batched() {
        let videos = (0..120).map(|i| video(&format!("v{i}"), 1)).collect();
        let source = FakeSource::new(videos);

        let loaded = load_playlist(&source, "PL").await.unwrap();
        assert_eq!(loaded.len(), 120);
        assert_eq!(*source.batches.lock().unwrap(), vec![50, 50, 20]);
    }

    #[tokio::test]
    async fn failed_duration_lookup_keeps_everything() {
        let mut source = FakeSource::new(vec![video("a", 1), video("b", 2)]);
        source.fail_durations = true;
        source.durations.insert("a".into(), Duration::from_secs(5));

        let loaded = load_playlist(&source, "PL").await.unwrap();
        assert_eq!(loaded.len(), 2);
    }

    #[tokio::test]
    async fn channel_is_served_from_cache_on_second_load() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CacheStore::new(dir.path().join("lists.json"), Duration::from_secs(3600));
        let source = FakeSource::new(vec![video("a", 1)]);

        let first = load_channel(&source, &cache).await.unwrap();
        assert_eq!(first.playlists[0].id, "PL_new");
        assert_eq!(first.videos.len(), 1);

        let second = load_channel(&source, &cache).await.unwrap();
        assert_eq!(second, first);
        assert_eq!(source.channel_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unconfigured_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CacheStore::new(dir.path().join("lists.json"), Duration::from_secs(3600));
        let err = load_channel(&Unconfigured, &cache).await.unwrap_err();
        assert!(matches!(err, RemoteError::NotConfigured));
    }
}
