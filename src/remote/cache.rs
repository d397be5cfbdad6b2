use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::remote::{ChannelLists, Playlist, Video};

pub const CACHE_FILE: &str = "remote_lists.json";

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cache is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteCacheEntry {
    pub playlists: Vec<Playlist>,
    pub videos: Vec<Video>,
    /// Unix time in milliseconds.
    pub fetched_at: i64,
}

impl RemoteCacheEntry {
    pub fn new(lists: &ChannelLists, fetched_at: i64) -> Self {
        Self {
            playlists: lists.playlists.clone(),
            videos: lists.videos.clone(),
            fetched_at,
        }
    }

    /// An entry stamped in the future (clock skew) counts as fresh.
    pub fn is_fresh(&self, now: i64, ttl: Duration) -> bool {
        now - self.fetched_at < ttl.as_millis() as i64
    }

    pub fn into_lists(self) -> ChannelLists {
        ChannelLists {
            playlists: self.playlists,
            videos: self.videos,
        }
    }
}

/// One JSON blob on disk. Every failure is logged and treated as a miss.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
    ttl: Duration,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            path: path.into(),
            ttl,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self, now: i64) -> Option<ChannelLists> {
        match self.try_read().await {
            Ok(entry) if entry.is_fresh(now, self.ttl) => {
                debug!("Using cached channel lists from {}", self.path.display());
                Some(entry.into_lists())
            }
            Ok(_) => {
                debug!("Cached channel lists expired");
                if let Err(e) = tokio::fs::remove_file(&self.path).await {
                    debug!("Failed to remove expired cache: {}", e);
                }
                None
            }
            Err(e) => {
                debug!("Cache read skipped: {}", e);
                None
            }
        }
    }

    pub async fn write(&self, lists: &ChannelLists, now: i64) {
        if let Err(e) = self.try_write(&RemoteCacheEntry::new(lists, now)).await {
            debug!("Cache write skipped: {}", e);
        }
    }

    async fn try_read(&self) -> Result<RemoteCacheEntry, CacheError> {
        let raw = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&raw)?)
    }

    async fn try_write(&self, entry: &RemoteCacheEntry) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, serde_json::to_vec(entry)?).await?;
        Ok(())
    }
}
