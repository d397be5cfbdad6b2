pub mod model;

use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    config::YouTubeConfig,
    remote::{
        Playlist, RemoteError, Video,
        filter::parse_duration,
        loader::ListSource,
    },
};

use model::{ChannelItem, Page, PlaylistEntry, PlaylistItem, VideoItem};

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";
const PAGE_SIZE: &str = "50";
/// Upper bound on pages followed through `nextPageToken`.
const MAX_PAGES: usize = 10;

/// Read-only client for the YouTube Data API v3.
pub struct ApiService {
    client: Client,
    config: YouTubeConfig,
}

impl ApiService {
    pub fn new(config: YouTubeConfig) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            client,
            config,
        })
    }

    fn url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, RemoteError> {
        let key = [("key", self.config.api_key.as_str())];
        Url::parse_with_params(
            &format!("{API_BASE}/{endpoint}"),
            params.iter().chain(key.iter()),
        )
        .map_err(|e| RemoteError::Url(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<T, RemoteError> {
        let url = self.url(endpoint, params)?;
        debug!("GET {}", endpoint);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RemoteError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    async fn get_all<T: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Vec<T>, RemoteError> {
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;

        for _ in 0..MAX_PAGES {
            let mut query = params.to_vec();
            query.push(("maxResults", PAGE_SIZE));
            if let Some(token) = page_token.as_deref() {
                query.push(("pageToken", token));
            }

            let page: Page<T> = self.get(endpoint, &query).await?;
            items.extend(page.items);

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => return Ok(items),
            }
        }

        warn!("{} has more than {} pages, truncating", endpoint, MAX_PAGES);
        Ok(items)
    }
}

#[async_trait]
impl ListSource for ApiService {
    async fn uploads_playlist_id(&self) -> Result<String, RemoteError> {
        let page: Page<ChannelItem> = self
            .get(
                "channels",
                &[("part", "contentDetails"), ("id", self.config.channel_id.as_str())],
            )
            .await?;

        page.items
            .into_iter()
            .find_map(|item| item.content_details.related_playlists.uploads)
            .ok_or(RemoteError::MissingUploads)
    }

    async fn channel_playlists(&self) -> Result<Vec<Playlist>, RemoteError> {
        let items: Vec<PlaylistItem> = self
            .get_all(
                "playlists",
                &[("part", "snippet"), ("channelId", self.config.channel_id.as_str())],
            )
            .await?;

        Ok(items
            .into_iter()
            .map(|item| Playlist {
                thumbnail: item.snippet.thumbnails.best(),
                published_at: item.snippet.published_at,
                title: item.snippet.title,
                id: item.id,
            })
            .collect())
    }

    async fn playlist_videos(&self, playlist_id: &str) -> Result<Vec<Video>, RemoteError> {
        let entries: Vec<PlaylistEntry> = self
            .get_all(
                "playlistItems",
                &[("part", "snippet,contentDetails"), ("playlistId", playlist_id)],
            )
            .await?;

        Ok(entries
            .into_iter()
            .filter_map(|entry| {
                let details = entry.content_details;
                let id = details
                    .as_ref()
                    .map(|d| d.video_id.clone())
                    .or_else(|| entry.snippet.resource_id.and_then(|r| r.video_id))?;
                let published_at = details
                    .and_then(|d| d.video_published_at)
                    .or(entry.snippet.published_at);

                Some(Video {
                    id,
                    title: entry.snippet.title,
                    published_at,
                    thumbnail: entry.snippet.thumbnails.best(),
                })
            })
            .collect())
    }

    async fn video_durations(&self, ids: &[String]) -> Result<HashMap<String, Duration>, RemoteError> {
        let joined = ids.join(",");
        let page: Page<VideoItem> = self
            .get("videos", &[("part", "contentDetails"), ("id", joined.as_str())])
            .await?;

        Ok(page
            .items
            .into_iter()
            .filter_map(|item| {
                let length = item
                    .content_details
                    .and_then(|d| d.duration)
                    .and_then(|d| parse_duration(&d))?;
                Some((item.id, length))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ApiService {
        ApiService::new(YouTubeConfig {
            api_key: "secret".into(),
            channel_id: "UC123".into(),
        })
        .unwrap()
    }

    #[test]
    fn builds_query_with_key() {
        let url = service()
            .url("playlistItems", &[("part", "snippet,contentDetails"), ("playlistId", "PL 1")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/youtube/v3/playlistItems?part=snippet%2CcontentDetails&playlistId=PL+1&key=secret"
        );
    }

    #[test]
    fn duration_lookup_joins_ids() {
        let ids = ["a1".to_string(), "b2".to_string()].join(",");
        let url = service()
            .url("videos", &[("part", "contentDetails"), ("id", ids.as_str())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/youtube/v3/videos?part=contentDetails&id=a1%2Cb2&key=secret"
        );
    }
}
