//! Press coverage shown on the News screen and in the WordPad window.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

pub const EMPTY_MESSAGE: &str = "No news available at this time.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub headline: String,
    pub source: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub thumbnail: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct NewsDocument {
    #[serde(default)]
    news: Vec<NewsItem>,
}

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("Failed to read news: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed news document: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn fallback_news() -> Vec<NewsItem> {
    [
        (
            "Liim: Billboard's Hip-Hop Rookie of the Month",
            "Billboard",
            "November 2025",
            "https://www.billboard.com/music/rb-hip-hop/liim-billboard-hip-hop-rookie-of-the-month-november-2025-1236098831/",
        ),
        (
            "Liim Lasalle Opens Up on Love, Loss and His Debut Album",
            "BET",
            "2024",
            "https://www.bet.com/article/hjqjah/liim-lasalle-opens-up-on-love-loss-and-his-debut-album-liim-lasalle-loves-you",
        ),
        (
            "Liim Is Ready to Take Over New York",
            "Rolling Stone",
            "2024",
            "https://www.rollingstone.com/music/music-features/liim-new-york-rapper-debut-album-interview-1235425442/",
        ),
    ]
    .into_iter()
    .map(|(headline, source, date, url)| NewsItem {
        headline: headline.into(),
        source: source.into(),
        date: date.into(),
        thumbnail: String::new(),
        url: url.into(),
    })
    .collect()
}

pub async fn read_news(path: &Path) -> Result<Vec<NewsItem>, NewsError> {
    let raw = tokio::fs::read(path).await?;
    let document: NewsDocument = serde_json::from_slice(&raw)?;
    Ok(document.news)
}

/// Reads the news document, falling back to the built-in list on any error.
/// An empty but valid document stays empty.
pub async fn load_news(path: &Path) -> Vec<NewsItem> {
    match read_news(path).await {
        Ok(items) => {
            info!("Loaded {} news items", items.len());
            items
        }
        Err(e) => {
            warn!("Using fallback news: {}", e);
            fallback_news()
        }
    }
}

#[derive(Debug, Default)]
pub struct NewsFeed {
    items: Option<Vec<NewsItem>>,
}

impl NewsFeed {
    pub fn is_loaded(&self) -> bool {
        self.items.is_some()
    }

    pub fn set(&mut self, items: Vec<NewsItem>) {
        self.items = Some(items);
    }

    pub fn items(&self) -> &[NewsItem] {
        self.items.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_news_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news.json");
        std::fs::write(
            &path,
            r#"{"news": [{"headline": "H", "source": "S", "date": "2025", "thumbnail": "", "url": "https://example.com"}]}"#,
        )
        .unwrap();

        let items = load_news(&path).await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].source, "S");
    }

    #[tokio::test]
    async fn missing_document_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let items = load_news(&dir.path().join("absent.json")).await;
        assert_eq!(items, fallback_news());
        assert_eq!(items[0].source, "Billboard");
    }

    #[tokio::test]
    async fn empty_document_stays_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news.json");
        std::fs::write(&path, r#"{"news": []}"#).unwrap();
        assert!(load_news(&path).await.is_empty());
    }

    #[test]
    fn feed_starts_unloaded() {
        let mut feed = NewsFeed::default();
        assert!(!feed.is_loaded());
        assert!(feed.items().is_empty());
        feed.set(fallback_news());
        assert_eq!(feed.items().len(), 3);
    }
}
