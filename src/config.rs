use std::{env, path::PathBuf, time::Duration};

use tracing::warn;

use crate::shell::Skin;

/// How long fetched channel lists stay valid in the cache.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YouTubeConfig {
    pub api_key: String,
    pub channel_id: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub assets_dir: PathBuf,
    pub youtube: Option<YouTubeConfig>,
    pub cache_ttl: Duration,
    pub skin: Skin,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            youtube: None,
            cache_ttl: DEFAULT_CACHE_TTL,
            skin: Skin::Ipod,
        }
    }
}

impl AppConfig {
    /// Reads configuration from the environment (after `.env` is loaded).
    /// Missing or malformed values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let youtube = match (lookup("YOUTUBE_API_KEY"), lookup("YOUTUBE_CHANNEL_ID")) {
            (Some(api_key), Some(channel_id)) if !api_key.is_empty() && !channel_id.is_empty() => {
                Some(YouTubeConfig { api_key, channel_id })
            }
            _ => None,
        };

        let skin = match lookup("PODSHELL_SKIN") {
            Some(value) => value.parse().unwrap_or_else(|_| {
                warn!("Unknown skin '{}', using the default", value);
                defaults.skin
            }),
            None => defaults.skin,
        };

        let cache_ttl = lookup("PODSHELL_CACHE_TTL_SECS")
            .and_then(|secs| secs.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.cache_ttl);

        Self {
            assets_dir: lookup("PODSHELL_ASSETS")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            youtube,
            cache_ttl,
            skin,
        }
    }

    pub fn news_path(&self) -> PathBuf {
        self.assets_dir.join("data").join("news.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert_eq!(config.youtube, None);
        assert_eq!(config.cache_ttl, DEFAULT_CACHE_TTL);
        assert_eq!(config.skin, Skin::Ipod);
    }

    #[test]
    fn youtube_needs_both_key_and_channel() {
        assert_eq!(config_from(&[("YOUTUBE_API_KEY", "k")]).youtube, None);
        let config = config_from(&[("YOUTUBE_API_KEY", "k"), ("YOUTUBE_CHANNEL_ID", "UC1")]);
        assert_eq!(
            config.youtube,
            Some(YouTubeConfig {
                api_key: "k".into(),
                channel_id: "UC1".into()
            })
        );
    }

    #[test]
    fn skin_and_ttl_overrides() {
        let config = config_from(&[("PODSHELL_SKIN", "desktop"), ("PODSHELL_CACHE_TTL_SECS", "90")]);
        assert_eq!(config.skin, Skin::Desktop);
        assert_eq!(config.cache_ttl, Duration::from_secs(90));

        let config = config_from(&[("PODSHELL_SKIN", "winamp")]);
        assert_eq!(config.skin, Skin::Ipod);
    }

    #[test]
    fn news_lives_under_assets() {
        let config = config_from(&[("PODSHELL_ASSETS", "/srv/site")]);
        assert_eq!(config.news_path(), PathBuf::from("/srv/site/data/news.json"));
    }
}
