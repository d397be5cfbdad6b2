//! What each desktop window shows, as plain lines. Link lines open in the
//! system browser when clicked.

use crate::{
    catalog::{self, ALBUM_TITLE, ARTIST, CONTACT_EMAIL, MERCH, SHOWS, STREAMING, TRACKS},
    news::EMPTY_MESSAGE,
    remote::LoadState,
    shell::Library,
};

use super::wm::WindowId;

#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Heading(String),
    Text(String),
    Link { label: String, url: String },
    Blank,
}

impl Line {
    fn heading(text: impl Into<String>) -> Self {
        Line::Heading(text.into())
    }

    fn text(text: impl Into<String>) -> Self {
        Line::Text(text.into())
    }

    fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Line::Link {
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Line::Link { url, .. } => Some(url),
            _ => None,
        }
    }
}

fn playlist_url(id: &str) -> String {
    format!("https://www.youtube.com/playlist?list={id}")
}

pub fn lines(id: WindowId, library: &Library) -> Vec<Line> {
    match id {
        WindowId::About => about(),
        WindowId::Shows => shows(),
        WindowId::Merch => merch(),
        WindowId::Videos => videos(library),
        WindowId::News => news(library),
    }
}

fn about() -> Vec<Line> {
    let mut lines = vec![Line::heading(ARTIST), Line::Blank];
    lines.extend(catalog::ABOUT.iter().map(|l| Line::text(*l)));
    lines.push(Line::Blank);
    lines.push(Line::heading(format!("{ALBUM_TITLE} ({} tracks)", TRACKS.len())));
    lines.extend(STREAMING.iter().map(|l| Line::link(format!("Listen on {}", l.label), l.url)));
    lines.push(Line::Blank);
    lines.push(Line::link(format!("Contact: {CONTACT_EMAIL}"), format!("mailto:{CONTACT_EMAIL}")));
    lines
}

fn shows() -> Vec<Line> {
    let mut lines = vec![Line::heading("UPCOMING SHOWS"), Line::Blank];
    for show in SHOWS {
        lines.push(Line::text(format!("{}  {}", show.date, show.venue)));
        lines.push(Line::text(format!("    {}", show.city)));
        lines.push(Line::link("    [Get Tickets]", show.tickets));
        lines.push(Line::Blank);
    }
    lines
}

fn merch() -> Vec<Line> {
    let mut lines = vec![Line::heading("Official Merch"), Line::Blank];
    lines.extend(
        MERCH
            .iter()
            .map(|item| Line::link(format!("{}  {}", item.name, item.price), item.url)),
    );
    lines
}

fn videos(library: &Library) -> Vec<Line> {
    match library.remote.channel() {
        LoadState::NotLoaded | LoadState::Loading => vec![Line::text("Loading...")],
        LoadState::Failed(_) => vec![Line::text("Unable to load videos")],
        LoadState::Loaded(lists) => {
            let mut lines = Vec::new();
            if !lists.playlists.is_empty() {
                lines.push(Line::heading("Playlists"));
                lines.extend(lists.playlists.iter().map(|p| Line::link(&p.title, playlist_url(&p.id))));
                lines.push(Line::Blank);
            }
            lines.push(Line::heading("Videos"));
            if lists.videos.is_empty() {
                lines.push(Line::text("No videos yet"));
            }
            lines.extend(lists.videos.iter().map(|v| Line::link(&v.title, v.url())));
            lines
        }
    }
}

fn news(library: &Library) -> Vec<Line> {
    let news = &library.news;
    if !news.is_loaded() {
        return vec![Line::text("Loading...")];
    }
    if news.items().is_empty() {
        return vec![Line::text(EMPTY_MESSAGE)];
    }

    let mut lines = Vec::new();
    for item in news.items() {
        lines.push(Line::link(&item.headline, &item.url));
        lines.push(Line::text(format!("{} - {}", item.source, item.date)));
        lines.push(Line::Blank);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        news::fallback_news,
        remote::{ChannelLists, Playlist},
    };

    #[test]
    fn static_windows_have_links() {
        let library = Library::default();
        for id in [WindowId::About, WindowId::Shows, WindowId::Merch] {
            assert!(lines(id, &library).iter().any(|l| l.url().is_some()), "{id} has no links");
        }
    }

    #[test]
    fn news_window_tracks_the_feed() {
        let mut library = Library::default();
        assert_eq!(lines(WindowId::News, &library), vec![Line::text("Loading...")]);

        library.news.set(Vec::new());
        assert_eq!(lines(WindowId::News, &library), vec![Line::text(EMPTY_MESSAGE)]);

        library.news.set(fallback_news());
        let news = lines(WindowId::News, &library);
        assert_eq!(news.len(), 9);
        assert!(news[0].url().is_some_and(|url| url.contains("billboard")));
    }

    #[test]
    fn videos_window_links_to_youtube() {
        let mut library = Library::default();
        library.remote.begin_channel();
        library.remote.finish_channel(Ok(ChannelLists {
            playlists: vec![Playlist {
                id: "PL1".into(),
                title: "Live".into(),
                published_at: None,
                thumbnail: None,
            }],
            videos: vec![],
        }));

        let videos = lines(WindowId::Videos, &library);
        assert_eq!(videos[1].url(), Some("https://www.youtube.com/playlist?list=PL1"));
        assert_eq!(videos.last(), Some(&Line::text("No videos yet")));
    }
}
