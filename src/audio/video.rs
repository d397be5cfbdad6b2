const EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed/";
const EMBED_PARAMS: &str = "autoplay=1&playsinline=1&rel=0&enablejsapi=1";
const ID_LEN: usize = 11;

/// Stand-in for the embedded third-party video player. It only knows what
/// was loaded and whether it was last told to play or pause.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoProxy {
    embed_url: Option<String>,
    title: Option<String>,
    playing: bool,
}

impl VideoProxy {
    pub fn load(&mut self, embed_url: String, title: String) {
        self.embed_url = Some(embed_url);
        self.title = Some(title);
        self.playing = true;
    }

    pub fn toggle(&mut self) {
        if self.embed_url.is_some() {
            self.playing = !self.playing;
        }
    }

    pub fn stop(&mut self) {
        *self = Self::default();
    }

    pub fn embed_url(&self) -> Option<&str> {
        self.embed_url.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

pub fn embed_url(video_id: &str) -> String {
    format!("{EMBED_BASE}{video_id}?{EMBED_PARAMS}")
}

/// Pulls the 11 character video id out of the usual YouTube URL shapes:
/// `youtu.be/<id>`, `watch?v=<id>`, `/embed/<id>`, `/v/<id>`, `/e/<id>`,
/// `/shorts/<id>` and `/<section>/<name>/<id>`.
pub fn extract_youtube_id(url: &str) -> Option<&str> {
    if let Some(pos) = url.find("youtu.be/") {
        return take_id(&url[pos + "youtu.be/".len()..]);
    }

    let pos = url.find("youtube.com/")?;
    let rest = &url[pos + "youtube.com/".len()..];

    for key in ["?v=", "&v="] {
        if let Some(at) = rest.find(key) {
            return take_id(&rest[at + key.len()..]);
        }
    }

    for prefix in ["embed/", "v/", "e/", "shorts/"] {
        if let Some(tail) = rest.strip_prefix(prefix) {
            return take_id(tail);
        }
    }

    let path = rest.split(['?', '#']).next().unwrap_or(rest);
    if path.matches('/').count() >= 2 {
        let last = path.rfind('/')?;
        return take_id(&path[last + 1..]);
    }

    None
}

fn take_id(tail: &str) -> Option<&str> {
    let end = tail
        .find(|c: char| matches!(c, '"' | '&' | '?' | '/') || c.is_whitespace())
        .unwrap_or(tail.len());
    let candidate = &tail[..end];
    if candidate.len() >= ID_LEN && candidate.is_char_boundary(ID_LEN) {
        Some(&candidate[..ID_LEN])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_common_shapes() {
        let id = Some("dQw4w9WgXcQ");
        assert_eq!(extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), id);
        assert_eq!(extract_youtube_id("https://www.youtube.com/watch?feature=x&v=dQw4w9WgXcQ"), id);
        assert_eq!(extract_youtube_id("https://youtu.be/dQw4w9WgXcQ?t=3"), id);
        assert_eq!(extract_youtube_id("https://www.youtube.com/embed/dQw4w9WgXcQ"), id);
        assert_eq!(extract_youtube_id("https://youtube.com/v/dQw4w9WgXcQ"), id);
        assert_eq!(extract_youtube_id("https://youtube.com/shorts/dQw4w9WgXcQ"), id);
        assert_eq!(extract_youtube_id("https://youtube.com/user/liim/dQw4w9WgXcQ"), id);
    }

    #[test]
    fn rejects_other_urls() {
        assert_eq!(extract_youtube_id("https://vimeo.com/12345678901"), None);
        assert_eq!(extract_youtube_id("https://youtu.be/short"), None);
        assert_eq!(extract_youtube_id("https://www.youtube.com/@liimlasalle"), None);
    }

    #[test]
    fn embed_url_shape() {
        assert_eq!(
            embed_url("dQw4w9WgXcQ"),
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?autoplay=1&playsinline=1&rel=0&enablejsapi=1"
        );
    }

    #[test]
    fn proxy_toggle_needs_a_video() {
        let mut proxy = VideoProxy::default();
        proxy.toggle();
        assert!(!proxy.is_playing());

        proxy.load(embed_url("dQw4w9WgXcQ"), "Mezcal".into());
        assert!(proxy.is_playing());
        proxy.toggle();
        assert!(!proxy.is_playing());

        proxy.stop();
        assert_eq!(proxy.embed_url(), None);
    }
}
