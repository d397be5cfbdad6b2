use crate::{
    news::NewsItem,
    remote::{ChannelLists, Video},
    shell::Timer,
};

/// Messages posted back to the app loop by timers, fetch tasks and the
/// audio monitor thread.
#[derive(Debug, Clone)]
pub enum Event {
    TrackStarted(usize),
    TrackEnded,
    PlaybackFailed { index: usize, reason: String },
    TimerFired(Timer),
    ChannelFetched(Result<ChannelLists, String>),
    PlaylistFetched { id: String, result: Result<Vec<Video>, String> },
    NewsFetched(Vec<NewsItem>),
}
