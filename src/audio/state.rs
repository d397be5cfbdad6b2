/// Transport state of the single audio output. The index points into the
/// album track list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing(usize),
    Paused(usize),
    /// The last track ran out. Playing again starts it over.
    Ended(usize),
}

impl PlaybackState {
    pub fn current_track(self) -> Option<usize> {
        match self {
            PlaybackState::Playing(index) | PlaybackState::Paused(index) | PlaybackState::Ended(index) => {
                Some(index)
            }
            PlaybackState::Stopped => None,
        }
    }

    pub fn is_playing(self) -> bool {
        matches!(self, PlaybackState::Playing(_))
    }
}
