use tracing::debug;

use crate::audio::{
    commands::AudioCommand,
    config::AudioConfig,
    state::PlaybackState,
    video::{VideoProxy, embed_url, extract_youtube_id},
    volume::Volume,
};

/// Result of asking the controller to play a video.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoStart {
    /// The video was loaded into the embedded player.
    Embedded {
        embed_url: String,
        commands: Vec<AudioCommand>,
    },
    /// Not a recognizable YouTube link; hand it to the browser as-is.
    External(String),
}

/// Owns the transport state of the one audio output and the video proxy.
/// Methods return the commands the audio system has to carry out.
pub struct MediaController {
    state: PlaybackState,
    volume: Volume,
    config: AudioConfig,
    video: VideoProxy,
    track_count: usize,
}

impl MediaController {
    pub fn new(track_count: usize, config: AudioConfig) -> Self {
        Self {
            state: PlaybackState::Stopped,
            volume: Volume::new(config.volume),
            config,
            video: VideoProxy::default(),
            track_count,
        }
    }

    pub fn play(&mut self, index: usize) -> Vec<AudioCommand> {
        if index >= self.track_count {
            return Vec::new();
        }

        debug!("Playing track {}", index);
        self.state = PlaybackState::Playing(index);
        vec![AudioCommand::PlayTrack {
            index,
            gain: self.volume.gain(),
        }]
    }

    pub fn toggle(&mut self) -> Vec<AudioCommand> {
        match self.state {
            PlaybackState::Stopped => self.play(0),
            PlaybackState::Ended(index) => self.play(index),
            PlaybackState::Playing(index) => {
                self.state = PlaybackState::Paused(index);
                vec![AudioCommand::Pause]
            }
            PlaybackState::Paused(index) => {
                self.state = PlaybackState::Playing(index);
                vec![AudioCommand::Resume]
            }
        }
    }

    pub fn next(&mut self) -> Vec<AudioCommand> {
        match self.state.current_track() {
            Some(index) if index + 1 < self.track_count => self.play(index + 1),
            _ => Vec::new(),
        }
    }

    /// Goes to the previous track, or back to the start of the first one.
    pub fn previous(&mut self) -> Vec<AudioCommand> {
        match self.state.current_track() {
            Some(0) => vec![AudioCommand::Restart],
            Some(index) => self.play(index - 1),
            None => Vec::new(),
        }
    }

    pub fn on_track_ended(&mut self) -> Vec<AudioCommand> {
        match self.state.current_track() {
            Some(index) if index + 1 < self.track_count => self.play(index + 1),
            Some(index) => {
                self.state = PlaybackState::Ended(index);
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// The output could not start the track; keep it selected but paused.
    pub fn on_playback_failed(&mut self) {
        if let Some(index) = self.state.current_track() {
            self.state = PlaybackState::Paused(index);
        }
    }

    pub fn step_volume(&mut self, direction: i32) -> Vec<AudioCommand> {
        self.volume.step(direction, self.config.volume_step);
        vec![AudioCommand::SetVolume(self.volume.gain())]
    }

    /// Loads a video into the embedded player and pauses the audio. Playing
    /// audio afterwards does not stop the video.
    pub fn play_video(&mut self, url: &str, title: &str) -> VideoStart {
        let Some(video_id) = extract_youtube_id(url) else {
            return VideoStart::External(url.to_string());
        };

        let embed = embed_url(video_id);
        self.video.load(embed.clone(), title.to_string());

        let mut commands = Vec::new();
        if let PlaybackState::Playing(index) = self.state {
            self.state = PlaybackState::Paused(index);
            commands.push(AudioCommand::Pause);
        }

        VideoStart::Embedded {
            embed_url: embed,
            commands,
        }
    }

    pub fn toggle_video(&mut self) {
        self.video.toggle();
    }

    pub fn stop_video(&mut self) {
        self.video.stop();
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn video(&self) -> &VideoProxy {
        &self.video
    }

    pub fn track_count(&self) -> usize {
        self.track_count
    }

    pub fn config(&self) -> &AudioConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> MediaController {
        MediaController::new(3, AudioConfig::default())
    }

    #[test]
    fn toggle_with_nothing_loaded_plays_first_track() {
        let mut c = controller();
        let cmds = c.toggle();
        assert_eq!(c.state(), PlaybackState::Playing(0));
        assert!(matches!(cmds[..], [AudioCommand::PlayTrack { index: 0, .. }]));

        assert_eq!(c.toggle(), vec![AudioCommand::Pause]);
        assert_eq!(c.state(), PlaybackState::Paused(0));
        assert_eq!(c.toggle(), vec![AudioCommand::Resume]);
    }

    #[test]
    fn play_out_of_range_is_ignored() {
        let mut c = controller();
        assert!(c.play(3).is_empty());
        assert_eq!(c.state(), PlaybackState::Stopped);
    }

    #[test]
    fn next_stops_at_last_track() {
        let mut c = controller();
        c.play(2);
        assert!(c.next().is_empty());
        assert_eq!(c.state(), PlaybackState::Playing(2));
    }

    #[test]
    fn previous_on_first_track_restarts() {
        let mut c = controller();
        c.play(1);
        c.previous();
        assert_eq!(c.state(), PlaybackState::Playing(0));
        assert_eq!(c.previous(), vec![AudioCommand::Restart]);
    }

    #[test]
    fn track_end_advances_then_stops() {
        let mut c = controller();
        c.play(1);
        c.on_track_ended();
        assert_eq!(c.state(), PlaybackState::Playing(2));
        assert!(c.on_track_ended().is_empty());
        assert_eq!(c.state(), PlaybackState::Ended(2));

        // The sink is drained, so play has to load the track again.
        assert!(matches!(c.toggle()[..], [AudioCommand::PlayTrack { index: 2, .. }]));
        assert_eq!(c.state(), PlaybackState::Playing(2));
        assert_eq!(c.toggle(), vec![AudioCommand::Pause]);
    }

    #[test]
    fn transport_after_album_end() {
        let mut c = MediaController::new(2, AudioConfig::default());
        c.play(1);
        c.on_track_ended();
        assert!(c.next().is_empty());
        assert_eq!(c.state(), PlaybackState::Ended(1));
        assert!(matches!(c.previous()[..], [AudioCommand::PlayTrack { index: 0, .. }]));
    }

    #[test]
    fn play_uses_cubic_gain() {
        let mut c = controller();
        c.step_volume(-1);
        c.step_volume(-1);
        c.step_volume(-1);
        match c.play(0).as_slice() {
            [AudioCommand::PlayTrack { gain, .. }] => assert!((gain - 0.042875).abs() < 1e-5),
            other => panic!("unexpected commands {other:?}"),
        }
    }

    #[test]
    fn video_pauses_audio_but_not_the_reverse() {
        let mut c = controller();
        c.play(0);
        let start = c.play_video("https://youtu.be/dQw4w9WgXcQ", "Mezcal (Official Video)");
        match start {
            VideoStart::Embedded { commands, .. } => assert_eq!(commands, vec![AudioCommand::Pause]),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(c.state(), PlaybackState::Paused(0));
        assert!(c.video().is_playing());

        c.toggle();
        assert!(c.video().is_playing());
    }

    #[test]
    fn non_youtube_video_opens_externally() {
        let mut c = controller();
        assert_eq!(
            c.play_video("https://vimeo.com/1", "x"),
            VideoStart::External("https://vimeo.com/1".into())
        );
        assert_eq!(c.video().embed_url(), None);
    }
}
