#[derive(Debug, Clone, PartialEq)]
pub enum AudioCommand {
    PlayTrack { index: usize, gain: f32 },
    Pause,
    Resume,
    Restart,
    SetVolume(f32),
}
