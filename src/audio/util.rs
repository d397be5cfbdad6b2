use rodio::{
    DeviceTrait, OutputStream, OutputStreamBuilder, Sink,
    cpal::{BufferSize, SampleFormat, default_host, traits::HostTrait},
};

use crate::audio::error::AudioError;

const BUFFER_FRAMES: u32 = 4096;
const FALLBACK_SAMPLE_RATE: u32 = 48_000;

/// Opens the default output device and a sink attached to its mixer.
pub fn open_output() -> Result<(OutputStream, Sink), AudioError> {
    let device = default_host()
        .default_output_device()
        .ok_or_else(|| AudioError::Output("no default output device".into()))?;

    let (sample_rate, sample_format) = device
        .default_output_config()
        .map(|config| (config.sample_rate().0, config.sample_format()))
        .unwrap_or((FALLBACK_SAMPLE_RATE, SampleFormat::F32));

    let stream = OutputStreamBuilder::default()
        .with_device(device)
        .with_sample_rate(sample_rate)
        .with_sample_format(sample_format)
        .with_buffer_size(BufferSize::Fixed(BUFFER_FRAMES))
        .open_stream_or_fallback()
        .map_err(|e| AudioError::Output(e.to_string()))?;
    let sink = Sink::connect_new(stream.mixer());

    Ok((stream, sink))
}
