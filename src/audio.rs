//! Output-stream plumbing around cpal.
//!
//! The demos open exactly one output stream on the default device, hand a
//! generator to the callback, and let it run until a keypress. The
//! generator is moved into the callback closure: parameters are fixed
//! before the stream starts, so the callback thread is the sole owner and
//! no locking is needed.

use crate::Signal;
use anyhow::{anyhow, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{BufferSize, FromSample, Sample, SampleFormat, SizedSample, StreamConfig};

/// Frames per buffer requested from the device.
pub const BUFFER_FRAMES: u32 = 512;

/// The default output device plus the stream configuration used to play
/// on it.
pub struct AudioOutput {
    device: cpal::Device,
    config: StreamConfig,
    sample_format: SampleFormat,
}

impl AudioOutput {
    /// Opens the default output device.
    ///
    /// # Errors
    ///
    /// Fails if the host has no output device or it refuses to report a
    /// default output configuration.
    pub fn open() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow!("no audio output device available"))?;

        let supported = device.default_output_config()?;
        let sample_format = supported.sample_format();
        let mut config: StreamConfig = supported.into();
        config.buffer_size = BufferSize::Fixed(BUFFER_FRAMES);

        Ok(Self {
            device,
            config,
            sample_format,
        })
    }

    /// Sample rate of the output stream in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.config.sample_rate.0 as f64
    }

    /// Buffer size in frames; this is also the latency the demos report.
    pub fn buffer_frames(&self) -> u32 {
        BUFFER_FRAMES
    }

    /// Builds and starts an output stream that pulls samples from `signal`.
    ///
    /// The generator moves into the audio callback and is owned by it from
    /// here on. The returned stream keeps playing until it is paused or
    /// dropped; the buffer in flight always completes.
    pub fn play<S>(&self, signal: S) -> Result<cpal::Stream>
    where
        S: Signal + Send + 'static,
    {
        let stream = match self.sample_format {
            SampleFormat::F32 => self.build_stream::<f32, S>(signal)?,
            SampleFormat::I16 => self.build_stream::<i16, S>(signal)?,
            SampleFormat::U16 => self.build_stream::<u16, S>(signal)?,
            sample_format => {
                return Err(anyhow!("unsupported sample format: {sample_format}"));
            }
        };
        stream.play()?;
        Ok(stream)
    }

    fn build_stream<T, S>(&self, mut signal: S) -> Result<cpal::Stream>
    where
        T: Sample + FromSample<f64> + SizedSample,
        S: Signal + Send + 'static,
    {
        let channels = self.config.channels as usize;
        let stream = self.device.build_output_stream(
            &self.config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                // debug marker, once per buffer
                eprint!(".");
                fill_buffer(data, channels, &mut signal);
            },
            |err| eprintln!("audio stream error: {err}"),
            None,
        )?;
        Ok(stream)
    }
}

/// Fills an interleaved output buffer from a mono signal.
///
/// Every channel of a frame receives the identical generated value.
pub fn fill_buffer<T, S>(data: &mut [T], channels: usize, signal: &mut S)
where
    T: Sample + FromSample<f64>,
    S: Signal,
{
    for frame in data.chunks_mut(channels) {
        let value: T = T::from_sample(signal.next_sample());
        for sample in frame.iter_mut() {
            *sample = value;
        }
    }
}
