//! Hello sine: the smallest real-time audio demo. Prompts for an integer
//! frequency, plays a sine wave on the default output device, and stops on
//! the next keypress.

use anyhow::{Context, Result};
use cpal::traits::StreamTrait;
use waveforms::audio::AudioOutput;
use waveforms::console;
use waveforms::SineGenerator;

fn main() -> Result<()> {
    let output = AudioOutput::open().context("opening the default output device")?;

    let frequency = console::prompt_integer("Enter frequency (in Hz):  ", 1, 20000)?;
    let generator = SineGenerator::new(frequency as f64, output.sample_rate());

    let stream = output
        .play(generator)
        .context("starting the output stream")?;
    println!("stream latency: {} frames", output.buffer_frames());
    println!("running... press any key to quit");
    console::wait_for_keypress()?;
    stream.pause().context("stopping the output stream")?;

    Ok(())
}
