//! Waveforms - real-time waveform demonstration programs.
//!
//! This library provides a small family of phase-accumulating waveform
//! generators (sine, saw, pulse, impulse, white noise) together with the
//! audio-stream and console plumbing used by the command-line demos that
//! play them.

pub mod audio;
pub mod console;
pub mod generators;
pub mod signal;

// Re-export commonly used types at the crate root
pub use generators::{
    ImpulseGenerator, NoiseGenerator, Oscillator, PulseGenerator, SawGenerator, SineGenerator,
    Waveform, WaveformGenerator,
};
pub use signal::Signal;
