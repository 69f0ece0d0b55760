//! Sine wave generator.

use super::Oscillator;
use crate::Signal;
use std::f64::consts::PI;

/// A sine wave generator.
///
/// Output at sample `t` is `sin(2π · frequency · t / sample_rate)`, where
/// `t` counts samples since the generator was created. The counter is never
/// wrapped: `sin` is periodic on its own, but the counter grows without
/// bound, so phase precision slowly degrades over very long runs. That
/// drift is a known limitation of these demos, not something the generator
/// corrects.
pub struct SineGenerator {
    /// Samples elapsed since the generator started.
    phase: f64,
    /// Frequency in Hz.
    frequency: f64,
    /// Sample rate in Hz.
    sample_rate: f64,
}

impl SineGenerator {
    /// Creates a new sine generator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the sine wave in Hz, must be positive
    /// * `sample_rate` - Sample rate in Hz (e.g., 44100.0 for CD quality)
    ///
    /// # Examples
    ///
    /// ```
    /// use waveforms::{Signal, SineGenerator};
    ///
    /// // A 440 Hz (A4) sine wave at 44.1 kHz starts at zero
    /// let mut generator = SineGenerator::new(440.0, 44100.0);
    /// assert_eq!(generator.next_sample(), 0.0);
    /// ```
    pub fn new(frequency: f64, sample_rate: f64) -> Self {
        Self {
            phase: 0.0,
            frequency,
            sample_rate,
        }
    }
}

impl Signal for SineGenerator {
    fn next_sample(&mut self) -> f64 {
        let sample = (2.0 * PI * self.frequency * self.phase / self.sample_rate).sin();
        self.phase += 1.0;
        sample
    }
}

impl Oscillator for SineGenerator {
    fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    fn frequency(&self) -> f64 {
        self.frequency
    }

    fn reset(&mut self) {
        self.phase = 0.0;
    }
}
