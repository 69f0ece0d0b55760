//! Impulse train generator.

use super::Oscillator;
use crate::Signal;

/// An impulse train generator.
///
/// Emits a single 1.0 sample once per period and 0.0 everywhere else. The
/// impulse fires on the sample where the running phase first exceeds the
/// period, at which point the phase wraps by the integer part of the
/// period. The period is recomputed on every sample, so a frequency change
/// takes effect on the very next sample.
pub struct ImpulseGenerator {
    /// Samples elapsed within the current period.
    phase: f64,
    /// Frequency in Hz.
    frequency: f64,
    /// Sample rate in Hz.
    sample_rate: f64,
}

impl ImpulseGenerator {
    /// Creates a new impulse generator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Impulse rate in Hz, must be positive
    /// * `sample_rate` - Sample rate in Hz (e.g., 44100.0 for CD quality)
    ///
    /// # Examples
    ///
    /// ```
    /// use waveforms::{ImpulseGenerator, Signal};
    ///
    /// let mut generator = ImpulseGenerator::new(441.0, 44100.0);
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

impl Signal for ImpulseGenerator {
    fn next_sample(&mut self) -> f64 {
        let period = self.sample_rate / self.frequency;

        let sample = if self.phase > period {
            self.phase -= period.floor();
            1.0
        } else {
            0.0
        };

        self.phase += 1.0;
        sample
    }
}

impl Oscillator for ImpulseGenerator {
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
