//! Saw wave generator with adjustable rise width.

use super::{wrap_phase, Oscillator};
use crate::Signal;

/// A saw wave generator with an adjustable rise fraction.
///
/// Each period rises linearly from -1.0 to 1.0 over the first `width`
/// fraction of the period, then falls linearly back to -1.0 over the rest.
/// A width near 0 or 1 approaches an ideal sharp-edged sawtooth in either
/// direction; `width = 0.5` gives a triangle wave.
pub struct SawGenerator {
    /// Samples elapsed within the current period.
    phase: f64,
    /// Frequency in Hz.
    frequency: f64,
    /// Fraction of the period spent rising, strictly inside (0, 1).
    width: f64,
    /// Sample rate in Hz.
    sample_rate: f64,
}

impl SawGenerator {
    /// Creates a new saw generator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the saw wave in Hz, must be positive
    /// * `width` - Rise fraction of each period, strictly between 0 and 1
    /// * `sample_rate` - Sample rate in Hz (e.g., 44100.0 for CD quality)
    ///
    /// # Panics
    ///
    /// Panics if `width` is not strictly between 0.0 and 1.0: both ramp
    /// slopes divide by `width` or `1 - width`. The demos validate width at
    /// input time, so reaching this panic is a programming error.
    ///
    /// # Examples
    ///
    /// ```
    /// use waveforms::{Signal, SawGenerator};
    ///
    /// let mut generator = SawGenerator::new(440.0, 0.5, 44100.0);
    /// assert_eq!(generator.next_sample(), -1.0);
    /// ```
    pub fn new(frequency: f64, width: f64, sample_rate: f64) -> Self {
        assert!(
            width > 0.0 && width < 1.0,
            "saw width must lie strictly inside (0, 1), got {width}"
        );
        Self {
            phase: 0.0,
            frequency,
            width,
            sample_rate,
        }
    }
}

impl Signal for SawGenerator {
    fn next_sample(&mut self) -> f64 {
        let period = self.sample_rate / self.frequency;
        self.phase = wrap_phase(self.phase, period);

        let sample = if self.phase < self.width * period {
            -1.0 + 2.0 * self.phase / (period * self.width)
        } else {
            1.0 - 2.0 * (self.phase - self.width * period) / (period * (1.0 - self.width))
        };
        // An amplitude spike here means the recurrence itself is broken.
        assert!(
            (-1.0..=1.0).contains(&sample),
            "saw amplitude outside [-1, 1]: {sample}"
        );

        self.phase += 1.0;
        sample
    }
}

impl Oscillator for SawGenerator {
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
