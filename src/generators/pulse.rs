//! Pulse wave generator with a fixed duty cycle.

use super::{wrap_phase, Oscillator};
use crate::Signal;

/// A pulse wave generator with a fixed duty cycle.
///
/// The output is unipolar: 1.0 for the first `width` fraction of each
/// period and 0.0 for the remainder. `width` covers the closed interval
/// [0, 1]; at the extremes the wave degenerates to (almost) always-low or
/// always-high rather than being rejected.
pub struct PulseGenerator {
    /// Samples elapsed within the current period.
    phase: f64,
    /// Frequency in Hz.
    frequency: f64,
    /// Duty cycle: fraction of the period spent high, in [0, 1].
    width: f64,
    /// Sample rate in Hz.
    sample_rate: f64,
}

impl PulseGenerator {
    /// Creates a new pulse generator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the pulse wave in Hz, must be positive
    /// * `width` - Duty cycle in [0, 1]
    /// * `sample_rate` - Sample rate in Hz (e.g., 44100.0 for CD quality)
    ///
    /// # Panics
    ///
    /// Panics if `width` lies outside [0, 1].
    ///
    /// # Examples
    ///
    /// ```
    /// use waveforms::{PulseGenerator, Signal};
    ///
    /// let mut generator = PulseGenerator::new(440.0, 0.5, 44100.0);
    /// assert_eq!(generator.next_sample(), 1.0);
    /// ```
    pub fn new(frequency: f64, width: f64, sample_rate: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&width),
            "pulse width must lie in [0, 1], got {width}"
        );
        Self {
            phase: 0.0,
            frequency,
            width,
            sample_rate,
        }
    }
}

impl Signal for PulseGenerator {
    fn next_sample(&mut self) -> f64 {
        let period = self.sample_rate / self.frequency;
        self.phase = wrap_phase(self.phase, period);

        let sample = if self.phase <= self.width * period {
            1.0
        } else {
            0.0
        };

        self.phase += 1.0;
        sample
    }
}

impl Oscillator for PulseGenerator {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_creation() {
        let generator = PulseGenerator::new(440.0, 0.5, 44100.0);
        assert_eq!(generator.frequency(), 440.0);
    }

    #[test]
    #[should_panic(expected = "pulse width")]
    fn test_width_above_one_rejected() {
        PulseGenerator::new(440.0, 1.5, 44100.0);
    }

    #[test]
    fn test_output_is_binary() {
        let mut generator = PulseGenerator::new(440.0, 0.3, 44100.0);
        for _ in 0..44100 {
            let sample = generator.next_sample();
            assert!(sample == 0.0 || sample == 1.0);
        }
    }

    #[test]
    fn test_half_width_first_period() {
        // 100 Hz at 44.1 kHz: period is 441 samples, high while the phase
        // is at or below 220.5, so samples 0..=220 are high
        let mut generator = PulseGenerator::new(100.0, 0.5, 44100.0);
        let samples: Vec<f64> = (0..441).map(|_| generator.next_sample()).collect();
        assert!(samples[..221].iter().all(|&s| s == 1.0));
        assert!(samples[221..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_duty_cycle_holds_over_periods() {
        let mut generator = PulseGenerator::new(100.0, 0.5, 44100.0);
        let high = (0..4410).filter(|_| generator.next_sample() == 1.0).count();
        // 221 high samples per 441-sample period, within one per period
        assert!((high as i64 - 2210).abs() <= 10, "high count {high}");
    }

    #[test]
    fn test_zero_width_is_low_after_start() {
        // Only the very first sample (phase exactly 0) can satisfy
        // `phase <= 0`; everything after is low
        let mut generator = PulseGenerator::new(100.0, 0.0, 44100.0);
        assert_eq!(generator.next_sample(), 1.0);
        for _ in 0..4410 {
            assert_eq!(generator.next_sample(), 0.0);
        }
    }

    #[test]
    fn test_full_width_is_always_high() {
        let mut generator = PulseGenerator::new(100.0, 1.0, 44100.0);
        for _ in 0..4410 {
            assert_eq!(generator.next_sample(), 1.0);
        }
    }

    #[test]
    fn test_reset() {
        let mut generator = PulseGenerator::new(100.0, 0.5, 44100.0);
        for _ in 0..300 {
            generator.next_sample();
        }
        generator.reset();
        assert_eq!(generator.next_sample(), 1.0);
    }
}
