//! Phase-accumulating waveform generators.
//!
//! Five generator kinds, each implementing [`Signal`]: sine, saw, pulse,
//! impulse, and white noise. The periodic kinds keep their position as a
//! running count of samples (not a normalized phase) and wrap it against
//! `sample_rate / frequency`, which is exactly the recurrence an audio
//! callback evaluates per frame.

mod impulse;
mod noise;
mod pulse;
mod saw;
mod sine;
mod traits;

pub use impulse::ImpulseGenerator;
pub use noise::NoiseGenerator;
pub use pulse::PulseGenerator;
pub use saw::SawGenerator;
pub use sine::SineGenerator;
pub use traits::Oscillator;

use crate::Signal;

/// Wraps a sample-counting phase back into the current period.
///
/// Once `phase` passes `period`, it is pulled back by the integer part of
/// the period, so the fractional part of a non-integer period carries over
/// into the next cycle instead of being discarded.
pub(crate) fn wrap_phase(phase: f64, period: f64) -> f64 {
    if phase > period {
        phase - period.floor()
    } else {
        phase
    }
}

/// The waveform kinds the demo programs can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Saw,
    Pulse,
    Impulse,
    Noise,
}

impl Waveform {
    /// Parses a command-line flag such as `--saw`.
    ///
    /// # Examples
    ///
    /// ```
    /// use waveforms::Waveform;
    ///
    /// assert_eq!(Waveform::from_flag("--pulse"), Some(Waveform::Pulse));
    /// assert_eq!(Waveform::from_flag("--triangle"), None);
    /// ```
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "--sine" => Some(Self::Sine),
            "--saw" => Some(Self::Saw),
            "--pulse" => Some(Self::Pulse),
            "--impulse" => Some(Self::Impulse),
            "--noise" => Some(Self::Noise),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::Saw => "saw",
            Self::Pulse => "pulse",
            Self::Impulse => "impulse",
            Self::Noise => "noise",
        }
    }

    /// Noise is the only kind that does not take a frequency.
    pub fn needs_frequency(self) -> bool {
        !matches!(self, Self::Noise)
    }

    /// Saw and pulse take a width (duty-cycle) parameter.
    pub fn needs_width(self) -> bool {
        matches!(self, Self::Saw | Self::Pulse)
    }
}

/// A generator of any [`Waveform`] kind behind a single `Signal`.
///
/// The audio callback owns exactly one of these for the lifetime of the
/// stream; the kind and its parameters are fixed before the stream starts.
pub enum WaveformGenerator {
    Sine(SineGenerator),
    Saw(SawGenerator),
    Pulse(PulseGenerator),
    Impulse(ImpulseGenerator),
    Noise(NoiseGenerator),
}

impl Signal for WaveformGenerator {
    fn next_sample(&mut self) -> f64 {
        match self {
            Self::Sine(generator) => generator.next_sample(),
            Self::Saw(generator) => generator.next_sample(),
            Self::Pulse(generator) => generator.next_sample(),
            Self::Impulse(generator) => generator.next_sample(),
            Self::Noise(generator) => generator.next_sample(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_parsing() {
        assert_eq!(Waveform::from_flag("--sine"), Some(Waveform::Sine));
        assert_eq!(Waveform::from_flag("--saw"), Some(Waveform::Saw));
        assert_eq!(Waveform::from_flag("--pulse"), Some(Waveform::Pulse));
        assert_eq!(Waveform::from_flag("--impulse"), Some(Waveform::Impulse));
        assert_eq!(Waveform::from_flag("--noise"), Some(Waveform::Noise));
        assert_eq!(Waveform::from_flag("--square"), None);
        assert_eq!(Waveform::from_flag("sine"), None);
    }

    #[test]
    fn test_parameter_requirements() {
        assert!(Waveform::Sine.needs_frequency());
        assert!(!Waveform::Noise.needs_frequency());
        assert!(Waveform::Saw.needs_width());
        assert!(Waveform::Pulse.needs_width());
        assert!(!Waveform::Sine.needs_width());
        assert!(!Waveform::Impulse.needs_width());
    }

    #[test]
    fn test_wrap_phase_carries_fraction() {
        // period 100.5: a phase of 101.0 wraps by floor(100.5) = 100
        assert_eq!(wrap_phase(101.0, 100.5), 1.0);
        // phases at or below the period pass through untouched
        assert_eq!(wrap_phase(100.5, 100.5), 100.5);
        assert_eq!(wrap_phase(0.0, 100.5), 0.0);
    }

    #[test]
    fn test_dispatch_matches_inner_generator() {
        let mut direct = SineGenerator::new(440.0, 44100.0);
        let mut wrapped = WaveformGenerator::Sine(SineGenerator::new(440.0, 44100.0));
        for _ in 0..64 {
            assert_eq!(wrapped.next_sample(), direct.next_sample());
        }
    }
}
