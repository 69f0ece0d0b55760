//! White noise generator.

use crate::Signal;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A white noise generator.
///
/// Each sample is an independent draw `(n - 64) / 64` with `n` uniform over
/// `0..128`, giving 128 evenly spaced levels spanning [-1.0, 0.984375].
/// Frequency, width, and phase do not apply; every call is a fresh draw.
pub struct NoiseGenerator<R: Rng = StdRng> {
    /// Random number generator
    rng: R,
}

impl NoiseGenerator<StdRng> {
    /// Creates a noise generator seeded from OS entropy.
    ///
    /// Each instance draws its own seed at construction; there is no fixed
    /// default seed. Use [`NoiseGenerator::with_rng`] for deterministic
    /// output.
    ///
    /// # Examples
    ///
    /// ```
    /// use waveforms::{NoiseGenerator, Signal};
    ///
    /// let mut noise = NoiseGenerator::new();
    /// let sample = noise.next_sample();
    /// assert!((-1.0..=1.0).contains(&sample));
    /// ```
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for NoiseGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> NoiseGenerator<R> {
    /// Creates a noise generator with a caller-supplied RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use waveforms::{NoiseGenerator, Signal};
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = NoiseGenerator::with_rng(rng);
    /// let sample = noise.next_sample();
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Signal for NoiseGenerator<R> {
    fn next_sample(&mut self) -> f64 {
        (self.rng.gen_range(0..128) - 64) as f64 / 64.0
    }
}
