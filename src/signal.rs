//! Core signal trait.
//!
//! Everything that produces audio samples, one at a time, implements
//! [`Signal`]: the waveform generators here, but also anything a caller
//! might want to feed into [`crate::audio::AudioOutput::play`].

/// Common interface for sample-producing sources.
///
/// The trait provides two operations:
/// - Single sample generation via `next_sample()`
/// - Batch generation via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, nominally between -1.0 and 1.0
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}
