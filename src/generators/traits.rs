//! Trait shared by the periodic generators.

/// Common interface for the periodic waveform generators.
///
/// Covers frequency control and state management; the noise generator has
/// neither a frequency nor a phase, so it only implements `Signal`.
pub trait Oscillator {
    /// Sets the frequency of the generator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - New frequency in Hz
    fn set_frequency(&mut self, frequency: f64);

    /// Gets the current frequency of the generator.
    ///
    /// # Returns
    ///
    /// Current frequency in Hz
    fn frequency(&self) -> f64;

    /// Resets the generator to its initial state.
    fn reset(&mut self);
}
