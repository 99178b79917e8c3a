//! Random source port for sampling without replacement.

/// Draws random positions from a sequence.
///
/// Abstracting randomness lets tests pin the draw with a fixed seed or a
/// scripted sequence.
pub trait RandomSource: Send + Sync {
    /// Returns `amount` distinct indices in `0..length`, in draw order.
    ///
    /// Callers guarantee `amount <= length`.
    fn sample_indices(&self, length: usize, amount: usize) -> Vec<usize>;
}
