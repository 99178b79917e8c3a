//! Live adapter for the `RandomSource` port.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::ports::RandomSource;

/// Random source backed by a `StdRng`.
///
/// The generator is created on the first draw, so commands that never
/// sample never touch OS entropy.
pub struct LiveRandomSource {
    seed: Option<u64>,
    rng: Mutex<Option<StdRng>>,
}

impl LiveRandomSource {
    /// Creates a random source seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self { seed: None, rng: Mutex::new(None) }
    }

    /// Creates a reproducible random source from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), rng: Mutex::new(None) }
    }

    #[cfg(test)]
    fn is_initialised(&self) -> bool {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }
}

impl RandomSource for LiveRandomSource {
    fn sample_indices(&self, length: usize, amount: usize) -> Vec<usize> {
        let mut guard = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let rng = guard.get_or_insert_with(|| {
            self.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
        });
        index::sample(rng, length, amount).into_vec()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn indices_are_distinct_and_in_range() {
        let source = LiveRandomSource::from_entropy();
        let picked = source.sample_indices(50, 20);

        assert_eq!(picked.len(), 20);
        assert!(picked.iter().all(|&i| i < 50));
        assert_eq!(picked.iter().collect::<HashSet<_>>().len(), 20);
    }

    #[test]
    fn same_seed_same_draw() {
        let a = LiveRandomSource::seeded(42).sample_indices(1000, 10);
        let b = LiveRandomSource::seeded(42).sample_indices(1000, 10);
        assert_eq!(a, b);
    }

    #[test]
    fn full_draw_is_a_permutation() {
        let mut picked = LiveRandomSource::seeded(7).sample_indices(5, 5);
        picked.sort_unstable();
        assert_eq!(picked, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn generator_is_created_on_first_draw() {
        let source = LiveRandomSource::from_entropy();
        assert!(!source.is_initialised());
        source.sample_indices(4, 2);
        assert!(source.is_initialised());
    }

    #[test]
    fn seeded_draws_continue_one_stream() {
        let source = LiveRandomSource::seeded(42);
        let first = source.sample_indices(1000, 10);
        let second = source.sample_indices(1000, 10);
        let both = LiveRandomSource::seeded(42);
        assert_eq!(both.sample_indices(1000, 10), first);
        assert_eq!(both.sample_indices(1000, 10), second);
    }

    #[test]
    fn empty_draw() {
        assert!(LiveRandomSource::seeded(1).sample_indices(3, 0).is_empty());
        assert!(LiveRandomSource::seeded(1).sample_indices(0, 0).is_empty());
    }
}
