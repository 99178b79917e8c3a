//! Service context bundling all port trait objects.

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::random::LiveRandomSource;
use crate::ports::filesystem::FileSystem;
use crate::ports::random::RandomSource;

/// Bundles all port trait objects into a single context.
pub struct ServiceContext {
    /// Filesystem for file I/O.
    pub fs: Box<dyn FileSystem>,
    /// Random source for sampling.
    pub rng: Box<dyn RandomSource>,
}

impl ServiceContext {
    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(fs: Box<dyn FileSystem>, rng: Box<dyn RandomSource>) -> Self {
        Self { fs, rng }
    }

    /// Creates a live context backed by the real disk.
    ///
    /// With a seed the random source is reproducible; otherwise it is seeded
    /// from the OS.
    #[must_use]
    pub fn live(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(LiveRandomSource::from_entropy, LiveRandomSource::seeded);
        Self::new(Box::new(LiveFileSystem), Box::new(rng))
    }
}
