//! Error type shared by the fixture generators.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while generating fixture files.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The source file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The output file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The first field of a record line is not an integer.
    #[error("Invalid renavam on line {line}: {value:?} is not an integer")]
    InvalidKey {
        /// 1-based line number in the source file.
        line: usize,
        /// The offending first field, as read.
        value: String,
    },

    /// More keys were requested than the pool holds.
    #[error("Sample larger than population: requested {requested}, only {available} available")]
    SampleTooLarge {
        /// Requested sample size.
        requested: usize,
        /// Number of keys in the pool.
        available: usize,
    },

    /// A configuration file could not be loaded.
    #[error("Failed to load config {}: {message}", path.display())]
    Config {
        /// Path of the configuration file.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// A numeric environment override could not be parsed.
    #[error("Invalid value for {name}: {value:?}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Raw value found in the environment.
        value: String,
    },
}
