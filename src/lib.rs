//! Fixture generators for a renavam-keyed record store.
//!
//! Two independent producers: a file of deliberately malformed records, and
//! a random sample of existing renavams used as search input.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod ports;

use clap::Parser;

pub use error::FixtureError;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}
