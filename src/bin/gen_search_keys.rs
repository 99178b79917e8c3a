//! Samples 100 renavams from `registros_carros.txt` into `buscas.txt`.
//!
//! Usage: `gen_search_keys` (no arguments)

use std::path::Path;
use std::process::ExitCode;

use renavam_fixtures::commands::sample;
use renavam_fixtures::config::{DEFAULT_SAMPLE_SIZE, DEFAULT_SEARCH_OUTPUT, DEFAULT_SEARCH_SOURCE};
use renavam_fixtures::context::ServiceContext;

fn main() -> ExitCode {
    renavam_fixtures::logging::init();
    let ctx = ServiceContext::live(None);
    let result = sample::run_with_context(
        &ctx,
        Path::new(DEFAULT_SEARCH_SOURCE),
        Path::new(DEFAULT_SEARCH_OUTPUT),
        DEFAULT_SAMPLE_SIZE,
    );
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
