//! Writes `registros_invalidos.txt` in the current directory.
//!
//! Usage: `gen_invalid_records` (no arguments)

use std::path::Path;
use std::process::ExitCode;

use renavam_fixtures::commands::invalid;
use renavam_fixtures::config::DEFAULT_INVALID_OUTPUT;
use renavam_fixtures::context::ServiceContext;

fn main() -> ExitCode {
    renavam_fixtures::logging::init();
    // The random source seeds lazily; this command never draws from it.
    let ctx = ServiceContext::live(None);
    match invalid::run_with_context(&ctx, Path::new(DEFAULT_INVALID_OUTPUT)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
