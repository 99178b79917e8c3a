//! Binary entrypoint for the `renavam-fixtures` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    renavam_fixtures::logging::init();
    match renavam_fixtures::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
