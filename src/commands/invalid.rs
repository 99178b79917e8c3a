//! `renavam-fixtures invalid` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::error::FixtureError;
use crate::fixtures::{render_invalid_records, Malformation};

/// Writes the malformed-record fixture to `output`, overwriting it.
///
/// Returns the number of lines written.
///
/// # Errors
///
/// Returns [`FixtureError::Write`] if the file cannot be written.
pub fn write_invalid_records(ctx: &ServiceContext, output: &Path) -> Result<usize, FixtureError> {
    for malformation in Malformation::ALL {
        tracing::trace!(
            kind = malformation.description(),
            line = malformation.line(),
            "invalid record"
        );
    }
    let contents = render_invalid_records();
    if ctx.fs.exists(output) {
        tracing::debug!(path = %output.display(), "overwriting existing file");
    }
    ctx.fs
        .write(output, &contents)
        .map_err(|source| FixtureError::Write { path: output.to_path_buf(), source })?;
    tracing::info!(path = %output.display(), bytes = contents.len(), "wrote invalid records");
    Ok(Malformation::ALL.len())
}

/// Execute the `invalid` command.
///
/// # Errors
///
/// Returns an error string if the output file cannot be written.
pub fn run_with_context(ctx: &ServiceContext, output: &Path) -> Result<(), String> {
    write_invalid_records(ctx, output).map_err(|e| e.to_string())?;
    println!("{} gerado com dados malformados para teste.", output.display());
    Ok(())
}
