//! `renavam-fixtures sample` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::error::FixtureError;
use crate::fixtures::{extract_keys, render_keys, sample_keys};

/// Samples `amount` renavams from `source` and writes them to `output`.
///
/// Nothing is written unless reading, parsing, and sampling all succeed.
/// Returns the sampled keys in draw order.
///
/// # Errors
///
/// Returns an error if `source` cannot be read, a line's first field is not
/// an integer, `amount` exceeds the number of lines, or `output` cannot be
/// written.
pub fn write_search_keys(
    ctx: &ServiceContext,
    source: &Path,
    output: &Path,
    amount: usize,
) -> Result<Vec<i64>, FixtureError> {
    let contents = ctx
        .fs
        .read_to_string(source)
        .map_err(|err| FixtureError::Read { path: source.to_path_buf(), source: err })?;
    let pool = extract_keys(&contents)?;
    tracing::debug!(path = %source.display(), pool = pool.len(), requested = amount, "loaded key pool");

    let keys = sample_keys(&pool, amount, ctx.rng.as_ref())?;
    let rendered = render_keys(&keys);
    if ctx.fs.exists(output) {
        tracing::debug!(path = %output.display(), "overwriting existing file");
    }
    ctx.fs
        .write(output, &rendered)
        .map_err(|err| FixtureError::Write { path: output.to_path_buf(), source: err })?;
    tracing::info!(path = %output.display(), keys = keys.len(), "wrote search keys");
    Ok(keys)
}

/// Execute the `sample` command.
///
/// # Errors
///
/// Returns an error string if sampling or writing fails.
pub fn run_with_context(
    ctx: &ServiceContext,
    source: &Path,
    output: &Path,
    amount: usize,
) -> Result<(), String> {
    let keys = write_search_keys(ctx, source, output, amount).map_err(|e| e.to_string())?;
    println!("{} gerado com {} renavams existentes.", output.display(), keys.len());
    Ok(())
}
