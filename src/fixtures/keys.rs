//! Search keys: renavams drawn from an existing record file.

use std::fmt::Write as _;

use crate::error::FixtureError;
use crate::ports::RandomSource;

/// Parses the renavam (first field) of every line in `contents`.
///
/// Lines end at `\r\n`, `\r` or `\n`. Whitespace around the field is
/// ignored. Duplicates are kept.
///
/// # Errors
///
/// Returns [`FixtureError::InvalidKey`] for the first line whose leading
/// field is not an integer, blank lines included.
pub fn extract_keys(contents: &str) -> Result<Vec<i64>, FixtureError> {
    record_lines(contents)
        .into_iter()
        .enumerate()
        .map(|(idx, line)| {
            let field = line.split(',').next().unwrap_or_default().trim();
            field
                .parse::<i64>()
                .map_err(|_| FixtureError::InvalidKey { line: idx + 1, value: field.to_string() })
        })
        .collect()
}

/// Splits text into lines on `\r\n`, `\r` or `\n`.
///
/// A trailing terminator does not produce an extra empty line.
fn record_lines(contents: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = contents;
    while !rest.is_empty() {
        let Some(end) = rest.find(['\r', '\n']) else {
            lines.push(rest);
            break;
        };
        lines.push(&rest[..end]);
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
    }
    lines
}

/// Draws `amount` keys from `pool` uniformly, without replacement.
///
/// Draws are by position, so a renavam listed twice in `pool` may be drawn
/// twice. The result is in draw order.
///
/// # Errors
///
/// Returns [`FixtureError::SampleTooLarge`] if `amount` exceeds the pool.
pub fn sample_keys(
    pool: &[i64],
    amount: usize,
    rng: &dyn RandomSource,
) -> Result<Vec<i64>, FixtureError> {
    if amount > pool.len() {
        return Err(FixtureError::SampleTooLarge { requested: amount, available: pool.len() });
    }
    Ok(rng.sample_indices(pool.len(), amount).into_iter().map(|i| pool[i]).collect())
}

/// Renders one key per line, each terminated by `\n`.
#[must_use]
pub fn render_keys(keys: &[i64]) -> String {
    keys.iter().fold(String::new(), |mut out, key| {
        let _ = writeln!(out, "{key}");
        out
    })
}
