//! Fixture content: malformed record lines and sampled search keys.
//!
//! Both generators are pure here; file I/O happens in `commands`.

pub mod invalid;
pub mod keys;

pub use invalid::{invalid_records, render_invalid_records, Malformation};
pub use keys::{extract_keys, render_keys, sample_keys};
