//! Live adapters for real external interactions.

pub mod filesystem;
pub mod random;
