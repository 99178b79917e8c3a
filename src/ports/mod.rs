//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the fixture generators and an
//! external resource (disk, entropy). Implementations live in `src/adapters/`.

pub mod filesystem;
pub mod random;

pub use filesystem::FileSystem;
pub use random::RandomSource;
