use thiserror::Error;

use crate::alloc::AllocError;

/// Failures surfaced by tree operations.
///
/// Duplicate keys on insert and missing keys on erase/find are not
/// errors; they are reported through the returned flag, count or end
/// cursor.
#[derive(Debug, Error)]
pub enum Error {
    #[error("key not found")]
    KeyNotFound,
    #[error("node allocation failed: {0}")]
    Alloc(#[from] AllocError),
    #[error("value construction failed: {0}")]
    Construction(#[source] Box<dyn std::error::Error + Send + Sync>),
}
