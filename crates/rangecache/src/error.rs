//! Error types for rangecache

use std::fmt;

/// Result type alias for rangecache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache construction and range operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cache capacity must be at least 1
    InvalidCapacity(usize),

    /// Point index outside the array
    IndexOutOfBounds {
        /// Offending index
        index: usize,
        /// Array length
        len: usize,
    },

    /// Range with `left > right`
    InvalidRange {
        /// Left bound (inclusive)
        left: usize,
        /// Right bound (inclusive)
        right: usize,
    },

    /// Range whose right bound falls outside the array
    RangeOutOfBounds {
        /// Left bound (inclusive)
        left: usize,
        /// Right bound (inclusive)
        right: usize,
        /// Array length
        len: usize,
    },

    /// Aggregate over the range does not fit in an `i64`
    Overflow {
        /// Left bound (inclusive)
        left: usize,
        /// Right bound (inclusive)
        right: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity(cap) => {
                write!(f, "Invalid cache capacity: {} (must be at least 1)", cap)
            }
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "Index out of bounds: {} (array length {})", index, len)
            }
            Error::InvalidRange { left, right } => {
                write!(f, "Invalid range: left {} is greater than right {}", left, right)
            }
            Error::RangeOutOfBounds { left, right, len } => write!(
                f,
                "Range out of bounds: [{}, {}] (array length {})",
                left, right, len
            ),
            Error::Overflow { left, right } => {
                write!(f, "Aggregate overflow over range [{}, {}]", left, right)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Check that `[left, right]` is a valid inclusive range over an array of `len` items.
pub(crate) fn check_range(left: usize, right: usize, len: usize) -> Result<()> {
    if left > right {
        return Err(Error::InvalidRange { left, right });
    }
    if right >= len {
        return Err(Error::RangeOutOfBounds { left, right, len });
    }
    Ok(())
}

/// Check that `index` addresses an element of an array of `len` items.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(Error::IndexOutOfBounds { index, len });
    }
    Ok(())
}
