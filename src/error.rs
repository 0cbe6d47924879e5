//! Error types for tree construction and access.
//!
//! Every error in this crate is a precondition violation: it is reported at
//! the point of detection and there is no internal recovery or retry logic.

/// The error type for tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A structure was constructed with capacity zero.
    InvalidCapacity,
    /// An index argument fell outside the structure's valid domain.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of valid slots.
        len: usize,
    },
    /// An inversion-count input contained an element below 1.
    NonPositiveValue,
    /// A caller-supplied sequence did not match the tree's length.
    LengthMismatch {
        /// The tree's length.
        expected: usize,
        /// The sequence's length.
        actual: usize,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidCapacity => f.write_str("capacity must be at least 1"),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            Error::NonPositiveValue => f.write_str("inversion counting requires values >= 1"),
            Error::LengthMismatch { expected, actual } => {
                write!(f, "sequence length {} does not match tree length {}", actual, expected)
            }
        }
    }
}

impl std::error::Error for Error {}
