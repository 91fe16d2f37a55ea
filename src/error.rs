//! Error type shared by every structure in the crate.
//!
//! Only contract violations are errors. A missed search or delete is
//! reported through a `bool` return, never through [`Error`].

use core::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for rejected operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index fell outside `[0, len)`.
    OutOfRange {
        /// The offending index (or input length for bulk builds).
        index: usize,
        /// The number of addressable positions.
        len: usize,
    },
    /// A range query was given `left > right`.
    InvalidRange {
        /// Inclusive left bound.
        left: usize,
        /// Inclusive right bound.
        right: usize,
    },
    /// A constructor was given parameters it cannot honour.
    InvalidConfiguration(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Error::InvalidRange { left, right } => {
                write!(f, "invalid range: left bound {left} exceeds right bound {right}")
            }
            Error::InvalidConfiguration(reason) => {
                write!(f, "invalid configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {}
