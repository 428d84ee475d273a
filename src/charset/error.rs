//! Errors raised while building character sets

use std::fmt;

/// Error returned by the fallible character set constructors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharsetError {
    /// A range whose first code point is greater than its last
    DescendingRange {
        /// Requested start of the range
        first: u32,
        /// Requested end of the range
        last: u32,
    },
    /// A code point above [`MAX_CHAR`](super::MAX_CHAR)
    OutOfDomain {
        /// The offending value
        value: u32,
    },
    /// JSON (de)serialization failure
    Json {
        /// Message reported by `serde_json`
        message: String,
    },
}

impl fmt::Display for CharsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharsetError::DescendingRange { first, last } => {
                write!(f, "descending ranges not supported: {}-{}", first, last)
            }
            CharsetError::OutOfDomain { value } => {
                write!(
                    f,
                    "code point {:#x} is outside the domain 0x0-{:#x}",
                    value,
                    super::MAX_CHAR
                )
            }
            CharsetError::Json { message } => write!(f, "JSON error: {}", message),
        }
    }
}

impl std::error::Error for CharsetError {}

impl From<serde_json::Error> for CharsetError {
    fn from(e: serde_json::Error) -> Self {
        CharsetError::Json {
            message: e.to_string(),
        }
    }
}
